//! Scenario: full pipeline runs.
//!
//! # Invariants under test
//!
//! 1. The default run cleans 1000 orders and the insights agree with the
//!    cleaned dataset.
//! 2. Two runs with the same config produce identical outputs.
//! 3. A config loaded from YAML drives the run.
//! 4. The 5-record run yields 5 sorted orders with exact totals.

use ecom_config::{load_layered_yaml_from_strings, report_unused_keys, UnusedKeyPolicy};
use ecom_pipeline::{run_pipeline, PipelineConfig};
use ecom_schemas::Cents;

#[test]
fn default_run_reports_every_order() {
    let out = run_pipeline(&PipelineConfig::default()).unwrap();

    assert_eq!(out.cleaned.len(), 1000);
    assert_eq!(out.clean_report.rows_out, 1000);
    assert_eq!(out.insights.total_orders, 1000);

    let total: Cents = out.cleaned.iter().map(|o| o.total_amount).sum();
    assert_eq!(out.insights.total_sales, total);
    assert_eq!(out.dashboard.panels.len(), 4);
}

#[test]
fn same_config_same_output() {
    let cfg = PipelineConfig {
        n_records: 250,
        seed: 17,
    };
    let a = run_pipeline(&cfg).unwrap();
    let b = run_pipeline(&cfg).unwrap();

    assert_eq!(a.cleaned, b.cleaned);
    assert_eq!(a.aggregation, b.aggregation);
    assert_eq!(a.insights, b.insights);
    assert_eq!(a.dashboard, b.dashboard);
}

#[test]
fn yaml_config_drives_the_run() {
    let loaded =
        load_layered_yaml_from_strings(&["generator:\n  n_records: 40\n  seed: 5\n"]).unwrap();
    report_unused_keys(&loaded.config_json, UnusedKeyPolicy::Fail).unwrap();

    let cfg = PipelineConfig::from_config_json(&loaded.config_json).unwrap();
    let out = run_pipeline(&cfg).unwrap();
    assert_eq!(out.cleaned.len(), 40);
}

#[test]
fn five_record_run() {
    let out = run_pipeline(&PipelineConfig {
        n_records: 5,
        seed: 42,
    })
    .unwrap();

    assert_eq!(out.cleaned.len(), 5);
    assert!(out
        .cleaned
        .windows(2)
        .all(|w| w[0].order_date <= w[1].order_date));
    for o in &out.cleaned {
        assert_eq!(
            Some(o.total_amount),
            o.unit_price.checked_mul_qty(i64::from(o.quantity))
        );
    }
}
