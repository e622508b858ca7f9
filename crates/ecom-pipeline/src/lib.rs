//! ecom-pipeline
//!
//! Single entry point for a run: Generator -> Cleaner -> Aggregator ->
//! Reporter. Stages run once, in order; the first error aborts the run.

use anyhow::{anyhow, Context, Result};
use ecom_agg::{aggregate, AggregationResult};
use ecom_clean::{clean_with_report, CleanReport};
use ecom_gen::{generate, DEFAULT_N_RECORDS, DEFAULT_SEED};
use ecom_report::{Dashboard, Insights};
use ecom_schemas::{Order, RawOrder};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PipelineConfig {
    pub n_records: usize,
    pub seed: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            n_records: DEFAULT_N_RECORDS,
            seed: DEFAULT_SEED,
        }
    }
}

impl PipelineConfig {
    /// Read `/generator/n_records` and `/generator/seed`, defaulting absent
    /// keys. Present keys must be non-negative integers.
    pub fn from_config_json(cfg: &Value) -> Result<Self> {
        let defaults = Self::default();

        let n_records = match read_u64(cfg, "/generator/n_records")? {
            Some(n) => usize::try_from(n)
                .map_err(|_| anyhow!("/generator/n_records does not fit in usize: {n}"))?,
            None => defaults.n_records,
        };
        let seed = read_u64(cfg, "/generator/seed")?.unwrap_or(defaults.seed);

        Ok(Self { n_records, seed })
    }

    /// Inverse of [`PipelineConfig::from_config_json`].
    pub fn to_config_json(&self) -> Value {
        serde_json::json!({
            "generator": {
                "n_records": self.n_records,
                "seed": self.seed,
            }
        })
    }
}

fn read_u64(cfg: &Value, pointer: &str) -> Result<Option<u64>> {
    match cfg.pointer(pointer) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_u64()
            .map(Some)
            .ok_or_else(|| anyhow!("{pointer} must be a non-negative integer (got {v})")),
    }
}

/// Everything a run produces.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    pub cleaned: Vec<Order>,
    pub clean_report: CleanReport,
    pub aggregation: AggregationResult,
    pub insights: Insights,
    pub dashboard: Dashboard,
}

/// Generate, clean, aggregate and report.
pub fn run_pipeline(cfg: &PipelineConfig) -> Result<PipelineOutput> {
    let raw = generate(cfg.n_records, cfg.seed).context("generate stage failed")?;
    info!(
        stage = "generate",
        n_records = raw.len(),
        seed = cfg.seed,
        "stage complete"
    );

    analyze(&raw)
}

/// Run every stage after generation on an existing raw batch.
pub fn analyze(raw: &[RawOrder]) -> Result<PipelineOutput> {
    let (cleaned, clean_report) = clean_with_report(raw).context("clean stage failed")?;
    info!(
        stage = "clean",
        rows_in = clean_report.rows_in,
        rows_out = clean_report.rows_out,
        duplicates_removed = clean_report.duplicates_removed,
        "stage complete"
    );
    debug!("{clean_report}");

    let aggregation = aggregate(&cleaned);
    info!(
        stage = "aggregate",
        categories = aggregation.category_sales.len(),
        months = aggregation.monthly_sales.len(),
        customers = aggregation.customer_frequency.count,
        "stage complete"
    );

    let insights = Insights::from_pipeline(&cleaned, &aggregation);
    let dashboard = Dashboard::from_aggregation(&aggregation);
    info!(
        stage = "report",
        total_orders = insights.total_orders,
        panels = dashboard.panels.len(),
        "stage complete"
    );

    Ok(PipelineOutput {
        cleaned,
        clean_report,
        aggregation,
        insights,
        dashboard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_are_1000_and_42() {
        assert_eq!(
            PipelineConfig::default(),
            PipelineConfig {
                n_records: 1000,
                seed: 42
            }
        );
    }

    #[test]
    fn empty_config_gives_defaults() {
        assert_eq!(
            PipelineConfig::from_config_json(&json!({})).unwrap(),
            PipelineConfig::default()
        );
    }

    #[test]
    fn config_values_override_defaults() {
        let cfg = json!({"generator": {"n_records": 12, "seed": 9}});
        let p = PipelineConfig::from_config_json(&cfg).unwrap();
        assert_eq!(p.n_records, 12);
        assert_eq!(p.seed, 9);
    }

    #[test]
    fn wrong_type_names_pointer() {
        let cfg = json!({"generator": {"seed": "forty-two"}});
        let err = PipelineConfig::from_config_json(&cfg).unwrap_err();
        assert!(err.to_string().contains("/generator/seed"), "{err}");
    }

    #[test]
    fn negative_count_is_rejected() {
        let cfg = json!({"generator": {"n_records": -1}});
        assert!(PipelineConfig::from_config_json(&cfg).is_err());
    }

    #[test]
    fn config_json_round_trips() {
        let p = PipelineConfig {
            n_records: 3,
            seed: 4,
        };
        assert_eq!(PipelineConfig::from_config_json(&p.to_config_json()).unwrap(), p);
    }

    #[test]
    fn zero_records_fails_in_generate_stage() {
        let err = run_pipeline(&PipelineConfig {
            n_records: 0,
            seed: 42,
        })
        .unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("generate stage failed"), "{chain}");
        assert!(chain.contains("n_records"), "{chain}");
    }

    #[test]
    fn bad_raw_date_fails_in_clean_stage() {
        let mut raw = generate(3, 1).unwrap();
        raw[0].order_date = "not a date".to_string();
        let err = analyze(&raw).unwrap_err();
        assert!(format!("{err:#}").contains("clean stage failed"));
    }
}
