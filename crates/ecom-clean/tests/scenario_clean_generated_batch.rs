//! Scenario: cleaning a generated batch.
//!
//! # Invariants under test
//!
//! 1. Generated orders carry unique ids, so cleaning keeps every row.
//! 2. The output is sorted ascending by `order_date`.
//! 3. `total_amount == quantity × unit_price` for every row.
//! 4. `month` and `day_of_week` agree with `order_date`.
//! 5. Cleaning an already-clean batch again changes nothing.

use chrono::Datelike;
use ecom_clean::{clean, clean_with_report};
use ecom_gen::{generate, DEFAULT_N_RECORDS, DEFAULT_SEED};
use ecom_schemas::RawOrder;

#[test]
fn five_record_batch_keeps_every_row_sorted() {
    let raw = generate(5, DEFAULT_SEED).unwrap();
    let (orders, report) = clean_with_report(&raw).unwrap();

    assert_eq!(orders.len(), 5);
    assert_eq!(report.rows_in, 5);
    assert_eq!(report.rows_out, 5);
    assert!(report.is_clean());
    assert!(orders.windows(2).all(|w| w[0].order_date <= w[1].order_date));
    assert_eq!(report.earliest_date, Some(orders[0].order_date));
    assert_eq!(report.latest_date, Some(orders[4].order_date));

    let mut ids: Vec<u64> = orders.iter().map(|o| o.order_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn default_batch_invariants_hold() {
    let raw = generate(DEFAULT_N_RECORDS, DEFAULT_SEED).unwrap();
    let orders = clean(&raw).unwrap();
    assert_eq!(orders.len(), DEFAULT_N_RECORDS);

    for w in orders.windows(2) {
        assert!(w[0].order_date <= w[1].order_date);
    }
    for o in &orders {
        assert_eq!(
            Some(o.total_amount),
            o.unit_price.checked_mul_qty(i64::from(o.quantity))
        );
        assert_eq!(o.month, o.order_date.month());
        assert_eq!(o.day_of_week, o.order_date.weekday());
    }
}

#[test]
fn recleaning_is_a_no_op() {
    let raw = generate(200, 11).unwrap();
    let first = clean(&raw).unwrap();

    let round_trip: Vec<RawOrder> = first
        .iter()
        .map(|o| RawOrder {
            order_id: o.order_id,
            order_date: o.order_date.format("%Y-%m-%d").to_string(),
            customer_id: o.customer_id,
            product_category: o.product_category,
            product_id: o.product_id,
            quantity: o.quantity,
            unit_price: o.unit_price,
            payment_method: o.payment_method,
            shipping_method: o.shipping_method,
        })
        .collect();

    assert_eq!(clean(&round_trip).unwrap(), first);
}

#[test]
fn appended_copy_of_a_row_is_removed() {
    let mut raw = generate(20, 3).unwrap();
    raw.push(raw[7].clone());

    let (orders, report) = clean_with_report(&raw).unwrap();
    assert_eq!(orders.len(), 20);
    assert_eq!(report.duplicates_removed, 1);
}

#[test]
fn one_bad_date_fails_the_whole_batch() {
    let mut raw = generate(10, 4).unwrap();
    raw[6].order_date = "2023-13-01".to_string();

    let err = clean(&raw).unwrap_err();
    assert!(err.to_string().contains("order 7"), "{err}");
}
