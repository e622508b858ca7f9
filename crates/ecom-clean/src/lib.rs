//! ecom-clean
//!
//! Turns generated [`RawOrder`]s into the cleaned dataset:
//! 1. normalize `order_date` (see `dates.rs`)
//! 2. derive `total_amount`, `month`, `day_of_week`
//! 3. drop exact duplicates over the full field tuple (first occurrence wins)
//! 4. stable sort ascending by `order_date`
//!
//! The input slice is never mutated. Cleaning is all-or-nothing: the first
//! malformed row fails the whole batch.
//!
//! It does **not** aggregate (that is `ecom-agg`) or print anything.

mod dates;
mod export;

pub use dates::{normalize_order_date, DateRejection};
pub use export::{write_cleaned_csv, CLEANED_CSV_HEADER};

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use ecom_schemas::{Order, RawOrder};
use serde::Serialize;
use tracing::warn;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced while cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanError {
    /// A field could not be normalized.
    DataError {
        order_id: u64,
        field: &'static str,
        raw: String,
        reason: &'static str,
    },
}

impl fmt::Display for CleanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanError::DataError {
                order_id,
                field,
                raw,
                reason,
            } => write!(
                f,
                "data error in order {order_id}: field '{field}' {reason}: '{raw}'"
            ),
        }
    }
}

impl std::error::Error for CleanError {}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// What cleaning did to the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    pub rows_in: usize,
    pub rows_out: usize,
    pub duplicates_removed: usize,
    /// `None` when the output is empty.
    pub earliest_date: Option<NaiveDate>,
    pub latest_date: Option<NaiveDate>,
}

impl CleanReport {
    /// `true` when no rows were dropped.
    pub fn is_clean(&self) -> bool {
        self.duplicates_removed == 0
    }
}

impl fmt::Display for CleanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = |d: &Option<NaiveDate>| {
            d.map(|v| v.to_string())
                .unwrap_or_else(|| "none".to_string())
        };
        writeln!(f, "CleanReport {{")?;
        writeln!(f, "  rows_in: {}", self.rows_in)?;
        writeln!(f, "  rows_out: {}", self.rows_out)?;
        writeln!(f, "  duplicates_removed: {}", self.duplicates_removed)?;
        writeln!(f, "  earliest_date: {}", date(&self.earliest_date))?;
        writeln!(f, "  latest_date: {}", date(&self.latest_date))?;
        write!(f, "}}")
    }
}

// ---------------------------------------------------------------------------
// Cleaning
// ---------------------------------------------------------------------------

/// Clean a batch of raw orders. See the crate docs for the steps.
pub fn clean(raw: &[RawOrder]) -> Result<Vec<Order>, CleanError> {
    clean_with_report(raw).map(|(orders, _)| orders)
}

/// Clean a batch and report row counts and the covered date range.
pub fn clean_with_report(raw: &[RawOrder]) -> Result<(Vec<Order>, CleanReport), CleanError> {
    let derived: Vec<Order> = raw
        .iter()
        .map(derive_order)
        .collect::<Result<_, _>>()?;
    let rows_in = derived.len();

    let mut orders = dedupe_first_occurrence(derived);
    let duplicates_removed = rows_in - orders.len();
    if duplicates_removed > 0 {
        warn!(duplicates_removed, "dropped exact-duplicate orders");
    }

    // Stable: equal dates keep their input order.
    orders.sort_by_key(|o| o.order_date);

    let report = CleanReport {
        rows_in,
        rows_out: orders.len(),
        duplicates_removed,
        earliest_date: orders.first().map(|o| o.order_date),
        latest_date: orders.last().map(|o| o.order_date),
    };

    Ok((orders, report))
}

fn derive_order(raw: &RawOrder) -> Result<Order, CleanError> {
    let order_date =
        normalize_order_date(&raw.order_date).map_err(|rejection| CleanError::DataError {
            order_id: raw.order_id,
            field: "order_date",
            raw: raw.order_date.clone(),
            reason: rejection.as_str(),
        })?;

    Order::from_raw_parts(raw, order_date).ok_or_else(|| CleanError::DataError {
        order_id: raw.order_id,
        field: "total_amount",
        raw: format!("{} x {}", raw.quantity, raw.unit_price),
        reason: "overflows the money range",
    })
}

/// Keep the first occurrence of every distinct order, preserving input order.
fn dedupe_first_occurrence(orders: Vec<Order>) -> Vec<Order> {
    let keep: Vec<bool> = {
        let mut seen: HashSet<&Order> = HashSet::with_capacity(orders.len());
        orders.iter().map(|o| seen.insert(o)).collect()
    };

    orders
        .into_iter()
        .zip(keep)
        .filter_map(|(o, k)| k.then_some(o))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
