//! CSV export of raw generated orders.

use std::io::Write;

use anyhow::{Context, Result};
use ecom_schemas::RawOrder;

/// Column order of the raw-order CSV.
pub const CSV_HEADER: [&str; 9] = [
    "order_id",
    "order_date",
    "customer_id",
    "product_category",
    "product_id",
    "quantity",
    "unit_price",
    "payment_method",
    "shipping_method",
];

/// Write `rows` as CSV (header + one line per order) to `out`.
///
/// Prices are rendered with exactly two decimals, so identical datasets
/// always produce byte-identical output.
pub fn write_csv<W: Write>(rows: &[RawOrder], out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(CSV_HEADER)
        .context("write raw order csv header failed")?;

    for r in rows {
        wtr.write_record([
            r.order_id.to_string(),
            r.order_date.clone(),
            r.customer_id.to_string(),
            r.product_category.as_str().to_string(),
            r.product_id.to_string(),
            r.quantity.to_string(),
            r.unit_price.to_string(),
            r.payment_method.as_str().to_string(),
            r.shipping_method.as_str().to_string(),
        ])
        .with_context(|| format!("write raw order csv row failed: order_id={}", r.order_id))?;
    }

    wtr.flush().context("flush raw order csv failed")?;
    Ok(())
}
