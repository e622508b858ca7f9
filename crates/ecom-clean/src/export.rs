//! CSV export of the cleaned dataset, derived columns included.

use std::io::Write;

use anyhow::{Context, Result};
use ecom_schemas::Order;

/// Column order of the cleaned-order CSV.
pub const CLEANED_CSV_HEADER: [&str; 12] = [
    "order_id",
    "order_date",
    "customer_id",
    "product_category",
    "product_id",
    "quantity",
    "unit_price",
    "payment_method",
    "shipping_method",
    "total_amount",
    "month",
    "day_of_week",
];

/// Write cleaned `orders` as CSV to `out`, in the order given.
pub fn write_cleaned_csv<W: Write>(orders: &[Order], out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(CLEANED_CSV_HEADER)
        .context("write cleaned csv header failed")?;

    for o in orders {
        wtr.write_record([
            o.order_id.to_string(),
            o.order_date.format("%Y-%m-%d").to_string(),
            o.customer_id.to_string(),
            o.product_category.as_str().to_string(),
            o.product_id.to_string(),
            o.quantity.to_string(),
            o.unit_price.to_string(),
            o.payment_method.as_str().to_string(),
            o.shipping_method.as_str().to_string(),
            o.total_amount.to_string(),
            o.month.to_string(),
            o.day_name().to_string(),
        ])
        .with_context(|| format!("write cleaned csv row failed: order_id={}", o.order_id))?;
    }

    wtr.flush().context("flush cleaned csv failed")?;
    Ok(())
}
