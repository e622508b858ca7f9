//! ecom-agg
//!
//! Five independent summary views over a cleaned order snapshot.
//!
//! Every view is a pure function of `&[Order]`. Grouped views are keyed by
//! `BTreeMap`, so iteration and serialization order is fixed: categories and
//! methods alphabetically by display name, months ascending.
//!
//! Sums are exact in cents. Means round to the cent, ties to even.

mod describe;

pub use describe::{describe, round2, DescribeStats, SummaryStats};

use std::collections::BTreeMap;

use ecom_schemas::{Cents, Order, PaymentMethod, ProductCategory, ShippingMethod};
use serde::Serialize;
use tracing::debug;

// ---------------------------------------------------------------------------
// View types
// ---------------------------------------------------------------------------

/// Sum of `total_amount` and number of orders in a group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SumCount {
    pub sum: Cents,
    pub count: usize,
}

/// Mean `total_amount` (rounded to the cent) and number of orders in a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MeanCount {
    pub mean: Cents,
    pub count: usize,
}

pub type CategorySales = BTreeMap<ProductCategory, SumCount>;
/// Month (1-12) to sales. Months without orders are absent.
pub type MonthlySales = BTreeMap<u32, Cents>;
pub type PaymentAnalysis = BTreeMap<PaymentMethod, SumCount>;
pub type ShippingAnalysis = BTreeMap<ShippingMethod, MeanCount>;

/// All five views of one snapshot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AggregationResult {
    pub category_sales: CategorySales,
    pub monthly_sales: MonthlySales,
    pub payment_analysis: PaymentAnalysis,
    pub customer_frequency: DescribeStats,
    pub shipping_analysis: ShippingAnalysis,
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

fn sum_count_by<K: Ord>(orders: &[Order], key: impl Fn(&Order) -> K) -> BTreeMap<K, SumCount> {
    let mut out: BTreeMap<K, SumCount> = BTreeMap::new();
    for o in orders {
        let e = out.entry(key(o)).or_default();
        e.sum += o.total_amount;
        e.count += 1;
    }
    out
}

/// Sales and order count per product category.
pub fn category_sales(orders: &[Order]) -> CategorySales {
    sum_count_by(orders, |o| o.product_category)
}

/// Sales per calendar month present in the data.
pub fn monthly_sales(orders: &[Order]) -> MonthlySales {
    let mut out = MonthlySales::new();
    for o in orders {
        *out.entry(o.month).or_insert(Cents::ZERO) += o.total_amount;
    }
    out
}

/// Sales and order count per payment method.
pub fn payment_analysis(orders: &[Order]) -> PaymentAnalysis {
    sum_count_by(orders, |o| o.payment_method)
}

/// Descriptive statistics of how many orders each customer placed.
///
/// The sample is one order count per distinct `customer_id`.
pub fn customer_frequency(orders: &[Order]) -> DescribeStats {
    let mut per_customer: BTreeMap<u32, u64> = BTreeMap::new();
    for o in orders {
        *per_customer.entry(o.customer_id).or_insert(0) += 1;
    }
    let counts: Vec<u64> = per_customer.into_values().collect();
    describe(&counts)
}

/// Mean order value and order count per shipping method.
pub fn shipping_analysis(orders: &[Order]) -> ShippingAnalysis {
    sum_count_by(orders, |o| o.shipping_method)
        .into_iter()
        .filter_map(|(method, sc)| {
            Cents::mean(sc.sum, sc.count).map(|mean| {
                (
                    method,
                    MeanCount {
                        mean,
                        count: sc.count,
                    },
                )
            })
        })
        .collect()
}

/// Compute every view.
pub fn aggregate(orders: &[Order]) -> AggregationResult {
    let result = AggregationResult {
        category_sales: category_sales(orders),
        monthly_sales: monthly_sales(orders),
        payment_analysis: payment_analysis(orders),
        customer_frequency: customer_frequency(orders),
        shipping_analysis: shipping_analysis(orders),
    };
    debug!(
        orders = orders.len(),
        categories = result.category_sales.len(),
        months = result.monthly_sales.len(),
        customers = result.customer_frequency.count,
        "aggregated views"
    );
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
