use std::collections::BTreeMap;
use std::fmt;

use ecom_agg::{AggregationResult, SumCount};
use ecom_schemas::{Cents, Order, PaymentMethod, ProductCategory};
use serde::Serialize;

use crate::currency::format_currency;

/// Headline numbers of one run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub total_sales: Cents,
    pub total_orders: usize,
    /// `None` for an empty snapshot.
    pub average_order_value: Option<Cents>,
    /// Category with the most orders.
    pub best_selling_category: Option<ProductCategory>,
    /// Payment method with the most orders.
    pub most_popular_payment_method: Option<PaymentMethod>,
}

impl Insights {
    pub fn from_pipeline(orders: &[Order], aggregation: &AggregationResult) -> Self {
        let total_sales: Cents = orders.iter().map(|o| o.total_amount).sum();
        let total_orders = orders.len();
        Insights {
            total_sales,
            total_orders,
            average_order_value: Cents::mean(total_sales, total_orders),
            best_selling_category: most_orders(&aggregation.category_sales),
            most_popular_payment_method: most_orders(&aggregation.payment_analysis),
        }
    }
}

/// Key with the highest count. On a tie the earliest key wins.
fn most_orders<K: Copy + Ord>(view: &BTreeMap<K, SumCount>) -> Option<K> {
    let mut best: Option<(K, usize)> = None;
    for (k, v) in view {
        match best {
            Some((_, n)) if v.count <= n => {}
            _ => best = Some((*k, v.count)),
        }
    }
    best.map(|(k, _)| k)
}

impl fmt::Display for Insights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_na = |s: Option<String>| s.unwrap_or_else(|| "n/a".to_string());

        writeln!(f, "Key Insights:")?;
        writeln!(f, "-------------")?;
        writeln!(f, "Total Sales: {}", format_currency(self.total_sales))?;
        writeln!(f, "Total Orders: {}", self.total_orders)?;
        writeln!(
            f,
            "Average Order Value: {}",
            or_na(self.average_order_value.map(format_currency))
        )?;
        writeln!(
            f,
            "Best Selling Category: {}",
            or_na(self.best_selling_category.map(|c| c.to_string()))
        )?;
        write!(
            f,
            "Most Popular Payment Method: {}",
            or_na(self.most_popular_payment_method.map(|p| p.to_string()))
        )
    }
}
