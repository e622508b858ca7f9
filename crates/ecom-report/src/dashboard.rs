//! Four-panel dashboard description.
//!
//! Layout (row, col):
//! - (0, 0) bar: sales by product category
//! - (0, 1) line: monthly sales trend
//! - (1, 0) pie: payment method distribution by order count
//! - (1, 1) bar: average order value by shipping method
//!
//! Points keep the view order of the aggregation they come from.

use ecom_agg::{round2, AggregationResult};
use serde::Serialize;

pub const DASHBOARD_TITLE: &str = "E-Commerce Sales Analysis Dashboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    Bar,
    Line,
    Pie,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Point {
    pub label: String,
    pub value: f64,
    /// Percentage of the panel total, 1 decimal. Pie panels only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_pct: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Panel {
    pub row: usize,
    pub col: usize,
    pub kind: PanelKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    /// Rendering hint; the renderer may ignore it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub points: Vec<Point>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub rows: usize,
    pub cols: usize,
    pub panels: Vec<Panel>,
}

fn point(label: impl Into<String>, value: f64) -> Point {
    Point {
        label: label.into(),
        value,
        share_pct: None,
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round_ties_even() / 10.0
}

impl Dashboard {
    pub fn from_aggregation(agg: &AggregationResult) -> Self {
        let category = Panel {
            row: 0,
            col: 0,
            kind: PanelKind::Bar,
            title: "Sales by Product Category".to_string(),
            y_label: Some("Total Sales ($)".to_string()),
            color: Some("skyblue".to_string()),
            points: agg
                .category_sales
                .iter()
                .map(|(c, v)| point(c.as_str(), v.sum.to_f64()))
                .collect(),
        };

        let monthly = Panel {
            row: 0,
            col: 1,
            kind: PanelKind::Line,
            title: "Monthly Sales Trend".to_string(),
            y_label: Some("Total Sales ($)".to_string()),
            color: None,
            points: agg
                .monthly_sales
                .iter()
                .map(|(m, sum)| point(m.to_string(), sum.to_f64()))
                .collect(),
        };

        let total_orders: usize = agg.payment_analysis.values().map(|v| v.count).sum();
        let payment = Panel {
            row: 1,
            col: 0,
            kind: PanelKind::Pie,
            title: "Payment Method Distribution".to_string(),
            y_label: None,
            color: None,
            points: agg
                .payment_analysis
                .iter()
                .map(|(p, v)| Point {
                    label: p.as_str().to_string(),
                    value: v.count as f64,
                    share_pct: (total_orders > 0)
                        .then(|| round1(v.count as f64 * 100.0 / total_orders as f64)),
                })
                .collect(),
        };

        let shipping = Panel {
            row: 1,
            col: 1,
            kind: PanelKind::Bar,
            title: "Average Order Value by Shipping Method".to_string(),
            y_label: Some("Average Order Value ($)".to_string()),
            color: Some("lightgreen".to_string()),
            points: agg
                .shipping_analysis
                .iter()
                .map(|(s, v)| point(s.as_str(), round2(v.mean.to_f64())))
                .collect(),
        };

        Dashboard {
            title: DASHBOARD_TITLE.to_string(),
            rows: 2,
            cols: 2,
            panels: vec![category, monthly, payment, shipping],
        }
    }

    /// Panel at grid position `(row, col)`.
    pub fn panel(&self, row: usize, col: usize) -> Option<&Panel> {
        self.panels.iter().find(|p| p.row == row && p.col == col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecom_agg::aggregate;

    #[test]
    fn empty_aggregation_still_has_four_panels() {
        let d = Dashboard::from_aggregation(&aggregate(&[]));
        assert_eq!(d.title, DASHBOARD_TITLE);
        assert_eq!(d.panels.len(), 4);
        assert!(d.panels.iter().all(|p| p.points.is_empty()));
    }

    #[test]
    fn grid_positions_are_fixed() {
        let d = Dashboard::from_aggregation(&aggregate(&[]));
        assert_eq!(d.panel(0, 0).unwrap().kind, PanelKind::Bar);
        assert_eq!(d.panel(0, 1).unwrap().kind, PanelKind::Line);
        assert_eq!(d.panel(1, 0).unwrap().kind, PanelKind::Pie);
        assert_eq!(
            d.panel(1, 1).unwrap().title,
            "Average Order Value by Shipping Method"
        );
        assert!(d.panel(2, 0).is_none());
    }

    #[test]
    fn round1_ties_to_even() {
        assert_eq!(round1(12.25), 12.2);
        assert_eq!(round1(33.333), 33.3);
    }
}
