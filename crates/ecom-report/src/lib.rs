//! ecom-report
//!
//! Presentation layer over an aggregated snapshot:
//! - [`Insights`]: the headline numbers and their text block
//! - [`format_currency`]: `$1,234.56` rendering
//! - [`Dashboard`]: a four-panel chart description for an external renderer
//!
//! Nothing here draws or prints; callers decide where output goes.

mod currency;
mod dashboard;
mod insights;

pub use currency::format_currency;
pub use dashboard::{Dashboard, Panel, PanelKind, Point, DASHBOARD_TITLE};
pub use insights::Insights;
