//! ecom-schemas
//!
//! Shared record types for the order analytics pipeline:
//! - `RawOrder` (generator output) and `Order` (cleaned, with derived fields)
//! - closed value sets for category, payment and shipping
//! - `Cents` fixed-point money
//!
//! Pure types; no IO, no randomness.

mod catalog;
mod money;
mod order;

pub use catalog::{PaymentMethod, ProductCategory, ShippingMethod, UnknownValue};
pub use money::{Cents, CENTS_SCALE};
pub use order::{weekday_name, Order, RawOrder};
