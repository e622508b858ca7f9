use chrono::{Datelike, NaiveDate, Weekday};

use crate::catalog::{PaymentMethod, ProductCategory, ShippingMethod};
use crate::money::Cents;

/// An order line as produced by the generator.
///
/// `order_date` stays a string until the cleaner normalizes it, so a
/// malformed date surfaces as a cleaning error instead of being silently
/// coerced at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawOrder {
    pub order_id: u64,
    /// Calendar date, canonically `YYYY-MM-DD`.
    pub order_date: String,
    pub customer_id: u32,
    pub product_category: ProductCategory,
    pub product_id: u32,
    pub quantity: u32,
    pub unit_price: Cents,
    pub payment_method: PaymentMethod,
    pub shipping_method: ShippingMethod,
}

/// A cleaned order with its derived fields.
///
/// Equality and hashing cover the full field tuple, derived fields included.
/// Two `Order`s that compare equal are duplicates and only one survives
/// cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Order {
    pub order_id: u64,
    pub order_date: NaiveDate,
    pub customer_id: u32,
    pub product_category: ProductCategory,
    pub product_id: u32,
    pub quantity: u32,
    pub unit_price: Cents,
    pub payment_method: PaymentMethod,
    pub shipping_method: ShippingMethod,
    /// `quantity × unit_price`, exact.
    pub total_amount: Cents,
    /// Month of `order_date`, 1–12.
    pub month: u32,
    pub day_of_week: Weekday,
}

impl Order {
    /// Build a cleaned order from a raw line and its already-normalized date,
    /// computing the derived fields.
    ///
    /// Returns `None` if `quantity × unit_price` overflows.
    pub fn from_raw_parts(raw: &RawOrder, order_date: NaiveDate) -> Option<Order> {
        let total_amount = raw.unit_price.checked_mul_qty(i64::from(raw.quantity))?;
        Some(Order {
            order_id: raw.order_id,
            order_date,
            customer_id: raw.customer_id,
            product_category: raw.product_category,
            product_id: raw.product_id,
            quantity: raw.quantity,
            unit_price: raw.unit_price,
            payment_method: raw.payment_method,
            shipping_method: raw.shipping_method,
            total_amount,
            month: order_date.month(),
            day_of_week: order_date.weekday(),
        })
    }

    /// Full English weekday name of `order_date` (e.g. `"Monday"`).
    pub fn day_name(&self) -> &'static str {
        weekday_name(self.day_of_week)
    }
}

/// Locale-invariant full English name of a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(quantity: u32, unit_price: Cents) -> RawOrder {
        RawOrder {
            order_id: 7,
            order_date: "2023-03-14".to_string(),
            customer_id: 12,
            product_category: ProductCategory::Books,
            product_id: 3,
            quantity,
            unit_price,
            payment_method: PaymentMethod::PayPal,
            shipping_method: ShippingMethod::Express,
        }
    }

    #[test]
    fn derived_fields_are_computed() {
        let date = NaiveDate::from_ymd_opt(2023, 3, 14).unwrap();
        let o = Order::from_raw_parts(&raw(3, Cents::new(19_999)), date).unwrap();
        assert_eq!(o.total_amount, Cents::new(59_997));
        assert_eq!(o.month, 3);
        assert_eq!(o.day_of_week, Weekday::Tue);
        assert_eq!(o.day_name(), "Tuesday");
    }

    #[test]
    fn overflowing_total_is_none() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        assert!(Order::from_raw_parts(&raw(5, Cents::new(i64::MAX)), date).is_none());
    }

    #[test]
    fn equal_field_tuples_are_equal_orders() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let a = Order::from_raw_parts(&raw(2, Cents::new(1_000)), date).unwrap();
        let b = Order::from_raw_parts(&raw(2, Cents::new(1_000)), date).unwrap();
        let c = Order::from_raw_parts(&raw(2, Cents::new(1_001)), date).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn weekday_names_are_english() {
        // 2023-01-01 was a Sunday.
        let d = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        assert_eq!(weekday_name(d.weekday()), "Sunday");
    }
}
