//! Closed value sets carried by every order record.
//!
//! Each enum derives `Ord` in the alphabetical order of its display name, so
//! grouped views keyed by these types iterate the same way a sorted
//! group-by would. `ALL` lists the members in sampling order, which is what
//! the generator indexes into.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A display name that does not belong to the expected closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue {
    pub kind: &'static str,
    pub raw: String,
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.raw)
    }
}

impl std::error::Error for UnknownValue {}

// ---------------------------------------------------------------------------
// ProductCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Books,
    Clothing,
    Electronics,
    #[serde(rename = "Home & Garden")]
    HomeAndGarden,
    Sports,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 5] = [
        ProductCategory::Electronics,
        ProductCategory::Clothing,
        ProductCategory::Books,
        ProductCategory::HomeAndGarden,
        ProductCategory::Sports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Books => "Books",
            ProductCategory::Clothing => "Clothing",
            ProductCategory::Electronics => "Electronics",
            ProductCategory::HomeAndGarden => "Home & Garden",
            ProductCategory::Sports => "Sports",
        }
    }

    pub fn parse(s: &str) -> Result<Self, UnknownValue> {
        let t = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(t))
            .ok_or_else(|| UnknownValue {
                kind: "product_category",
                raw: s.to_string(),
            })
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PaymentMethod
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    PayPal,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CreditCard,
        PaymentMethod::PayPal,
        PaymentMethod::DebitCard,
        PaymentMethod::BankTransfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::PayPal => "PayPal",
        }
    }

    pub fn parse(s: &str) -> Result<Self, UnknownValue> {
        let t = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(t))
            .ok_or_else(|| UnknownValue {
                kind: "payment_method",
                raw: s.to_string(),
            })
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ShippingMethod
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShippingMethod {
    Express,
    #[serde(rename = "Next Day")]
    NextDay,
    Standard,
}

impl ShippingMethod {
    pub const ALL: [ShippingMethod; 3] = [
        ShippingMethod::Standard,
        ShippingMethod::Express,
        ShippingMethod::NextDay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Express => "Express",
            ShippingMethod::NextDay => "Next Day",
            ShippingMethod::Standard => "Standard",
        }
    }

    pub fn parse(s: &str) -> Result<Self, UnknownValue> {
        let t = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(t))
            .ok_or_else(|| UnknownValue {
                kind: "shipping_method",
                raw: s.to_string(),
            })
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
