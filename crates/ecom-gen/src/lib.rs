//! ecom-gen
//!
//! Deterministic synthetic order generator.
//!
//! - All randomness comes from a caller-owned RNG (`generate_with_rng`) or a
//!   fresh `StdRng` seeded per call (`generate`). There is no process-wide
//!   random state, so parallel or test-isolated generation is safe.
//! - Same `(n_records, seed)` => bit-identical output.
//! - No wall-clock reads.

mod export;

pub use export::{write_csv, CSV_HEADER};

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};
use ecom_schemas::{Cents, PaymentMethod, ProductCategory, RawOrder, ShippingMethod};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Default number of generated records.
pub const DEFAULT_N_RECORDS: usize = 1000;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

/// Number of calendar days in the order-date window (2023-01-01 ..= 2023-12-31).
pub const WINDOW_DAYS: u64 = 365;

pub const CUSTOMER_IDS: RangeInclusive<u32> = 1..=200;
pub const PRODUCT_IDS: RangeInclusive<u32> = 1..=50;
pub const QUANTITIES: RangeInclusive<u32> = 1..=5;

/// Lower bound of the sampled unit price (currency units, inclusive).
pub const UNIT_PRICE_LOW: f64 = 10.0;
/// Upper bound of the sampled unit price (currency units, exclusive before rounding).
pub const UNIT_PRICE_HIGH: f64 = 500.0;

/// First day of the order-date window.
pub fn window_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// A generation parameter is out of range.
    InvalidArgument { name: &'static str, reason: String },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InvalidArgument { name, reason } => {
                write!(f, "invalid argument '{name}': {reason}")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate `n_records` raw orders from a fresh RNG seeded with `seed`.
pub fn generate(n_records: usize, seed: u64) -> Result<Vec<RawOrder>, GenerateError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let out = generate_with_rng(n_records, &mut rng)?;
    debug!(n_records, seed, "generated raw orders");
    Ok(out)
}

/// Generate `n_records` raw orders drawing every sample from `rng`.
///
/// Per record, fields are sampled in this fixed order: date, customer,
/// category, product, quantity, unit price, payment, shipping. `order_id`
/// is `1..=n_records` and consumes no randomness.
pub fn generate_with_rng<R: Rng>(
    n_records: usize,
    rng: &mut R,
) -> Result<Vec<RawOrder>, GenerateError> {
    if n_records < 1 {
        return Err(GenerateError::InvalidArgument {
            name: "n_records",
            reason: format!("must be >= 1, got {n_records}"),
        });
    }

    let start = window_start();
    let mut out = Vec::with_capacity(n_records);

    for idx in 0..n_records {
        let day_offset = rng.gen_range(0..WINDOW_DAYS);
        let order_date = start + Days::new(day_offset);
        let customer_id = rng.gen_range(CUSTOMER_IDS);
        let product_category = ProductCategory::ALL[rng.gen_range(0..ProductCategory::ALL.len())];
        let product_id = rng.gen_range(PRODUCT_IDS);
        let quantity = rng.gen_range(QUANTITIES);
        let unit_price = Cents::from_f64_rounded(rng.gen_range(UNIT_PRICE_LOW..UNIT_PRICE_HIGH));
        let payment_method = PaymentMethod::ALL[rng.gen_range(0..PaymentMethod::ALL.len())];
        let shipping_method = ShippingMethod::ALL[rng.gen_range(0..ShippingMethod::ALL.len())];

        out.push(RawOrder {
            order_id: idx as u64 + 1,
            order_date: order_date.format("%Y-%m-%d").to_string(),
            customer_id,
            product_category,
            product_id,
            quantity,
            unit_price,
            payment_method,
            shipping_method,
        });
    }

    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
