//! Fixed-point money type.
//!
//! # Motivation
//!
//! Order prices are quoted to the cent and every derived amount
//! (`quantity × unit_price`, category sums, monthly sums) must be exact.
//! Carrying them as `f64` would let sums drift by sub-cent amounts
//! depending on summation order, which breaks the "same seed, same output"
//! guarantee of the pipeline.
//!
//! `Cents` wraps an `i64` so that:
//! - there is no implicit construction from a raw integer (no `From<i64>`),
//! - quantities and ids can never be added to money by accident.
//!
//! # Scale
//!
//! 1 currency unit = `Cents(100)`.
//!
//! # Rounding
//!
//! Every rounding step in this type is round-half-to-even, matching the
//! behaviour of the numeric libraries the datasets are compared against.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Serialize, Serializer};

/// Number of cents per currency unit.
pub const CENTS_SCALE: i64 = 100;

// ---------------------------------------------------------------------------
// Cents newtype
// ---------------------------------------------------------------------------

/// A fixed-point monetary amount at 1e-2 scale.
///
/// # Construction
///
/// Use [`Cents::new`] for an exact amount or [`Cents::from_f64_rounded`]
/// when converting a sampled floating-point price.
///
/// # Serialization
///
/// Serializes as a JSON number in currency units (`Cents::new(1234)` →
/// `12.34`) so downstream charting tools read plain amounts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cents(i64);

impl Cents {
    /// Zero monetary amount.
    pub const ZERO: Cents = Cents(0);

    /// Construct from a raw cent count.
    #[inline]
    pub const fn new(raw: i64) -> Self {
        Cents(raw)
    }

    /// Construct from whole currency units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Cents(units * CENTS_SCALE)
    }

    /// Extract the raw cent count.
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Round a floating-point currency amount to the nearest cent
    /// (ties to even).
    ///
    /// Conversion follows Rust's saturating float-to-int cast: `NaN` maps to
    /// zero and infinities clamp to the `i64` range.
    pub fn from_f64_rounded(amount: f64) -> Self {
        Cents((amount * CENTS_SCALE as f64).round_ties_even() as i64)
    }

    /// Amount in currency units as a float, for presentation only.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / CENTS_SCALE as f64
    }

    /// Multiply a per-unit price by an integer quantity.
    ///
    /// Returns `None` on `i64` overflow.
    #[inline]
    pub fn checked_mul_qty(self, qty: i64) -> Option<Cents> {
        self.0.checked_mul(qty).map(Cents)
    }

    /// Saturating addition.
    #[inline]
    pub fn saturating_add(self, rhs: Cents) -> Cents {
        Cents(self.0.saturating_add(rhs.0))
    }

    /// Arithmetic mean of `count` amounts whose sum is `total`, rounded to
    /// the nearest cent with ties to even.
    ///
    /// Returns `None` when `count == 0`.
    pub fn mean(total: Cents, count: usize) -> Option<Cents> {
        if count == 0 {
            return None;
        }
        let n = count as i128;
        let sum = total.0 as i128;
        let q = sum.div_euclid(n);
        let r = sum.rem_euclid(n);

        // r in [0, n): compare the remainder against half the divisor.
        let twice = 2 * r;
        let rounded = if twice > n || (twice == n && q.rem_euclid(2) == 1) {
            q + 1
        } else {
            q
        };
        Some(Cents(rounded as i64))
    }
}

// ---------------------------------------------------------------------------
// Arithmetic operators (closed over Cents)
// ---------------------------------------------------------------------------

impl Add for Cents {
    type Output = Cents;
    #[inline]
    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

impl Sub for Cents {
    type Output = Cents;
    #[inline]
    fn sub(self, rhs: Cents) -> Cents {
        Cents(self.0 - rhs.0)
    }
}

impl AddAssign for Cents {
    #[inline]
    fn add_assign(&mut self, rhs: Cents) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Cents {
    #[inline]
    fn sub_assign(&mut self, rhs: Cents) {
        self.0 -= rhs.0;
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Cents {
        iter.fold(Cents::ZERO, |acc, c| acc + c)
    }
}

impl<'a> Sum<&'a Cents> for Cents {
    fn sum<I: Iterator<Item = &'a Cents>>(iter: I) -> Cents {
        iter.copied().sum()
    }
}

// ---------------------------------------------------------------------------
// Display / Serialize
// ---------------------------------------------------------------------------

impl std::fmt::Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let units = self.0 / CENTS_SCALE;
        let frac = (self.0 % CENTS_SCALE).abs();
        // -0.50 truncates to 0 units; keep the sign.
        if self.0 < 0 && units == 0 {
            write!(f, "-{units}.{frac:02}")
        } else {
            write!(f, "{units}.{frac:02}")
        }
    }
}

impl Serialize for Cents {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
