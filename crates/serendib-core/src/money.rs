//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Rupees                                           │
//! │    Catalog prices are whole LKR amounts (2500, 3900, 4500) and the     │
//! │    display format carries zero fractional digits, so the smallest      │
//! │    unit we ever need is one rupee. All math is i64 multiplication      │
//! │    and summation - exact by construction.                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use serendib_core::money::Money;
//!
//! // Create from whole rupees (the only constructor)
//! let price = Money::from_rupees(2500);
//!
//! // Arithmetic operations
//! let line_total = price * 2;                      // LKR 5,000
//! let total = line_total + Money::from_rupees(4500); // LKR 9,500
//!
//! assert_eq!(total.to_string(), "LKR 9,500");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

/// ISO 4217 code for Sri Lankan rupees; doubles as the display symbol,
/// matching the `en-LK` locale rendering the storefront frontend uses.
pub const CURRENCY_CODE: &str = "LKR";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole Sri Lankan rupees.
///
/// ## Design Decisions
/// - **i64 (signed)**: room for refunds/adjustments even though the shop
///   flows only ever produce non-negative amounts today
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// Product.price ──► SnapshotLine.line_total (price × qty)
///                         │
///                         ▼
///                  CartSnapshot.total ──► "LKR 9,500" in the order message
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use serendib_core::money::Money;
    ///
    /// let price = Money::from_rupees(2500);
    /// assert_eq!(price.rupees(), 2500);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees)
    }

    /// Returns the value in whole rupees.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a line quantity.
    ///
    /// ## Example
    /// ```rust
    /// use serendib_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(2500);
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.rupees(), 5000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Formats the amount as a localized LKR string: fixed currency code,
    /// thousands grouping, zero fractional digits.
    ///
    /// Deterministic for a given input, so the checkout message and every
    /// display surface agree on the rendering.
    ///
    /// ## Example
    /// ```rust
    /// use serendib_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(9500).format_lkr(), "LKR 9,500");
    /// assert_eq!(Money::from_rupees(1234567).format_lkr(), "LKR 1,234,567");
    /// ```
    pub fn format_lkr(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{} {}", sign, CURRENCY_CODE, group_thousands(self.0.unsigned_abs()))
    }
}

/// Inserts `,` separators every three digits, most significant first.
fn group_thousands(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut groups: Vec<String> = Vec::new();
    while value > 0 {
        groups.push((value % 1000).to_string());
        value /= 1000;
    }

    // All but the leading group are zero-padded to three digits
    let mut out = String::new();
    for (i, group) in groups.iter().enumerate().rev() {
        if i == groups.len() - 1 {
            out.push_str(group);
        } else {
            out.push(',');
            out.push_str(&format!("{:0>3}", group));
        }
    }
    out
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the localized LKR form used everywhere money is shown.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_lkr())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Summation over line totals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
