//! # Money Module
//!
//! Provides the `Money` type for handling receipt amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    "Is 10.35 a multiple of 0.25?" depends on representation error       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "10.35" → 1035 cents → 1035 % 25 == 10 → not a multiple             │
//! │    Exact answers for every amount the wire format can express          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Amounts travel as text: one or more digits, a dot, exactly two digits
//! (`^\d+\.\d{2}$`). [`Money::parse`] is the only way to turn that text into
//! a value, and it accepts nothing else.
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! let total = Money::parse("35.35").unwrap();
//! assert_eq!(total.cents(), 3535);
//! assert!(!total.is_whole_dollars());
//!
//! assert!(Money::parse("3.5").is_err());
//! ```

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CoreError, CoreResult};

/// `<digits>.<exactly two digits>`, ASCII digits only.
static AMOUNT_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("valid amount regex"));

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: zero-cost newtype, same representation as the
///   arithmetic it feeds
/// - **No float constructor**: amounts come from text or from cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a two-decimal amount such as `"12.25"`.
    ///
    /// ## Rules
    /// - Must match `^\d+\.\d{2}$` exactly (no sign, no spaces, no exponent)
    /// - Leading zeros are allowed (`"007.50"`)
    /// - The value must fit in 64-bit cents
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::parse("6.49").unwrap().cents(), 649);
    /// assert_eq!(Money::parse("0.00").unwrap().cents(), 0);
    ///
    /// assert!(Money::parse("3.500").is_err());
    /// assert!(Money::parse(".50").is_err());
    /// assert!(Money::parse("abc").is_err());
    /// ```
    pub fn parse(text: &str) -> CoreResult<Money> {
        if !AMOUNT_FORMAT.is_match(text) {
            return Err(CoreError::MalformedAmount {
                value: text.to_string(),
            });
        }

        // The regex guarantees exactly one ASCII dot followed by two digits.
        let (major, minor) = text.split_at(text.len() - 3);
        let minor = &minor[1..];

        let overflow = || CoreError::AmountOverflow {
            value: text.to_string(),
        };

        let major: i64 = major.parse().map_err(|_| overflow())?;
        let minor: i64 = minor.parse().map_err(|_| overflow())?;

        major
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(minor))
            .map(Money)
            .ok_or_else(overflow)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).cents_part(), 99);
    /// assert_eq!(Money::from_cents(-550).cents_part(), 50);
    /// ```
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Checks if the amount has no fractional part (`9.00`, `0.00`).
    #[inline]
    pub const fn is_whole_dollars(&self) -> bool {
        self.0 % 100 == 0
    }

    /// Checks if the amount is an exact multiple of `step`.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let quarter = Money::from_cents(25);
    /// assert!(Money::from_cents(975).is_multiple_of(quarter));
    /// assert!(!Money::from_cents(3535).is_multiple_of(quarter));
    /// ```
    ///
    /// A zero `step` only divides zero.
    #[inline]
    pub const fn is_multiple_of(&self, step: Money) -> bool {
        if step.0 == 0 {
            return self.0 == 0;
        }
        self.0 % step.0 == 0
    }

    /// Applies a rate in basis points and rounds the result UP to whole dollars.
    ///
    /// ## Implementation
    /// Integer math only: `ceil(cents * bps / 10000 / 100)`. `i128` keeps the
    /// intermediate product from overflowing on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// // 20% of $12.25 = $2.45 → 3 whole dollars
    /// assert_eq!(Money::from_cents(1225).dollars_at_rate_ceil(2000), 3);
    /// // 20% of $5.00 = $1.00 exactly → 1
    /// assert_eq!(Money::from_cents(500).dollars_at_rate_ceil(2000), 1);
    /// ```
    pub fn dollars_at_rate_ceil(&self, rate_bps: u32) -> i64 {
        let scaled = self.0 as i128 * rate_bps as i128;
        let divisor: i128 = 10_000 * 100;
        // ceil(a / b) == -floor(-a / b)
        let dollars = -(-scaled).div_euclid(divisor);
        dollars as i64
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
