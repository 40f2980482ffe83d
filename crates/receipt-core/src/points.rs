//! # Points Calculator
//!
//! Scores a [`ValidatedReceipt`]. Pure, deterministic, recomputed in full on
//! every call.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                         Award                                     │
//! │  ───────────────────────────  ──────────────────────────────────────    │
//! │  Retailer name                1 per letter/digit (Unicode)              │
//! │  Round-dollar total           50 if total has no cents                  │
//! │  Quarter-multiple total       25 if total is a multiple of 0.25         │
//! │  Item pairs                   5 per two items                           │
//! │  Description length           ceil(price × 0.2) if trimmed length % 3   │
//! │  Odd purchase day             6 if last char of the date is odd         │
//! │  Afternoon purchase           10 if hour is 14, 15 or 16                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All money rules run on integer cents.
//!
//! ## Example
//! ```rust
//! use receipt_core::points::calculate_points;
//! use receipt_core::types::{Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![Item {
//!         short_description: "Gatorade".to_string(),
//!         price: "9.00".to_string(),
//!     }],
//!     total: "9.00".to_string(),
//! }
//! .validate()
//! .unwrap();
//!
//! // 14 name + 50 round + 25 quarter + 10 afternoon
//! assert_eq!(calculate_points(&receipt), 99);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::money::Money;
use crate::types::ValidatedReceipt;

// =============================================================================
// Rule Constants
// =============================================================================

pub const ROUND_DOLLAR_POINTS: u64 = 50;
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
pub const ITEM_PAIR_POINTS: u64 = 5;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;

/// 20% of an item's price, in basis points.
pub const DESCRIPTION_PRICE_RATE_BPS: u32 = 2000;

/// First and last hour (inclusive) of the afternoon window.
pub const AFTERNOON_HOURS: (u32, u32) = (14, 16);

const QUARTER: Money = Money::from_cents(25);

/// General category Letter (L*) or Number (N*). Combining marks and symbols
/// such as enclosed letters are not counted, even when `char::is_alphabetic`
/// accepts them.
static LETTER_OR_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]").expect("valid letter/number regex"));

// =============================================================================
// Breakdown
// =============================================================================

/// Points awarded by each rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar_total: u64,
    pub quarter_multiple_total: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_purchase_day: u64,
    pub afternoon_purchase: u64,
}

impl PointsBreakdown {
    /// Sum of every rule.
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Scores a receipt rule by rule.
pub fn breakdown(receipt: &ValidatedReceipt) -> PointsBreakdown {
    let total = receipt.total();

    PointsBreakdown {
        retailer_name: retailer_name_points(receipt.retailer()),
        round_dollar_total: award(total.is_whole_dollars(), ROUND_DOLLAR_POINTS),
        quarter_multiple_total: award(total.is_multiple_of(QUARTER), QUARTER_MULTIPLE_POINTS),
        item_pairs: (receipt.item_count() as u64 / 2).saturating_mul(ITEM_PAIR_POINTS),
        item_descriptions: receipt
            .priced_items()
            .map(|(item, price)| description_points(&item.short_description, price))
            .fold(0, u64::saturating_add),
        odd_purchase_day: award(
            is_odd_day(&receipt.receipt().purchase_date),
            ODD_DAY_POINTS,
        ),
        afternoon_purchase: award(
            is_afternoon(&receipt.receipt().purchase_time),
            AFTERNOON_POINTS,
        ),
    }
}

/// Total points for a receipt.
pub fn calculate_points(receipt: &ValidatedReceipt) -> u64 {
    breakdown(receipt).total()
}

// =============================================================================
// Individual Rules
// =============================================================================

#[inline]
fn award(condition: bool, points: u64) -> u64 {
    if condition {
        points
    } else {
        0
    }
}

/// One point per Unicode letter or number, over the space-separated words.
pub fn retailer_name_points(retailer: &str) -> u64 {
    retailer
        .split(' ')
        .map(|word| LETTER_OR_NUMBER.find_iter(word).count() as u64)
        .sum()
}

/// `ceil(price × 0.2)` when the space-trimmed description length is a
/// multiple of 3. Length is counted in UTF-8 bytes.
pub fn description_points(description: &str, price: Money) -> u64 {
    if description.trim_matches(' ').len() % 3 != 0 {
        return 0;
    }
    price.dollars_at_rate_ceil(DESCRIPTION_PRICE_RATE_BPS).max(0) as u64
}

/// Parity of the literal last character of the date string, not the parsed
/// day of month.
fn is_odd_day(purchase_date: &str) -> bool {
    purchase_date
        .chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .is_some_and(|digit| digit % 2 == 1)
}

/// Hour taken from the first two characters of `HH:MM`.
fn is_afternoon(purchase_time: &str) -> bool {
    let (start, end) = AFTERNOON_HOURS;
    purchase_time
        .get(..2)
        .and_then(|hour| hour.parse::<u32>().ok())
        .is_some_and(|hour| (start..=end).contains(&hour))
}

// =============================================================================
// Unit Tests
// =============================================================================
