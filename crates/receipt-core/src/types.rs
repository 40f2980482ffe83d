//! # Domain Types
//!
//! Core domain types used throughout the receipt processor.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   validate_receipt()   ┌──────────────────────┐   │
//! │  │    Receipt      │ ─────────────────────► │  ValidatedReceipt    │   │
//! │  │  ─────────────  │                        │  ──────────────────  │   │
//! │  │  retailer       │                        │  receipt (verbatim)  │   │
//! │  │  purchaseDate   │                        │  total: Money        │   │
//! │  │  purchaseTime   │                        │  item prices: Money  │   │
//! │  │  items: [Item]  │                        └──────────┬───────────┘   │
//! │  │  total (text)   │                                   │               │
//! │  └─────────────────┘                                   │               │
//! │                                                        ▼               │
//! │                                               calculate_points()       │
//! │                                                                         │
//! │  Wire responses: ReceiptIdResponse, PointsResponse, ErrorResponse       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Text-Typed Amounts
//! `total` and `price` stay strings on the wire so the exact two-decimal
//! format can be checked on its own. They are parsed into [`Money`] once,
//! during validation, and never again.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Receipt Document
// =============================================================================

/// A receipt document as submitted by a client.
///
/// Missing fields deserialize to their empty value and are rejected by
/// validation, so "absent" and "empty" are the same failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    /// Store or retailer name, free-form.
    pub retailer: String,

    /// `YYYY-MM-DD`
    pub purchase_date: String,

    /// `HH:MM`, 24-hour clock
    pub purchase_time: String,

    /// Purchased line items, in receipt order.
    pub items: Vec<Item>,

    /// `<digits>.<two digits>`
    pub total: String,
}

/// A single line item on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

// =============================================================================
// Validated Receipt
// =============================================================================

/// A receipt that passed every validation rule.
///
/// ## Invariants
/// - Only [`crate::validation::validate_receipt`] constructs this type
/// - `item_prices[i]` is the parsed price of `receipt.items[i]`
/// - At least one item
///
/// The points calculator takes this type, so it never sees malformed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReceipt {
    receipt: Receipt,
    total: Money,
    item_prices: Vec<Money>,
}

impl ValidatedReceipt {
    pub(crate) fn new(receipt: Receipt, total: Money, item_prices: Vec<Money>) -> Self {
        debug_assert_eq!(receipt.items.len(), item_prices.len());
        ValidatedReceipt {
            receipt,
            total,
            item_prices,
        }
    }

    /// The receipt exactly as it was submitted.
    #[inline]
    pub fn receipt(&self) -> &Receipt {
        &self.receipt
    }

    #[inline]
    pub fn retailer(&self) -> &str {
        &self.receipt.retailer
    }

    /// The parsed `total`.
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    /// Number of line items (always ≥ 1).
    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_prices.len()
    }

    /// Iterates line items together with their parsed prices.
    pub fn priced_items(&self) -> impl Iterator<Item = (&Item, Money)> + '_ {
        self.receipt
            .items
            .iter()
            .zip(self.item_prices.iter().copied())
    }
}

// =============================================================================
// Response DTOs
// =============================================================================

/// Body of a successful `POST /receipts/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptIdResponse {
    pub id: String,
}

/// Body of a successful `GET /receipts/{id}/points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_receipt_uses_camel_case_fields() {
        let receipt: Receipt = serde_json::from_value(json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{ "shortDescription": "Mountain Dew 12PK", "price": "6.49" }],
            "total": "6.49"
        }))
        .unwrap();

        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.items[0].short_description, "Mountain Dew 12PK");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let receipt: Receipt = serde_json::from_value(json!({ "retailer": "Target" })).unwrap();

        assert_eq!(receipt.retailer, "Target");
        assert!(receipt.purchase_date.is_empty());
        assert!(receipt.items.is_empty());
        assert!(receipt.total.is_empty());
    }

    #[test]
    fn test_wrong_json_type_is_a_deserialize_error() {
        let result: Result<Receipt, _> = serde_json::from_value(json!({ "total": 35.35 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_response_shapes() {
        let body = serde_json::to_value(PointsResponse { points: 28 }).unwrap();
        assert_eq!(body, json!({ "points": 28 }));

        let body = serde_json::to_value(ErrorResponse {
            description: "The receipt is invalid.".to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({ "description": "The receipt is invalid." }));
    }
}
