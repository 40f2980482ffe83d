//! # Validation Module
//!
//! The receipt validator: the only way to obtain a [`ValidatedReceipt`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: JSON extraction (receipt-api)                                │
//! │  ├── Body must be JSON with string/array field types                   │
//! │  └── Missing fields become empty values                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields non-empty, at least one item                      │
//! │  ├── Exact text formats (amounts, date, time)                          │
//! │  └── Calendar-valid date, valid time-of-day                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  ValidatedReceipt ──► store ──► points calculator                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules are checked in document order and the first failure is returned.
//!
//! ## Usage
//! ```rust
//! use receipt_core::types::{Item, Receipt};
//! use receipt_core::validation::validate_receipt;
//!
//! let receipt = Receipt {
//!     retailer: "Walgreens".to_string(),
//!     purchase_date: "2022-01-02".to_string(),
//!     purchase_time: "08:13".to_string(),
//!     items: vec![Item {
//!         short_description: "Pepsi - 12-oz".to_string(),
//!         price: "1.25".to_string(),
//!     }],
//!     total: "1.25".to_string(),
//! };
//!
//! let validated = validate_receipt(receipt).unwrap();
//! assert_eq!(validated.total().cents(), 125);
//! ```

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CoreError, ValidationError};
use crate::money::Money;
use crate::types::{Item, Receipt, ValidatedReceipt};
use crate::MIN_RECEIPT_ITEMS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

static DATE_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

static TIME_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("valid time regex"));

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates a submitted receipt.
///
/// ## Rules
/// - `retailer` non-empty
/// - `purchaseDate` is `YYYY-MM-DD` and a real calendar date
/// - `purchaseTime` is `HH:MM` between 00:00 and 23:59
/// - `items` has at least one entry, each with a non-empty
///   `shortDescription` and a two-decimal `price`
/// - `total` is a two-decimal amount
///
/// The receipt is kept verbatim inside the returned value.
pub fn validate_receipt(receipt: Receipt) -> ValidationResult<ValidatedReceipt> {
    validate_required("retailer", &receipt.retailer)?;
    validate_purchase_date(&receipt.purchase_date)?;
    validate_purchase_time(&receipt.purchase_time)?;

    if receipt.items.len() < MIN_RECEIPT_ITEMS {
        return Err(ValidationError::TooShort {
            field: "items".to_string(),
            min: MIN_RECEIPT_ITEMS,
        });
    }

    let item_prices = receipt
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item))
        .collect::<ValidationResult<Vec<_>>>()?;

    let total = validate_amount("total", &receipt.total)?;

    Ok(ValidatedReceipt::new(receipt, total, item_prices))
}

impl Receipt {
    /// Shorthand for [`validate_receipt`].
    pub fn validate(self) -> ValidationResult<ValidatedReceipt> {
        validate_receipt(self)
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates one line item and returns its parsed price.
///
/// `index` is only used to name the failing field (`items[3].price`).
pub fn validate_item(index: usize, item: &Item) -> ValidationResult<Money> {
    validate_required(
        &format!("items[{index}].shortDescription"),
        &item.short_description,
    )?;
    validate_amount(&format!("items[{index}].price"), &item.price)
}

/// Validates a two-decimal amount (`price` or `total`).
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_amount;
///
/// assert_eq!(validate_amount("total", "9.00").unwrap().cents(), 900);
/// assert!(validate_amount("total", "9").is_err());
/// assert!(validate_amount("total", "").is_err());
/// ```
pub fn validate_amount(field: &str, value: &str) -> ValidationResult<Money> {
    validate_required(field, value)?;

    Money::parse(value).map_err(|err| {
        let reason = match err {
            CoreError::AmountOverflow { .. } => "amount is too large".to_string(),
            _ => "must be digits, a dot and exactly two decimals".to_string(),
        };
        ValidationError::InvalidFormat {
            field: field.to_string(),
            reason,
        }
    })
}

/// Validates a `YYYY-MM-DD` purchase date.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_purchase_date;
///
/// assert!(validate_purchase_date("2024-02-29").is_ok());
/// assert!(validate_purchase_date("2023-02-29").is_err()); // not a leap year
/// assert!(validate_purchase_date("2022-1-01").is_err());
/// ```
pub fn validate_purchase_date(value: &str) -> ValidationResult<NaiveDate> {
    const FIELD: &str = "purchaseDate";
    validate_required(FIELD, value)?;

    if !DATE_FORMAT.is_match(value) {
        return Err(invalid_format(FIELD, "expected YYYY-MM-DD"));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| invalid_format(FIELD, "not a calendar date"))
}

/// Validates an `HH:MM` purchase time on the 24-hour clock.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_purchase_time;
///
/// assert!(validate_purchase_time("00:00").is_ok());
/// assert!(validate_purchase_time("23:59").is_ok());
/// assert!(validate_purchase_time("24:00").is_err());
/// assert!(validate_purchase_time("9:30").is_err());
/// ```
pub fn validate_purchase_time(value: &str) -> ValidationResult<NaiveTime> {
    const FIELD: &str = "purchaseTime";
    validate_required(FIELD, value)?;

    if !TIME_FORMAT.is_match(value) {
        return Err(invalid_format(FIELD, "expected HH:MM"));
    }

    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| invalid_format(FIELD, "not a time of day"))
}

fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn invalid_format(field: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str, price: &str) -> Item {
        Item {
            short_description: description.to_string(),
            price: price.to_string(),
        }
    }

    fn valid_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![item("Mountain Dew 12PK", "6.49"), item("Emils Cheese Pizza", "12.25")],
            total: "18.74".to_string(),
        }
    }

    fn failing_field(receipt: Receipt) -> String {
        validate_receipt(receipt).unwrap_err().field().to_string()
    }

    #[test]
    fn test_valid_receipt_keeps_document_verbatim() {
        let original = valid_receipt();
        let validated = validate_receipt(original.clone()).unwrap();

        assert_eq!(validated.receipt(), &original);
        assert_eq!(validated.total().cents(), 1874);
        assert_eq!(validated.item_count(), 2);

        let prices: Vec<i64> = validated.priced_items().map(|(_, p)| p.cents()).collect();
        assert_eq!(prices, vec![649, 1225]);
    }

    #[test]
    fn test_method_form_matches_function() {
        assert_eq!(
            valid_receipt().validate().unwrap(),
            validate_receipt(valid_receipt()).unwrap()
        );
    }

    #[test]
    fn test_empty_items_rejected() {
        let receipt = Receipt {
            items: vec![],
            ..valid_receipt()
        };
        assert_eq!(
            validate_receipt(receipt).unwrap_err(),
            ValidationError::TooShort {
                field: "items".to_string(),
                min: 1
            }
        );
    }

    #[test]
    fn test_required_fields() {
        let receipt = Receipt {
            retailer: String::new(),
            ..valid_receipt()
        };
        assert_eq!(failing_field(receipt), "retailer");

        let receipt = Receipt {
            purchase_date: String::new(),
            ..valid_receipt()
        };
        assert_eq!(failing_field(receipt), "purchaseDate");

        let receipt = Receipt {
            purchase_time: String::new(),
            ..valid_receipt()
        };
        assert_eq!(failing_field(receipt), "purchaseTime");

        let receipt = Receipt {
            total: String::new(),
            ..valid_receipt()
        };
        assert_eq!(failing_field(receipt), "total");

        let mut receipt = valid_receipt();
        receipt.items[1].short_description.clear();
        assert_eq!(failing_field(receipt), "items[1].shortDescription");
    }

    #[test]
    fn test_whitespace_only_text_is_present() {
        let mut receipt = valid_receipt();
        receipt.retailer = " ".to_string();
        receipt.items[0].short_description = "   ".to_string();
        assert!(validate_receipt(receipt).is_ok());
    }

    #[test]
    fn test_amount_formats() {
        for good in ["0.00", "1.25", "35.35", "1000000.99", "00.10"] {
            assert!(validate_amount("price", good).is_ok(), "{good:?}");
        }
        for bad in ["3.5", "3.500", "abc", "3", "3.", ".35", "-3.50", "3.50\n", "$3.50"] {
            assert!(validate_amount("price", bad).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn test_item_price_rejected_with_index() {
        let mut receipt = valid_receipt();
        receipt.items[1].price = "12.5".to_string();
        assert_eq!(failing_field(receipt), "items[1].price");
    }

    #[test]
    fn test_overflowing_total_rejected() {
        let receipt = Receipt {
            total: "100000000000000000000.00".to_string(),
            ..valid_receipt()
        };
        let err = validate_receipt(receipt).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidFormat {
                field: "total".to_string(),
                reason: "amount is too large".to_string()
            }
        );
    }

    #[test]
    fn test_purchase_date() {
        assert!(validate_purchase_date("2022-01-01").is_ok());
        assert!(validate_purchase_date("2000-02-29").is_ok());

        assert!(validate_purchase_date("2022-02-30").is_err());
        assert!(validate_purchase_date("2022-13-01").is_err());
        assert!(validate_purchase_date("2022-00-10").is_err());
        assert!(validate_purchase_date("1900-02-29").is_err());
        assert!(validate_purchase_date("22-01-01").is_err());
        assert!(validate_purchase_date("2022/01/01").is_err());
        assert!(validate_purchase_date("2022-01-01T00:00").is_err());
        assert!(validate_purchase_date("+2022-01-01").is_err());
    }

    #[test]
    fn test_purchase_time() {
        assert!(validate_purchase_time("14:00").is_ok());
        assert!(validate_purchase_time("16:59").is_ok());

        assert!(validate_purchase_time("24:00").is_err());
        assert!(validate_purchase_time("12:60").is_err());
        assert!(validate_purchase_time("1:05").is_err());
        assert!(validate_purchase_time("13:01:00").is_err());
        assert!(validate_purchase_time("1pm").is_err());
    }
}
