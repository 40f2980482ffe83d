//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Receipt field failures                         │
//! │                                                                         │
//! │  receipt-api errors (app crate)                                        │
//! │  ├── StoreError       - Receipt store failures                         │
//! │  └── ApiError         - What the HTTP client sees                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → HTTP 400               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field path (`items[2].price`) in messages
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The submitted receipt failed validation.
    #[error("Invalid receipt: {0}")]
    InvalidReceipt(#[from] ValidationError),

    /// Amount text is not `<digits>.<two digits>`.
    #[error("Malformed amount: {value:?}")]
    MalformedAmount { value: String },

    /// A well-formed amount does not fit in 64-bit cents.
    #[error("Amount {value} is too large")]
    AmountOverflow { value: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Every variant carries the path of the field that failed so the reason
/// can be logged, even though clients only ever see a generic rejection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Collection has fewer elements than allowed.
    #[error("{field} must contain at least {min} entries")]
    TooShort { field: String, min: usize },

    /// Invalid format (e.g., `3.5` for a price, `2022-02-30` for a date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Returns the path of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
