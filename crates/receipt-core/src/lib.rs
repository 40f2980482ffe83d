//! # receipt-core: Pure Business Logic for the Receipt Processor
//!
//! This crate holds the receipt model, the validator and the points
//! calculator as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Processor Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 receipt-api (axum HTTP service)                 │   │
//! │  │   POST /receipts/process        GET /receipts/{id}/points       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ receipt-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ validation │  │  points   │  │   │
//! │  │   │  Receipt  │  │   Money   │  │  validate_ │  │ calculate │  │   │
//! │  │   │   Item    │  │ "d+.dd"   │  │  receipt   │  │ _points   │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Receipt document, validated receipt, response bodies
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`validation`] - Receipt validator
//! - [`points`] - Points calculator
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{calculate_points, validate_receipt, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![
//!         Item { short_description: "Mountain Dew 12PK".to_string(), price: "6.49".to_string() },
//!         Item { short_description: "Emils Cheese Pizza".to_string(), price: "12.25".to_string() },
//!         Item { short_description: "Knorr Creamy Chicken".to_string(), price: "1.26".to_string() },
//!         Item { short_description: "Doritos Nacho Cheese".to_string(), price: "3.35".to_string() },
//!         Item { short_description: "   Klarbrunn 12-PK 12 FL OZ  ".to_string(), price: "12.00".to_string() },
//!     ],
//!     total: "35.35".to_string(),
//! };
//!
//! let validated = validate_receipt(receipt).unwrap();
//! assert_eq!(calculate_points(&validated), 28);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use points::{calculate_points, PointsBreakdown};
pub use types::*;
pub use validation::validate_receipt;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum number of line items on an accepted receipt.
pub const MIN_RECEIPT_ITEMS: usize = 1;
