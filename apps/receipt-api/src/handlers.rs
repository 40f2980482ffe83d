//! # Receipt Handlers
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /receipts/process                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Json<Receipt> ──► validate_receipt() ──► Uuid::new_v4() ──► insert()  │
//! │       │                   │                                    │        │
//! │       └── 400 ◄───────────┘                                    ▼        │
//! │                                                        200 {"id": ...}  │
//! │                                                                         │
//! │  GET /receipts/{id}/points                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.get(id) ──► None ──► 404                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  points::breakdown() ──► 200 {"points": n}                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use receipt_core::points;
use receipt_core::{validate_receipt, PointsResponse, Receipt, ReceiptIdResponse};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

/// Validates and stores a receipt, returning its new identifier.
///
/// Each call mints a fresh identifier, even for an identical body.
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ReceiptIdResponse>, ApiError> {
    let Json(receipt) = payload?;
    let receipt = validate_receipt(receipt)?;

    let id = Uuid::new_v4().to_string();
    let retailer = receipt.retailer().to_string();
    let total = receipt.total();
    state.store.insert(id.clone(), receipt)?;

    info!(receipt_id = %id, %retailer, %total, "receipt processed");
    Ok(Json(ReceiptIdResponse { id }))
}

/// Scores a stored receipt.
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let receipt = state
        .store
        .get(&id)?
        .ok_or_else(|| ApiError::ReceiptNotFound { id: id.clone() })?;

    let breakdown = points::breakdown(&receipt);
    let points = breakdown.total();
    debug!(receipt_id = %id, ?breakdown, points, "points calculated");

    Ok(Json(PointsResponse { points }))
}
