use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{Receipt, ReceiptId};
use super::store::ReceiptStore;
use crate::error::AppError;

/// Body returned after a receipt is processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: ReceiptId,
}

/// Body returned by the points lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Router builder exposing receipt submission and points lookup.
pub fn receipt_router(store: Arc<ReceiptStore>) -> Router {
    Router::new()
        .route("/receipts/process", post(process_handler))
        .route("/receipts/:receipt_id/points", get(points_handler))
        .with_state(store)
}

pub(crate) async fn process_handler(
    State(store): State<Arc<ReceiptStore>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessReceiptResponse>, AppError> {
    let Json(receipt) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected receipt payload");
        rejection
    })?;

    let id = store.submit(receipt);
    Ok(Json(ProcessReceiptResponse { id }))
}

pub(crate) async fn points_handler(
    State(store): State<Arc<ReceiptStore>>,
    Path(receipt_id): Path<String>,
) -> Result<Json<PointsResponse>, AppError> {
    let points = store.get_points(&ReceiptId(receipt_id))?;
    Ok(Json(PointsResponse { points }))
}
