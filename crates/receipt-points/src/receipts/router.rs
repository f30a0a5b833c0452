use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{Receipt, ReceiptId};
use super::repository::{IdGenerator, ReceiptRepository};
use super::service::ReceiptService;
use crate::error::AppError;

/// Body returned after a receipt is processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: ReceiptId,
}

/// Body returned by the points lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Router builder exposing receipt intake and points lookup.
pub fn receipts_router<R, G>(service: Arc<ReceiptService<R, G>>) -> Router
where
    R: ReceiptRepository + 'static,
    G: IdGenerator + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<R, G>))
        .route(
            "/receipts/:receipt_id/points",
            get(points_handler::<R, G>),
        )
        .with_state(service)
}

/// Accepts the receipt as JSON regardless of the declared content type.
pub(crate) async fn process_handler<R, G>(
    State(service): State<Arc<ReceiptService<R, G>>>,
    body: Bytes,
) -> Result<Json<ProcessReceiptResponse>, AppError>
where
    R: ReceiptRepository + 'static,
    G: IdGenerator + 'static,
{
    let receipt: Receipt = serde_json::from_slice(&body).map_err(|err| {
        debug!(error = %err, "rejected undecodable receipt");
        err
    })?;

    let record = service.process(receipt)?;
    Ok(Json(ProcessReceiptResponse { id: record.id }))
}

pub(crate) async fn points_handler<R, G>(
    State(service): State<Arc<ReceiptService<R, G>>>,
    Path(receipt_id): Path<String>,
) -> Result<Json<PointsResponse>, AppError>
where
    R: ReceiptRepository + 'static,
    G: IdGenerator + 'static,
{
    let points = service.points(&ReceiptId(receipt_id))?;
    Ok(Json(PointsResponse { points }))
}
