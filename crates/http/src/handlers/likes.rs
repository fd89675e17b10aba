use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use pulse_core::{LikeReceipt, validate_slug};

use crate::AppState;
use crate::api_error::ApiError;
use crate::session::SessionId;

/// POST /like/{slug} — record one like for the slug from the caller's
/// session. Slug validation runs before any storage access; the cap check
/// happens inside the store's transaction.
pub async fn record_like(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    session: SessionId,
) -> Result<(StatusCode, Json<LikeReceipt>), ApiError> {
    validate_slug(&slug).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let receipt = state.store.record_like(&slug, session.as_str()).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}
