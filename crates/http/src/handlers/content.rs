use axum::{Json, extract::State};
use std::sync::Arc;

use pulse_core::ContentCounts;

use crate::AppState;
use crate::api_error::ApiError;

/// GET /content — every tracked item with aggregate view/like counts,
/// ordered ascending by slug. Read-only.
pub async fn list_content(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ContentCounts>>, ApiError> {
    let content = state.store.list_content().await?;
    Ok(Json(content))
}
