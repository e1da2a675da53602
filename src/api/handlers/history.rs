//! Handlers for resolution history endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::dto::history::{ClearHistoryResponse, HistoryListResponse, HistoryParams};
use crate::domain::entities::HistorySummary;
use crate::error::AppError;
use crate::state::AppState;

/// Lists recent resolutions, newest first.
///
/// # Endpoint
///
/// `GET /api/history?limit=50`
///
/// # Errors
///
/// Returns 400 if `limit` is 0 or above 500.
pub async fn history_list_handler(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<HistoryListResponse>, AppError> {
    let items = state.history_service.recent(params.limit).await?;
    let total = state.history_service.count().await?;

    Ok(Json(HistoryListResponse { total, items }))
}

/// Aggregates the retained history per merchant.
///
/// # Endpoint
///
/// `GET /api/history/summary`
pub async fn history_summary_handler(
    State(state): State<AppState>,
) -> Result<Json<HistorySummary>, AppError> {
    Ok(Json(state.history_service.summary().await?))
}

/// Deletes one history entry.
///
/// # Endpoint
///
/// `DELETE /api/history/{id}`
///
/// # Errors
///
/// Returns 404 if the entry does not exist.
pub async fn delete_history_entry_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.history_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Clears the history.
///
/// # Endpoint
///
/// `DELETE /api/history`
pub async fn clear_history_handler(
    State(state): State<AppState>,
) -> Result<Json<ClearHistoryResponse>, AppError> {
    let dropped = state.history_service.clear().await?;
    Ok(Json(ClearHistoryResponse { dropped }))
}
