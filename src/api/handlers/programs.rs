//! Handlers for affiliate program management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::program::{
    CreateProgramRequest, ProgramItem, ProgramListResponse, UpdateProgramRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all programs in resolution order.
///
/// # Endpoint
///
/// `GET /api/programs`
pub async fn program_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ProgramListResponse>, AppError> {
    let programs = state.program_service.list_programs().await?;

    Ok(Json(ProgramListResponse {
        items: programs.into_iter().map(ProgramItem::from).collect(),
    }))
}

/// Returns one program.
///
/// # Endpoint
///
/// `GET /api/programs/{id}`
///
/// # Errors
///
/// Returns 404 if the program does not exist.
pub async fn get_program_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ProgramItem>, AppError> {
    let program = state.program_service.get_program(&id).await?;
    Ok(Json(program.into()))
}

/// Registers a program.
///
/// # Endpoint
///
/// `POST /api/programs`
///
/// # Errors
///
/// Returns 400 if a field is invalid.
/// Returns 409 if the id is already taken.
pub async fn create_program_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateProgramRequest>,
) -> Result<(StatusCode, Json<ProgramItem>), AppError> {
    payload.validate()?;

    let program = state.program_service.create_program(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(program.into())))
}

/// Partially updates a program.
///
/// # Endpoint
///
/// `PATCH /api/programs/{id}`
///
/// Setting `active: false` takes the program out of resolution immediately.
///
/// # Errors
///
/// Returns 400 if a field is invalid.
/// Returns 404 if the program does not exist.
pub async fn update_program_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateProgramRequest>,
) -> Result<Json<ProgramItem>, AppError> {
    let program = state
        .program_service
        .update_program(&id, payload.into())
        .await?;

    Ok(Json(program.into()))
}

/// Deletes a program.
///
/// # Endpoint
///
/// `DELETE /api/programs/{id}`
///
/// # Errors
///
/// Returns 404 if the program does not exist.
pub async fn delete_program_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.program_service.delete_program(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
