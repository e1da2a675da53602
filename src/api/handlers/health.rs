//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Programs**: Program store is readable; reports how many are active
/// 2. **History**: History store is readable; reports retained entries
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "programs": { "status": "ok", "message": "3 programs, 2 active" },
///     "history": { "status": "ok", "message": "12 entries" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let programs_check = check_programs(&state).await;
    let history_check = check_history(&state).await;

    let all_healthy = programs_check.status == "ok" && history_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            programs: programs_check,
            history: history_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_programs(state: &AppState) -> CheckStatus {
    match state.program_service.list_programs().await {
        Ok(programs) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "{} programs, {} active",
                programs.len(),
                programs.iter().filter(|p| p.active).count()
            )),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Program store error: {}", e)),
        },
    }
}

async fn check_history(state: &AppState) -> CheckStatus {
    match state.history_service.count().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} entries", count)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("History store error: {}", e)),
        },
    }
}
