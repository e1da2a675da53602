//! API route configuration.

use crate::api::handlers::{
    clean_handler, clear_history_handler, create_program_handler, delete_history_entry_handler,
    delete_program_handler, detect_handler, get_program_handler, history_list_handler,
    history_summary_handler, program_list_handler, resolve_handler, update_program_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST   /resolve`          - Resolve URLs against affiliate programs (batch-capable)
/// - `GET    /detect`           - Detect the merchant of a URL
/// - `POST   /clean`            - Strip tracking parameters from a URL
/// - `GET    /programs`         - List affiliate programs
/// - `POST   /programs`         - Register a program
/// - `GET    /programs/{id}`    - Fetch a program
/// - `PATCH  /programs/{id}`    - Partially update a program
/// - `DELETE /programs/{id}`    - Delete a program
/// - `GET    /history`          - Recent resolutions
/// - `DELETE /history`          - Clear history
/// - `GET    /history/summary`  - Per-merchant aggregation
/// - `DELETE /history/{id}`     - Delete one history entry
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/resolve", post(resolve_handler))
        .route("/detect", get(detect_handler))
        .route("/clean", post(clean_handler))
        .route(
            "/programs",
            get(program_list_handler).post(create_program_handler),
        )
        .route(
            "/programs/{id}",
            get(get_program_handler)
                .patch(update_program_handler)
                .delete(delete_program_handler),
        )
        .route(
            "/history",
            get(history_list_handler).delete(clear_history_handler),
        )
        .route("/history/summary", get(history_summary_handler))
        .route("/history/{id}", delete(delete_history_entry_handler))
}
