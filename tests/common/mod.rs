#![allow(dead_code)]

use affiliate_linker::api;
use affiliate_linker::api::handlers::health_handler;
use affiliate_linker::domain::entities::{AffiliateProgram, Merchant};
use affiliate_linker::state::AppState;
use axum::{Router, routing::get};
use axum_test::TestServer;

pub const HISTORY_CAPACITY: usize = 100;

pub fn flipkart_program() -> AffiliateProgram {
    let mut program = AffiliateProgram::new("fk", Merchant::Flipkart, "partner42");
    program.tracking_param = Some("affid".to_string());
    program
}

pub fn amazon_program() -> AffiliateProgram {
    AffiliateProgram::new("amz", Merchant::Amazon, "linker-21")
}

pub fn fallback_program() -> AffiliateProgram {
    let mut program = AffiliateProgram::new("cl", Merchant::Cuelinks, "12345");
    program.sub_identifier = Some("ch1".to_string());
    program.credential = Some("secret-token".to_string());
    program
}

pub fn sample_programs() -> Vec<AffiliateProgram> {
    vec![flipkart_program(), amazon_program(), fallback_program()]
}

pub fn create_test_state(programs: Vec<AffiliateProgram>) -> AppState {
    AppState::new(programs, HISTORY_CAPACITY)
}

/// Full API surface without the outer middleware stack.
pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
}

pub fn create_test_server(programs: Vec<AffiliateProgram>) -> TestServer {
    TestServer::new(create_test_app(create_test_state(programs))).unwrap()
}
