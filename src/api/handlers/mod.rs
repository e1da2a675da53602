//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod clean;
pub mod detect;
pub mod health;
pub mod history;
pub mod programs;
pub mod resolve;

pub use clean::clean_handler;
pub use detect::detect_handler;
pub use health::health_handler;
pub use history::{
    clear_history_handler, delete_history_entry_handler, history_list_handler,
    history_summary_handler,
};
pub use programs::{
    create_program_handler, delete_program_handler, get_program_handler, program_list_handler,
    update_program_handler,
};
pub use resolve::resolve_handler;
