//! Business logic services for the application layer.

pub mod history_service;
pub mod program_service;
pub mod resolver_service;

pub use history_service::HistoryService;
pub use program_service::ProgramService;
pub use resolver_service::ResolverService;
