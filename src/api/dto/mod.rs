//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod clean;
pub mod detect;
pub mod health;
pub mod history;
pub mod program;
pub mod resolve;
