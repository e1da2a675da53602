//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Random identifier generation and program id validation

pub mod code_generator;
