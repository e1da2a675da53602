//! Identifier generation and validation for programs and history entries.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Length of random bytes before base64 encoding.
const ID_LENGTH_BYTES: usize = 9;

/// Generates a random URL-safe identifier.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character id.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Validates a caller-provided program id.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, hyphens, underscores
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_program_id(id: &str) -> Result<(), AppError> {
    if id.is_empty() || id.len() > 64 {
        return Err(AppError::bad_request(
            "Program id must be 1-64 characters",
            json!({ "provided_length": id.len() }),
        ));
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Program id can only contain letters, digits, hyphens, and underscores",
            json!({ "id": id }),
        ));
    }

    Ok(())
}
