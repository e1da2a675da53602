//! DTOs for URL cleanup.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CleanRequest {
    #[validate(length(min = 1, max = 4096))]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct CleanResponse {
    pub url: String,
    pub cleaned: String,
    pub changed: bool,
}
