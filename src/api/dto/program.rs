//! DTOs for affiliate program management.

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use validator::Validate;

use crate::domain::entities::{AffiliateProgram, Merchant, NewProgram, ProgramPatch};

/// Request body for `POST /api/programs`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProgramRequest {
    /// Generated when absent.
    pub id: Option<String>,
    pub merchant: Merchant,
    #[validate(length(min = 1, max = 64))]
    pub tracking_param: Option<String>,
    #[validate(length(min = 1, max = 256))]
    pub affiliate_id: Option<String>,
    #[validate(url(message = "Invalid base URL"))]
    pub base_url: Option<String>,
    /// Defaults to `true`.
    pub active: Option<bool>,
    pub credential: Option<String>,
    #[validate(length(min = 1, max = 256))]
    pub sub_identifier: Option<String>,
}

impl From<CreateProgramRequest> for NewProgram {
    fn from(req: CreateProgramRequest) -> Self {
        NewProgram {
            id: req.id,
            merchant: req.merchant,
            tracking_param: req.tracking_param,
            affiliate_id: req.affiliate_id,
            base_url: req.base_url,
            active: req.active.unwrap_or(true),
            credential: req.credential,
            sub_identifier: req.sub_identifier,
        }
    }
}

/// Request body for `PATCH /api/programs/{id}`.
///
/// All fields are optional. For nullable fields: absent leaves the value
/// unchanged, `null` clears it, a value sets it.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct UpdateProgramRequest {
    pub merchant: Option<Merchant>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub tracking_param: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub affiliate_id: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub base_url: Option<Option<String>>,

    pub active: Option<bool>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub credential: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub sub_identifier: Option<Option<String>>,
}

impl From<UpdateProgramRequest> for ProgramPatch {
    fn from(req: UpdateProgramRequest) -> Self {
        ProgramPatch {
            merchant: req.merchant,
            tracking_param: req.tracking_param,
            affiliate_id: req.affiliate_id,
            base_url: req.base_url,
            active: req.active,
            credential: req.credential,
            sub_identifier: req.sub_identifier,
        }
    }
}

/// Program as exposed over the API. The credential is reduced to a flag.
#[derive(Debug, Serialize)]
pub struct ProgramItem {
    pub id: String,
    pub merchant: Merchant,
    pub tracking_param: Option<String>,
    pub affiliate_id: Option<String>,
    pub base_url: Option<String>,
    pub active: bool,
    pub has_credential: bool,
    pub sub_identifier: Option<String>,
}

impl From<AffiliateProgram> for ProgramItem {
    fn from(p: AffiliateProgram) -> Self {
        let has_credential = p.has_credential();
        ProgramItem {
            id: p.id,
            merchant: p.merchant,
            tracking_param: p.tracking_param,
            affiliate_id: p.affiliate_id,
            base_url: p.base_url,
            active: p.active,
            has_credential,
            sub_identifier: p.sub_identifier,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProgramListResponse {
    pub items: Vec<ProgramItem>,
}
