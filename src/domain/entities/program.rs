//! Affiliate program entity supplied by the operator.

use serde::{Deserialize, Serialize};

use super::Merchant;

/// Configuration mapping a merchant to the operator's affiliate identifiers.
///
/// Programs are owned by the caller; the resolver only reads them. Several
/// programs may exist for the same merchant, in which case the first active
/// one in list order wins.
///
/// `credential` is a provider API secret and never appears in a URL.
/// `sub_identifier` is the secondary tracking key appended to fallback
/// redirects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliateProgram {
    pub id: String,
    pub merchant: Merchant,
    #[serde(default)]
    pub tracking_param: Option<String>,
    #[serde(default)]
    pub affiliate_id: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, skip_serializing)]
    pub credential: Option<String>,
    #[serde(default)]
    pub sub_identifier: Option<String>,
}

fn default_active() -> bool {
    true
}

impl AffiliateProgram {
    /// Creates an active program with only the required fields set.
    pub fn new(id: impl Into<String>, merchant: Merchant, affiliate_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            merchant,
            tracking_param: None,
            affiliate_id: Some(affiliate_id.into()),
            base_url: None,
            active: true,
            credential: None,
            sub_identifier: None,
        }
    }

    /// Returns the affiliate identifier if it is set and non-blank.
    pub fn affiliate_id(&self) -> Option<&str> {
        non_blank(self.affiliate_id.as_deref())
    }

    /// Returns the tracking parameter override if it is set and non-blank.
    pub fn tracking_param(&self) -> Option<&str> {
        non_blank(self.tracking_param.as_deref())
    }

    /// Returns the fallback sub-identifier if it is set and non-blank.
    pub fn sub_identifier(&self) -> Option<&str> {
        non_blank(self.sub_identifier.as_deref())
    }

    pub fn has_credential(&self) -> bool {
        non_blank(self.credential.as_deref()).is_some()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Input data for registering a program.
///
/// When `id` is `None` an identifier is generated.
#[derive(Debug, Clone)]
pub struct NewProgram {
    pub id: Option<String>,
    pub merchant: Merchant,
    pub tracking_param: Option<String>,
    pub affiliate_id: Option<String>,
    pub base_url: Option<String>,
    pub active: bool,
    pub credential: Option<String>,
    pub sub_identifier: Option<String>,
}

/// Partial update for an existing program.
///
/// `None` fields are left unchanged. For nullable fields `Some(None)` clears
/// the value and `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default)]
pub struct ProgramPatch {
    pub merchant: Option<Merchant>,
    pub tracking_param: Option<Option<String>>,
    pub affiliate_id: Option<Option<String>>,
    pub base_url: Option<Option<String>>,
    pub active: Option<bool>,
    pub credential: Option<Option<String>>,
    pub sub_identifier: Option<Option<String>>,
}

impl ProgramPatch {
    /// Applies the patch to `program` in place.
    pub fn apply(self, program: &mut AffiliateProgram) {
        if let Some(merchant) = self.merchant {
            program.merchant = merchant;
        }
        if let Some(tracking_param) = self.tracking_param {
            program.tracking_param = tracking_param;
        }
        if let Some(affiliate_id) = self.affiliate_id {
            program.affiliate_id = affiliate_id;
        }
        if let Some(base_url) = self.base_url {
            program.base_url = base_url;
        }
        if let Some(active) = self.active {
            program.active = active;
        }
        if let Some(credential) = self.credential {
            program.credential = credential;
        }
        if let Some(sub_identifier) = self.sub_identifier {
            program.sub_identifier = sub_identifier;
        }
    }
}
