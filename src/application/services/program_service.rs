//! Affiliate program management service.

use crate::domain::entities::{AffiliateProgram, NewProgram, ProgramPatch};
use crate::domain::repositories::ProgramRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_id, validate_program_id};
use serde_json::json;
use std::sync::Arc;
use url::Url;

/// Service for managing the operator's affiliate programs.
///
/// Validates program input before it reaches the repository:
/// - ids are URL-safe and unique
/// - tracking parameter names are non-blank and contain no `&`, `=` or `#`
/// - base URLs are absolute HTTP(S) URLs
pub struct ProgramService<R: ProgramRepository> {
    repository: Arc<R>,
}

impl<R: ProgramRepository> ProgramService<R> {
    /// Creates a new program service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all programs in resolution order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_programs(&self) -> Result<Vec<AffiliateProgram>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a program by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the program does not exist.
    pub async fn get_program(&self, id: &str) -> Result<AffiliateProgram, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Program not found", json!({ "id": id })))
    }

    /// Registers a new program.
    ///
    /// Generates an id when none is given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any field is invalid.
    /// Returns [`AppError::Conflict`] if the id is already taken.
    pub async fn create_program(&self, new_program: NewProgram) -> Result<AffiliateProgram, AppError> {
        let id = match new_program.id {
            Some(id) => {
                validate_program_id(&id)?;
                id
            }
            None => generate_id(),
        };

        validate_tracking_param(new_program.tracking_param.as_deref())?;
        validate_base_url(new_program.base_url.as_deref())?;

        let program = AffiliateProgram {
            id,
            merchant: new_program.merchant,
            tracking_param: new_program.tracking_param,
            affiliate_id: new_program.affiliate_id,
            base_url: new_program.base_url,
            active: new_program.active,
            credential: new_program.credential,
            sub_identifier: new_program.sub_identifier,
        };

        let created = self.repository.create(program).await?;
        tracing::info!(id = %created.id, merchant = %created.merchant, "Program created");

        Ok(created)
    }

    /// Partially updates a program.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a patched field is invalid.
    /// Returns [`AppError::NotFound`] if the program does not exist.
    pub async fn update_program(
        &self,
        id: &str,
        patch: ProgramPatch,
    ) -> Result<AffiliateProgram, AppError> {
        if let Some(tracking_param) = &patch.tracking_param {
            validate_tracking_param(tracking_param.as_deref())?;
        }
        if let Some(base_url) = &patch.base_url {
            validate_base_url(base_url.as_deref())?;
        }

        let updated = self.repository.update(id, patch).await?;
        tracing::info!(id = %updated.id, active = updated.active, "Program updated");

        Ok(updated)
    }

    /// Deletes a program.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the program does not exist.
    pub async fn delete_program(&self, id: &str) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found("Program not found", json!({ "id": id })));
        }

        tracing::info!(id = %id, "Program deleted");
        Ok(())
    }

    /// Counts stored programs.
    pub async fn count_programs(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}

fn validate_tracking_param(param: Option<&str>) -> Result<(), AppError> {
    let Some(param) = param else {
        return Ok(());
    };

    if param.trim().is_empty() {
        return Err(AppError::bad_request(
            "Tracking parameter cannot be blank",
            json!({ "tracking_param": param }),
        ));
    }

    if param.contains(['&', '=', '#', '?']) {
        return Err(AppError::bad_request(
            "Tracking parameter cannot contain '&', '=', '#' or '?'",
            json!({ "tracking_param": param }),
        ));
    }

    Ok(())
}

fn validate_base_url(base_url: Option<&str>) -> Result<(), AppError> {
    let Some(base_url) = base_url else {
        return Ok(());
    };

    let parsed = Url::parse(base_url).map_err(|e| {
        AppError::bad_request(
            "Invalid base URL",
            json!({ "base_url": base_url, "reason": e.to_string() }),
        )
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::bad_request(
            "Only HTTP and HTTPS base URLs are allowed",
            json!({ "base_url": base_url }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Merchant;
    use crate::domain::repositories::MockProgramRepository;

    fn new_program(id: Option<&str>) -> NewProgram {
        NewProgram {
            id: id.map(str::to_string),
            merchant: Merchant::Flipkart,
            tracking_param: Some("affid".to_string()),
            affiliate_id: Some("partner42".to_string()),
            base_url: None,
            active: true,
            credential: None,
            sub_identifier: None,
        }
    }

    #[tokio::test]
    async fn test_create_program_with_given_id() {
        let mut mock_repo = MockProgramRepository::new();
        mock_repo
            .expect_create()
            .withf(|program| program.id == "fk-main" && program.merchant == Merchant::Flipkart)
            .times(1)
            .returning(Ok);

        let service = ProgramService::new(Arc::new(mock_repo));

        let created = service.create_program(new_program(Some("fk-main"))).await.unwrap();
        assert_eq!(created.id, "fk-main");
    }

    #[tokio::test]
    async fn test_create_program_generates_id() {
        let mut mock_repo = MockProgramRepository::new();
        mock_repo
            .expect_create()
            .withf(|program| program.id.len() == 12)
            .times(1)
            .returning(Ok);

        let service = ProgramService::new(Arc::new(mock_repo));

        assert!(service.create_program(new_program(None)).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_program_invalid_id() {
        let mut mock_repo = MockProgramRepository::new();
        mock_repo.expect_create().times(0);

        let service = ProgramService::new(Arc::new(mock_repo));

        let result = service.create_program(new_program(Some("bad id"))).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_program_rejects_bad_tracking_param() {
        let mock_repo = MockProgramRepository::new();
        let service = ProgramService::new(Arc::new(mock_repo));

        let mut input = new_program(Some("fk"));
        input.tracking_param = Some("aff=id".to_string());

        let result = service.create_program(input).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_program_rejects_non_http_base_url() {
        let mock_repo = MockProgramRepository::new();
        let service = ProgramService::new(Arc::new(mock_repo));

        let mut input = new_program(Some("cl"));
        input.base_url = Some("ftp://linksredirect.com/".to_string());

        let result = service.create_program(input).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_program_conflict_propagates() {
        let mut mock_repo = MockProgramRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|p| Err(AppError::conflict("Program already exists", json!({ "id": p.id }))));

        let service = ProgramService::new(Arc::new(mock_repo));

        let result = service.create_program(new_program(Some("fk"))).await;
        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_get_program_not_found() {
        let mut mock_repo = MockProgramRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ProgramService::new(Arc::new(mock_repo));

        let result = service.get_program("missing").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_program_validates_before_storage() {
        let mut mock_repo = MockProgramRepository::new();
        mock_repo.expect_update().times(0);

        let service = ProgramService::new(Arc::new(mock_repo));

        let patch = ProgramPatch {
            tracking_param: Some(Some("  ".to_string())),
            ..Default::default()
        };
        let result = service.update_program("fk", patch).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_program_clearing_param_is_allowed() {
        let mut mock_repo = MockProgramRepository::new();
        mock_repo.expect_update().times(1).returning(|id, patch| {
            let mut program = AffiliateProgram::new(id, Merchant::Flipkart, "partner42");
            patch.apply(&mut program);
            Ok(program)
        });

        let service = ProgramService::new(Arc::new(mock_repo));

        let patch = ProgramPatch {
            tracking_param: Some(None),
            ..Default::default()
        };
        let updated = service.update_program("fk", patch).await.unwrap();
        assert!(updated.tracking_param.is_none());
    }

    #[tokio::test]
    async fn test_delete_program_missing() {
        let mut mock_repo = MockProgramRepository::new();
        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = ProgramService::new(Arc::new(mock_repo));

        let result = service.delete_program("missing").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
