//! In-process implementation of the program repository.

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{AffiliateProgram, ProgramPatch};
use crate::domain::repositories::ProgramRepository;
use crate::error::AppError;

/// Program store backed by a `Vec` behind an async `RwLock`.
///
/// Keeps insertion order so the resolver's first-match rule is stable.
/// Contents live for the lifetime of the process; seed it from a programs
/// file with [`InMemoryProgramRepository::with_programs`].
#[derive(Default)]
pub struct InMemoryProgramRepository {
    programs: RwLock<Vec<AffiliateProgram>>,
}

impl InMemoryProgramRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `programs`.
    ///
    /// Callers are expected to have rejected duplicate ids already
    /// (see [`crate::infrastructure::program_file`]).
    pub fn with_programs(programs: Vec<AffiliateProgram>) -> Self {
        debug!(count = programs.len(), "Seeding program repository");
        Self {
            programs: RwLock::new(programs),
        }
    }
}

#[async_trait]
impl ProgramRepository for InMemoryProgramRepository {
    async fn create(&self, program: AffiliateProgram) -> Result<AffiliateProgram, AppError> {
        let mut programs = self.programs.write().await;

        if programs.iter().any(|p| p.id == program.id) {
            return Err(AppError::conflict(
                "Program already exists",
                json!({ "id": program.id }),
            ));
        }

        programs.push(program.clone());
        Ok(program)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<AffiliateProgram>, AppError> {
        let programs = self.programs.read().await;
        Ok(programs.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<AffiliateProgram>, AppError> {
        Ok(self.programs.read().await.clone())
    }

    async fn update(&self, id: &str, patch: ProgramPatch) -> Result<AffiliateProgram, AppError> {
        let mut programs = self.programs.write().await;

        let program = programs
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found("Program not found", json!({ "id": id })))?;

        patch.apply(program);
        Ok(program.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut programs = self.programs.write().await;
        let before = programs.len();
        programs.retain(|p| p.id != id);
        Ok(programs.len() != before)
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.programs.read().await.len())
    }
}
