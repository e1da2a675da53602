//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{HistoryService, ProgramService, ResolverService};
use crate::domain::entities::AffiliateProgram;
use crate::infrastructure::persistence::{InMemoryHistoryRepository, InMemoryProgramRepository};

pub type AppResolverService = ResolverService<InMemoryProgramRepository, InMemoryHistoryRepository>;
pub type AppProgramService = ProgramService<InMemoryProgramRepository>;
pub type AppHistoryService = HistoryService<InMemoryHistoryRepository>;

#[derive(Clone)]
pub struct AppState {
    pub resolver_service: Arc<AppResolverService>,
    pub program_service: Arc<AppProgramService>,
    pub history_service: Arc<AppHistoryService>,
}

impl AppState {
    /// Wires services over in-memory repositories seeded with `programs`.
    pub fn new(programs: Vec<AffiliateProgram>, history_capacity: usize) -> Self {
        let program_repository = Arc::new(InMemoryProgramRepository::with_programs(programs));
        let history_repository = Arc::new(InMemoryHistoryRepository::new(history_capacity));

        Self {
            resolver_service: Arc::new(ResolverService::new(
                program_repository.clone(),
                history_repository.clone(),
            )),
            program_service: Arc::new(ProgramService::new(program_repository)),
            history_service: Arc::new(HistoryService::new(history_repository)),
        }
    }
}
