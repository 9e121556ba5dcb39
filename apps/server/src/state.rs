//! Shared application state

use crate::{
    config::Config,
    db::{InMemoryMiddleware, SeedData},
    services::{
        GermplasmListService, LocationService, OntologyService, ProgramService, RoleService,
        StudyInstanceService, StudyTransactionsService,
    },
    Result,
};
use breeding_validator::MeasurementValidator;
use std::sync::Arc;

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub programs: Arc<dyn ProgramService>,
    pub locations: Arc<dyn LocationService>,
    pub roles: Arc<dyn RoleService>,
    pub germplasm_lists: Arc<dyn GermplasmListService>,
    pub study_instances: Arc<dyn StudyInstanceService>,
    pub study_transactions: Arc<dyn StudyTransactionsService>,
    pub ontology: Arc<dyn OntologyService>,
    pub measurement_validator: Arc<MeasurementValidator>,
}

impl AppState {
    /// Initialize the application state, seeding the middleware from the
    /// configured fixture when one is set.
    pub fn new(config: Config) -> Result<Self> {
        let middleware = match &config.middleware.seed_file {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading middleware seed file");
                InMemoryMiddleware::from_seed(SeedData::from_file(path)?)?
            }
            None => {
                tracing::warn!("No middleware seed file configured, starting with empty tables");
                InMemoryMiddleware::new()
            }
        };

        Ok(Self::with_middleware(config, Arc::new(middleware)))
    }

    /// Wire every service to the same middleware instance.
    pub fn with_middleware(config: Config, middleware: Arc<InMemoryMiddleware>) -> Self {
        let measurement_validator = Arc::new(MeasurementValidator::new(&config.validation));

        Self {
            config: Arc::new(config),
            programs: middleware.clone(),
            locations: middleware.clone(),
            roles: middleware.clone(),
            germplasm_lists: middleware.clone(),
            study_instances: middleware.clone(),
            study_transactions: middleware.clone(),
            ontology: middleware,
            measurement_validator,
        }
    }
}
