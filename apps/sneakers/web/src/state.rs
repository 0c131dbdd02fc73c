//! Application state management

use domain_sneakers::{InMemorySneakerRepository, SneakerService};
use tracing::info;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub service: SneakerService<InMemorySneakerRepository>,
}

impl AppState {
    /// Build the catalog, seeded with the sample sneakers unless disabled.
    pub fn new(config: Config) -> Self {
        let repository = if config.catalog.seed_sample_data {
            info!("Seeding catalog with sample sneakers");
            InMemorySneakerRepository::seeded()
        } else {
            InMemorySneakerRepository::new()
        };

        Self {
            service: SneakerService::new(repository),
            config,
        }
    }
}
