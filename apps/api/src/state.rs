use std::sync::Arc;

use crate::config::Config;
use crate::dataset::JobDataset;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup, never mutated.
    pub dataset: Arc<JobDataset>,
    pub config: Config,
}

impl AppState {
    pub fn new(dataset: JobDataset, config: Config) -> Self {
        Self {
            dataset: Arc::new(dataset),
            config,
        }
    }
}
