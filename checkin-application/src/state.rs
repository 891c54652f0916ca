use std::sync::Arc;

use checkin_domain::IntegrityConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: IntegrityConfig,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: IntegrityConfig) -> Self {
        Self {
            config,
            metrics: Arc::new(Metrics::default()),
        }
    }
}
