use std::sync::Arc;

use crate::config::Config;
use crate::observability::Metrics;
use crate::resolver::{MirrorResolver, MirrorSource};

#[derive(Clone)]
pub struct AppState {
    pub mirrors: Arc<dyn MirrorSource>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// State backed by the standard backend registry
    pub fn new(config: &Config) -> Self {
        Self::with_source(Arc::new(MirrorResolver::from_config(config)))
    }

    /// State backed by an arbitrary mirror source
    pub fn with_source(mirrors: Arc<dyn MirrorSource>) -> Self {
        Self {
            mirrors,
            metrics: Arc::new(Metrics::new()),
        }
    }
}
