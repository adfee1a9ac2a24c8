//! Logging setup and in-process counters

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber, filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Metrics handle for recording request outcomes
#[derive(Debug, Default)]
pub struct Metrics {
    resolutions_served: AtomicU64,
    identifiers_rejected: AtomicU64,
    resolution_failures: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolution_served(&self) {
        self.resolutions_served.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "resolutions_served", "Metric incremented");
    }

    pub fn identifier_rejected(&self) {
        self.identifiers_rejected.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "identifiers_rejected", "Metric incremented");
    }

    pub fn resolution_failed(&self) {
        self.resolution_failures.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "resolution_failures", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            resolutions_served: self.resolutions_served.load(Ordering::Relaxed),
            identifiers_rejected: self.identifiers_rejected.load(Ordering::Relaxed),
            resolution_failures: self.resolution_failures.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub resolutions_served: u64,
    pub identifiers_rejected: u64,
    pub resolution_failures: u64,
}
