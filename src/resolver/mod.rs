//! Mirror resolution
//!
//! [`MirrorResolver`] walks the [`BackendRegistry`] in order and produces one
//! [`ResolvedMirror`] per backend. Backends whose configuration is missing
//! are still listed, as `unconfigured` with a null URL, so callers can show
//! them as unavailable instead of losing the row.
//!
//! Resolution is pure: no I/O, no reachability checks, no mutable state.

mod traits;
mod types;

pub use traits::{MirrorSource, ResolveError};
pub use types::{MirrorList, MirrorStatus, ResolvedMirror};

use std::sync::Arc;
use tracing::debug;

use crate::backends::BackendRegistry;
use crate::config::{BackendsConfig, Config};

/// Resolves identifiers against a fixed registry and configuration snapshot
#[derive(Debug, Clone)]
pub struct MirrorResolver {
    registry: Arc<BackendRegistry>,
    config: Arc<BackendsConfig>,
}

impl MirrorResolver {
    pub fn new(registry: BackendRegistry, config: BackendsConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
        }
    }

    /// Standard registry with the `[backends]` section of `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(BackendRegistry::standard(), config.backends.clone())
    }

    pub fn registry(&self) -> &BackendRegistry {
        &self.registry
    }

    /// Resolve `identifier` into one entry per registered backend.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::EmptyIdentifier`] for an empty identifier
    /// - [`ResolveError::MalformedIdentifier`] for `.` and `..`, which no
    ///   URL can carry as a path segment
    /// - [`ResolveError::InvalidUrl`] when a backend rule builds an
    ///   unparseable URL (a configuration defect, never a request defect)
    pub fn resolve(&self, identifier: &str) -> Result<MirrorList, ResolveError> {
        if identifier.is_empty() {
            return Err(ResolveError::EmptyIdentifier);
        }

        if matches!(identifier, "." | "..") {
            return Err(ResolveError::MalformedIdentifier(identifier.to_string()));
        }

        let mut mirrors = Vec::with_capacity(self.registry.len());

        for backend in self.registry.iter() {
            let missing: Vec<_> = backend
                .required_keys()
                .into_iter()
                .filter(|key| !self.config.is_set(*key))
                .collect();

            if !missing.is_empty() {
                debug!(
                    backend = backend.name(),
                    ?missing,
                    "Backend unconfigured"
                );
                mirrors.push(ResolvedMirror::unconfigured(backend.name()));
                continue;
            }

            let url = backend.url_for(identifier, &self.config).map_err(|source| {
                ResolveError::InvalidUrl {
                    backend: backend.name().to_string(),
                    source,
                }
            })?;

            mirrors.push(ResolvedMirror::ok(backend.name(), url.as_str()));
        }

        Ok(mirrors)
    }

    pub fn configured_count(&self) -> usize {
        self.registry
            .iter()
            .filter(|backend| {
                backend
                    .required_keys()
                    .into_iter()
                    .all(|key| self.config.is_set(key))
            })
            .count()
    }
}

impl MirrorSource for MirrorResolver {
    fn resolve(&self, identifier: &str) -> Result<MirrorList, ResolveError> {
        MirrorResolver::resolve(self, identifier)
    }

    fn backend_count(&self) -> usize {
        self.registry.len()
    }

    fn configured_count(&self) -> usize {
        MirrorResolver::configured_count(self)
    }
}
