use thiserror::Error;

use super::types::MirrorList;
use crate::backends::RuleError;

/// Resolution failures. A missing configuration value is not one of them.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("content identifier is empty")]
    EmptyIdentifier,

    #[error("content identifier '{0}' cannot be used as a path segment")]
    MalformedIdentifier(String),

    #[error("backend '{backend}' failed to build a url: {source}")]
    InvalidUrl {
        backend: String,
        #[source]
        source: RuleError,
    },
}

/// Anything that can turn a content identifier into an ordered mirror list.
///
/// Implementations must be deterministic and free of shared mutable state;
/// the HTTP layer calls them concurrently without coordination.
pub trait MirrorSource: Send + Sync {
    fn resolve(&self, identifier: &str) -> Result<MirrorList, ResolveError>;

    /// Number of registered backends
    fn backend_count(&self) -> usize;

    /// Number of backends with every required value configured
    fn configured_count(&self) -> usize;
}
