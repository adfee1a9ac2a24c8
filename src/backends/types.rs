use std::fmt;
use thiserror::Error;
use url::Url;

use crate::config::BackendsConfig;

/// Named configuration values a backend URL rule may depend on.
///
/// Each key maps to one field of the `[backends]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConfigKey {
    PrimaryStorageBase,
    SecondaryStorageBase,
    BackupHostBase,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [
        ConfigKey::PrimaryStorageBase,
        ConfigKey::SecondaryStorageBase,
        ConfigKey::BackupHostBase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::PrimaryStorageBase => "primary_storage_base",
            ConfigKey::SecondaryStorageBase => "secondary_storage_base",
            ConfigKey::BackupHostBase => "backup_host_base",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by a URL rule
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("configuration value '{0}' is not set")]
    MissingValue(ConfigKey),

    #[error("base url '{url}' does not parse: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("base url '{0}' cannot carry path segments")]
    CannotBeABase(String),

    #[error("identifier '{0}' is a dot segment and cannot be addressed")]
    DotSegment(String),
}

/// Backend kinds, one variant per URL construction rule.
///
/// Every rule appends the identifier as a single percent-encoded path
/// segment, so `/`, `?` and `#` in an identifier never leave the path.
/// Adding a backend kind means adding a variant here and its arm in
/// [`BackendKind::build_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendKind {
    /// Object storage bucket exposed under a configured base path: `{base}/{id}`
    ObjectStorage { base: ConfigKey },
    /// Fixed public download location, no configuration: `{base}/{id}`
    PublicLink { base: &'static str },
    /// Backup host mirroring content under `{base}/backup/{id}`
    BackupHost { base: ConfigKey },
}

impl BackendKind {
    /// Configuration keys this rule reads
    pub fn required_keys(&self) -> Vec<ConfigKey> {
        match self {
            BackendKind::ObjectStorage { base } | BackendKind::BackupHost { base } => {
                vec![*base]
            }
            BackendKind::PublicLink { .. } => Vec::new(),
        }
    }

    /// Build the retrieval URL for `id`.
    ///
    /// Callers are expected to check [`required_keys`](Self::required_keys)
    /// first; a missing value here still yields [`RuleError::MissingValue`]
    /// rather than a URL with a hole in it.
    pub fn build_url(&self, id: &str, config: &BackendsConfig) -> Result<Url, RuleError> {
        // the url crate drops "." and ".." segments on push
        if matches!(id, "." | "..") {
            return Err(RuleError::DotSegment(id.to_string()));
        }

        match self {
            BackendKind::ObjectStorage { base } => {
                join_segments(configured_base(config, *base)?, &[id])
            }
            BackendKind::PublicLink { base } => join_segments(base, &[id]),
            BackendKind::BackupHost { base } => {
                join_segments(configured_base(config, *base)?, &["backup", id])
            }
        }
    }
}

fn configured_base(config: &BackendsConfig, key: ConfigKey) -> Result<&str, RuleError> {
    config.get(key).ok_or(RuleError::MissingValue(key))
}

fn join_segments(base: &str, segments: &[&str]) -> Result<Url, RuleError> {
    let mut url = Url::parse(base).map_err(|source| RuleError::InvalidUrl {
        url: base.to_string(),
        source,
    })?;

    url.path_segments_mut()
        .map_err(|()| RuleError::CannotBeABase(base.to_string()))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// One registered backend: a unique label plus its URL rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendDescriptor {
    name: String,
    kind: BackendKind,
}

impl BackendDescriptor {
    pub fn new(name: impl Into<String>, kind: BackendKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required_keys(&self) -> Vec<ConfigKey> {
        self.kind.required_keys()
    }

    pub fn url_for(&self, id: &str, config: &BackendsConfig) -> Result<Url, RuleError> {
        self.kind.build_url(id, config)
    }
}
