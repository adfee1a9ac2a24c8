use std::collections::HashSet;
use thiserror::Error;

use super::types::{BackendDescriptor, BackendKind, ConfigKey};

/// Public download location of the cloud-drive backend
pub const CLOUD_DRIVE_BASE: &str = "https://drive.mirrorbox.app/d";

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("backend name registered twice: {0}")]
    DuplicateName(String),
}

/// Ordered set of backends; iteration order is priority order.
#[derive(Debug, Clone)]
pub struct BackendRegistry {
    backends: Vec<BackendDescriptor>,
}

impl BackendRegistry {
    /// Build a registry from descriptors in priority order
    pub fn new(backends: Vec<BackendDescriptor>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for backend in &backends {
            if !seen.insert(backend.name()) {
                return Err(RegistryError::DuplicateName(backend.name().to_string()));
            }
        }

        Ok(Self { backends })
    }

    /// The production backend set: object storage first, backup host last
    pub fn standard() -> Self {
        Self {
            backends: vec![
                BackendDescriptor::new(
                    "Primary Storage",
                    BackendKind::ObjectStorage {
                        base: ConfigKey::PrimaryStorageBase,
                    },
                ),
                BackendDescriptor::new(
                    "Secondary Storage",
                    BackendKind::ObjectStorage {
                        base: ConfigKey::SecondaryStorageBase,
                    },
                ),
                BackendDescriptor::new(
                    "Cloud Drive",
                    BackendKind::PublicLink {
                        base: CLOUD_DRIVE_BASE,
                    },
                ),
                BackendDescriptor::new(
                    "Backup Host",
                    BackendKind::BackupHost {
                        base: ConfigKey::BackupHostBase,
                    },
                ),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &BackendDescriptor> {
        self.backends.iter()
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.backends.iter().map(BackendDescriptor::name).collect()
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
