use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::backends::ConfigKey;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub backends: BackendsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

/// Base paths for backends whose URL rule needs runtime configuration.
///
/// Every field is optional: an absent or blank value leaves the matching
/// backend `unconfigured` instead of failing startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BackendsConfig {
    /// Object storage base path of the primary provider
    pub primary_storage_base: Option<String>,
    /// Object storage base path of the secondary provider
    pub secondary_storage_base: Option<String>,
    /// Base URL of the backup host
    pub backup_host_base: Option<String>,
}

impl BackendsConfig {
    /// Look up a configuration value; blank values count as missing
    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        let value = match key {
            ConfigKey::PrimaryStorageBase => &self.primary_storage_base,
            ConfigKey::SecondaryStorageBase => &self.secondary_storage_base,
            ConfigKey::BackupHostBase => &self.backup_host_base,
        };

        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn is_set(&self, key: ConfigKey) -> bool {
        self.get(key).is_some()
    }
}
