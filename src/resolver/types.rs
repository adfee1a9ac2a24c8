use serde::{Deserialize, Serialize};

/// Availability of a single mirror
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MirrorStatus {
    /// URL fully constructed from present configuration
    Ok,
    /// A required configuration value is missing or blank; `url` is null
    Unconfigured,
}

/// One candidate retrieval location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMirror {
    pub name: String,
    pub url: Option<String>,
    pub status: MirrorStatus,
}

impl ResolvedMirror {
    pub fn ok(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: Some(url.into()),
            status: MirrorStatus::Ok,
        }
    }

    pub fn unconfigured(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            status: MirrorStatus::Unconfigured,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == MirrorStatus::Ok
    }
}

/// Mirrors in registry (priority) order
pub type MirrorList = Vec<ResolvedMirror>;
