//! API models for the Mirrorbox HTTP surface.
//!
//! `GET /mirrors/{identifier}` answers with a [`MirrorsResponse`] on success
//! and an [`ErrorResponse`] otherwise. Both carry a `success` flag so clients
//! can branch on the body alone:
//!
//! ```json
//! {
//!   "success": true,
//!   "mirrors": [
//!     { "name": "Primary Storage", "url": "https://cdn.example.com/tt1234567", "status": "ok" },
//!     { "name": "Secondary Storage", "url": null, "status": "unconfigured" }
//!   ]
//! }
//! ```
//!
//! The `mirrors` array is a preference list: clients offer `ok` entries in
//! order and show `unconfigured` ones as disabled or hide them.

use serde::{Deserialize, Serialize};

use crate::observability::MetricsSnapshot;
use crate::resolver::MirrorList;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MirrorsResponse {
    pub success: bool,
    pub mirrors: MirrorList,
}

impl MirrorsResponse {
    pub fn new(mirrors: MirrorList) -> Self {
        Self {
            success: true,
            mirrors,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackendSummary {
    pub total: usize,
    pub configured: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub backends: BackendSummary,
    pub metrics: MetricsSnapshot,
}
