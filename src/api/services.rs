use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, error};

use super::{
    models::{BackendSummary, HealthResponse, MirrorsResponse},
    state::AppState,
    validation::{ContentId, IdentifierError},
};
use crate::api::error::ApiError;

/// Mirror lookup endpoint (GET /mirrors/{identifier})
///
/// ## Flow:
/// 1. Parse the path segment into a [`ContentId`] (400 on failure)
/// 2. Resolve it against every registered backend, in priority order
/// 3. Return 200 with the ordered mirror list
///
/// Resolver failures are logged here with full detail and answered with a
/// generic 500 body. Backends missing configuration are not failures; they
/// come back as `unconfigured` entries.
pub async fn get_mirrors(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let raw = match path {
        Ok(Path(raw)) => raw,
        Err(rejection) => {
            return Err(reject(
                &state,
                IdentifierError::Malformed(rejection.body_text()),
            ));
        }
    };

    let id = ContentId::parse(&raw).map_err(|err| reject(&state, err))?;

    let mirrors = state.mirrors.resolve(id.as_str()).map_err(|err| {
        state.metrics.resolution_failed();
        error!(identifier = %id, error = ?err, "Mirror resolution failed");
        ApiError::from(err)
    })?;

    state.metrics.resolution_served();
    debug!(
        identifier = %id,
        available = mirrors.iter().filter(|m| m.is_ok()).count(),
        total = mirrors.len(),
        "Mirrors resolved"
    );

    Ok((StatusCode::OK, Json(MirrorsResponse::new(mirrors))))
}

/// GET /mirrors and GET /mirrors/ carry no identifier at all
pub async fn missing_identifier(State(state): State<AppState>) -> ApiError {
    reject(&state, IdentifierError::Empty)
}

/// Client errors are counted but not logged as server faults
fn reject(state: &AppState, err: IdentifierError) -> ApiError {
    state.metrics.identifier_rejected();
    debug!(reason = %err, "Rejected content identifier");
    ApiError::from(err)
}

/// Health check endpoint (GET /health)
///
/// Reports how many backends are registered and how many have their
/// configuration in place, plus request counters. Unconfigured backends do
/// not make the service unhealthy.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backends: BackendSummary {
            total: state.mirrors.backend_count(),
            configured: state.mirrors.configured_count(),
        },
        metrics: state.metrics.snapshot(),
    };

    (StatusCode::OK, Json(response))
}
