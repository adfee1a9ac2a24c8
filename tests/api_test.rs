use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

use mirrorbox::api::models::{ErrorResponse, MirrorsResponse};
use mirrorbox::api::state::AppState;
use mirrorbox::backends::{ConfigKey, RuleError};
use mirrorbox::config::Config;
use mirrorbox::resolver::{MirrorList, MirrorSource, MirrorStatus, ResolveError};

/// Only the primary object storage is configured; the cloud drive needs no
/// configuration, secondary storage and the backup host stay unconfigured.
fn create_test_config() -> Config {
    let config_toml = r#"
[server]
bind_addr = "127.0.0.1:8080"

[backends]
primary_storage_base = "https://primary.example.com/media"
secondary_storage_base = ""
    "#;

    toml::from_str(config_toml).expect("Failed to parse test config")
}

fn build_test_app(config: Config) -> Router {
    mirrorbox::api::router(AppState::new(&config))
}

/// A mirror source with a defective rule
struct FaultySource;

impl MirrorSource for FaultySource {
    fn resolve(&self, _identifier: &str) -> Result<MirrorList, ResolveError> {
        Err(ResolveError::InvalidUrl {
            backend: "Primary Storage".to_string(),
            source: RuleError::MissingValue(ConfigKey::PrimaryStorageBase),
        })
    }

    fn backend_count(&self) -> usize {
        1
    }

    fn configured_count(&self) -> usize {
        0
    }
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_get_mirrors_success() {
    let app = build_test_app(create_test_config());

    let response = app.oneshot(get_request("/mirrors/tt1234567")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: MirrorsResponse = serde_json::from_value(body_json(response).await).unwrap();
    assert!(body.success);
    assert_eq!(body.mirrors.len(), 4);

    let first = &body.mirrors[0];
    assert_eq!(first.status, MirrorStatus::Ok);
    assert!(first.url.as_deref().unwrap().contains("tt1234567"));
}

#[tokio::test]
async fn test_get_mirrors_reports_unconfigured_backends() {
    let app = build_test_app(create_test_config());

    let response = app.oneshot(get_request("/mirrors/tt1234567")).await.unwrap();
    let body = body_json(response).await;

    assert_eq!(
        body,
        json!({
            "success": true,
            "mirrors": [
                {"name": "Primary Storage", "url": "https://primary.example.com/media/tt1234567", "status": "ok"},
                {"name": "Secondary Storage", "url": null, "status": "unconfigured"},
                {"name": "Cloud Drive", "url": "https://drive.mirrorbox.app/d/tt1234567", "status": "ok"},
                {"name": "Backup Host", "url": null, "status": "unconfigured"}
            ]
        })
    );
}

#[tokio::test]
async fn test_get_mirrors_without_any_configuration() {
    let app = build_test_app(Config::default());

    let response = app.oneshot(get_request("/mirrors/tt1234567")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: MirrorsResponse = serde_json::from_value(body_json(response).await).unwrap();
    let ok = body.mirrors.iter().filter(|m| m.status == MirrorStatus::Ok).count();
    let unconfigured = body
        .mirrors
        .iter()
        .filter(|m| m.status == MirrorStatus::Unconfigured)
        .count();

    assert_eq!(body.mirrors.len(), 4);
    assert_eq!(ok, 1);
    assert_eq!(unconfigured, 3);
    assert_eq!(body.mirrors[2].name, "Cloud Drive");
    assert_eq!(body.mirrors[2].status, MirrorStatus::Ok);
}

#[tokio::test]
async fn test_empty_identifier_rejected() {
    for uri in ["/mirrors/", "/mirrors"] {
        let app = build_test_app(create_test_config());

        let response = app.oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");

        let body: ErrorResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert!(!body.success);
        assert!(!body.message.is_empty());
    }
}

#[tokio::test]
async fn test_invalid_identifier_rejected() {
    let long = format!("/mirrors/{}", "t".repeat(65));
    for uri in ["/mirrors/tt%20123", "/mirrors/..", "/mirrors/tt123%3Bdrop", long.as_str()] {
        let app = build_test_app(create_test_config());

        let response = app.oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(false));
        assert!(body["message"].is_string());
    }
}

#[tokio::test]
async fn test_internal_fault_returns_generic_500() {
    let state = AppState::with_source(Arc::new(FaultySource));
    let app = mirrorbox::api::router(state);

    let response = app.oneshot(get_request("/mirrors/tt1234567")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();

    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&text).unwrap(),
        json!({"success": false, "message": "Failed to load mirrors"})
    );
    assert!(!text.contains("Primary Storage"));
    assert!(!text.contains("primary_storage_base"));
}

#[tokio::test]
async fn test_defective_base_path_returns_500() {
    // Bypasses load-time validation, which would reject this base
    let mut config = create_test_config();
    config.backends.backup_host_base = Some("backup-host/files".to_string());
    let app = build_test_app(config);

    let response = app.oneshot(get_request("/mirrors/tt1234567")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({"success": false, "message": "Failed to load mirrors"})
    );
}

#[tokio::test]
async fn test_concurrent_requests_have_no_cross_talk() {
    let app = build_test_app(create_test_config());

    let handles: Vec<_> = (0..100)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let id = format!("tt{:07}", i);
                let response = app
                    .oneshot(get_request(&format!("/mirrors/{id}")))
                    .await
                    .unwrap();
                assert_eq!(response.status(), StatusCode::OK);
                let body: MirrorsResponse =
                    serde_json::from_value(body_json(response).await).unwrap();
                (id, body)
            })
        })
        .collect();

    for handle in handles {
        let (id, body) = handle.await.unwrap();
        assert_eq!(body.mirrors.len(), 4);
        for mirror in body.mirrors {
            if let Some(url) = mirror.url {
                assert!(url.ends_with(&id), "{url} does not end with {id}");
            }
        }
    }
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = build_test_app(create_test_config());

    let response = ServiceExt::<Request<Body>>::oneshot(app.clone(), get_request("/mirrors/tt1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = ServiceExt::<Request<Body>>::oneshot(app.clone(), get_request("/mirrors/"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health = body_json(response).await;
    assert_eq!(health["status"], json!("healthy"));
    assert!(health.get("version").is_some());
    assert_eq!(health["backends"], json!({"total": 4, "configured": 2}));
    assert_eq!(health["metrics"]["resolutions_served"], json!(1));
    assert_eq!(health["metrics"]["identifiers_rejected"], json!(1));
    assert_eq!(health["metrics"]["resolution_failures"], json!(0));
}
