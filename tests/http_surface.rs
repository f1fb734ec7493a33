//! HTTP Surface Tests
//!
//! Exercise the combined router without a reachable store. The welcome
//! route and every validation rejection must resolve before any
//! connection is acquired, so none of these tests need a database.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use nagga_api::config::{HttpConfig, StoreConfig};
use nagga_api::http_server::{ApiState, HttpServer};
use nagga_api::store::StorePool;

// =============================================================================
// Helper Functions
// =============================================================================

fn test_router() -> axum::Router {
    // The pool opens connections lazily; handlers that reject input
    // before store access never touch it.
    let pool = StorePool::connect(&StoreConfig::default()).unwrap();
    let state = Arc::new(ApiState::new(pool));
    HttpServer::with_config(HttpConfig::default(), state).router()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Welcome Route
// =============================================================================

#[tokio::test]
async fn test_root_returns_welcome_message() {
    let response = test_router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let value = body_json(response).await;
    assert_eq!(value["message"], "Bienvenido a la API de NAGGA");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/inventario/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Validation Rejections (before store access)
// =============================================================================

#[tokio::test]
async fn test_malformed_email_is_rejected_with_detail() {
    let response = test_router()
        .oneshot(post_json(
            "/clientes/",
            r#"{"nombre": "Ana", "email": "no-es-un-correo"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let value = body_json(response).await;
    let detail = value["detail"].as_str().unwrap();
    assert!(detail.contains("email"), "unexpected detail: {detail}");
}

#[tokio::test]
async fn test_empty_nombre_is_rejected() {
    let response = test_router()
        .oneshot(post_json("/sedes/", r#"{"nombre": "   "}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_non_numeric_precio_is_rejected() {
    let response = test_router()
        .oneshot(post_json(
            "/productos/",
            r#"{"nombre": "Teclado", "precio": "caro"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_missing_required_field_is_rejected() {
    let response = test_router()
        .oneshot(post_json("/clientes/", r#"{"nombre": "Ana"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_bulk_with_one_invalid_element_is_rejected() {
    // The invalid second element must fail the whole batch before any
    // row is written.
    let body = r#"[
        {"nombre": "Ana", "email": "ana@example.com"},
        {"nombre": "Luis", "email": "sin-arroba"}
    ]"#;
    let response = test_router()
        .oneshot(post_json("/clientes/bulk/", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_fecha_registro_is_rejected() {
    let response = test_router()
        .oneshot(post_json(
            "/clientes/",
            r#"{"nombre": "Ana", "email": "ana@example.com", "fecha_registro": "ayer"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
