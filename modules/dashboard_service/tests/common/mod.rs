//! Common test utilities: seeded services and an in-process HTTP client

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use dashboard_service::config::Config;
use dashboard_service::DashboardServiceModule;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SEED: u64 = 20240915;

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}

/// Initialized module with deterministic mock data
pub fn seeded_module() -> DashboardServiceModule {
    let module = DashboardServiceModule::default();
    module
        .init(Config {
            mock_seed: Some(TEST_SEED),
        })
        .unwrap();
    module
}

/// Module routes mounted under `/api`, as the server does
pub fn api_router(module: &DashboardServiceModule) -> Router {
    Router::new().nest("/api", module.register_rest(Router::new()).unwrap())
}

/// Send a request through the router and decode the JSON response
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(raw) => {
            builder = builder.header("content-type", "application/json");
            Body::from(raw.to_string())
        }
        None => Body::empty(),
    };
    let response = router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Method::GET, uri, None).await
}
