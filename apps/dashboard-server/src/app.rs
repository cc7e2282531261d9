//! HTTP application assembly and listener binding

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use dashboard_service::api::rest::error::{map_panic, method_not_allowed, ApiError};
use dashboard_service::DashboardServiceModule;
use std::io;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub const API_PREFIX: &str = "/api";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Router with the dashboard API, its OpenAPI document and the outer layers
pub fn build_router(module: &DashboardServiceModule, server: &ServerConfig) -> Result<Router> {
    let api = module.register_rest(Router::new())?;
    let doc: utoipa::openapi::OpenApi = module.openapi();

    let router = Router::new()
        .nest(API_PREFIX, api)
        .route(
            OPENAPI_PATH,
            get(move || {
                let doc = doc.clone();
                async move { Json(doc) }
            }),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(map_panic))
        .layer(cors_layer(&server.frontend_url)?)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

pub fn cors_layer(frontend_url: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(frontend_url)
        .with_context(|| format!("invalid frontend_url '{frontend_url}'"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

async fn not_found() -> ApiError {
    ApiError::not_found("Route not found")
}

/// Bind the configured port, retrying once on the fallback port if taken
pub async fn bind(server: &ServerConfig) -> Result<TcpListener> {
    let host = server.host.as_str();
    match TcpListener::bind((host, server.port)).await {
        Ok(listener) => Ok(listener),
        Err(e) if e.kind() == io::ErrorKind::AddrInUse => {
            tracing::warn!(
                port = server.port,
                fallback_port = server.fallback_port,
                "Port is already in use, trying fallback port"
            );
            TcpListener::bind((host, server.fallback_port))
                .await
                .with_context(|| format!("failed to bind {host}:{}", server.fallback_port))
        }
        Err(e) => Err(e).with_context(|| format!("failed to bind {host}:{}", server.port)),
    }
}
