//! Rutas HTTP

use std::time::Duration;

use axum::{middleware::map_response, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::middleware::{cors_middleware, timeout_envelope};
use crate::state::AppState;

pub mod car_routes;

/// Rutas sin capas, listas para `with_state`
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(car_routes::create_car_router())
}

/// Aplicación completa: rutas + trazas, timeout (con cuerpo `{"message"}`),
/// compresión y CORS
pub fn create_app(state: AppState, cors_origins: &[String], timeout: Duration) -> Router {
    create_router()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(map_response(timeout_envelope))
        .layer(CompressionLayer::new())
        .layer(cors_middleware(cors_origins))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
