pub mod maintenance_routes;
pub mod service_record_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/maintenance", maintenance_routes::create_maintenance_router())
        .nest(
            "/service-records",
            service_record_routes::create_service_record_router(),
        )
}

/// Health check
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
