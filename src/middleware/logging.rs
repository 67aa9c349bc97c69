//! Middleware de logging de requests
//!
//! Registra método, path, status y duración de cada request atendido.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// Middleware de timing por request
pub async fn timing_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();
    info!(
        "📡 {} {} -> {} ({}ms)",
        method,
        path,
        response.status().as_u16(),
        duration_ms
    );

    response
}
