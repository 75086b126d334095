use std::sync::Arc;

use axum::{extract::State, routing, Json, Router};
use chrono::{DateTime, Utc};
use relay_core_health_contracts::HealthService;
use serde::Serialize;

pub const SERVICE_NAME: &str = "Landing Page Contact API";

pub fn router(service: Arc<impl HealthService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
    uptime: f64,
    service: &'static str,
}

async fn health(service: State<Arc<impl HealthService>>) -> Json<HealthResponse> {
    let status = service.status().await;
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now(),
        uptime: status.uptime.as_secs_f64(),
        service: SERVICE_NAME,
    })
}
