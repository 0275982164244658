use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

use crate::advisor::gemini;
use crate::config;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// `configured`, `missing_key` or `disabled`.
    pub ai_advisor: String,
    pub uptime_seconds: u64,
    pub version: String,
}

fn advisor_status() -> &'static str {
    if !config::feature_flags().ai_advisor {
        "disabled"
    } else if gemini::api_key_configured() {
        "configured"
    } else {
        "missing_key"
    }
}

/// Health check handler.
pub async fn health_check() -> Json<HealthResponse> {
    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        ai_advisor: advisor_status().to_string(),
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn health_router() -> Router {
    Router::new().route("/health", get(health_check))
}
