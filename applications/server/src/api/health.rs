/// Health check and service index routes
use axum::Json;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: String,
    pub version: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: String,
    pub users: String,
}

/// GET /health - Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
        timestamp: roster_core::format_timestamp(&Utc::now()),
    })
}

/// GET / - Welcome payload with the endpoint map
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Welcome to the Roster REST API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: Endpoints {
            health: "/health".to_string(),
            users: "/api/users".to_string(),
        },
    })
}
