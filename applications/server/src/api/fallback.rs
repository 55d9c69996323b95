/// Catch-all responses for unmatched routes and panics
use crate::{api::response::ApiResponse, error::ServerError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;

/// Any path or method without a handler
pub async fn route_not_found() -> ServerError {
    ServerError::RouteNotFound
}

/// Response for a handler that panicked; the payload is logged, not returned
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Request handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::failure("Internal server error")),
    )
        .into_response()
}
