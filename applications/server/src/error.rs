/// Server error types
use crate::api::response::ApiResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::RosterError;
use std::fmt::Display;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Route not found")]
    RouteNotFound,

    /// Store fault; `message` is what the caller sees, `source` is only logged
    #[error("{message}: {source}")]
    Internal {
        message: String,
        #[source]
        source: RosterError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    /// Not-found error naming the requested user id
    pub fn user_not_found(id: impl Display) -> Self {
        Self::NotFound(format!("User with id {} not found", id))
    }

    /// Adapter for `map_err` that hides a store fault behind `message`
    pub fn internal(message: &'static str) -> impl FnOnce(RosterError) -> Self {
        move |source| Self::Internal {
            message: message.to_string(),
            source,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::NotFound(_) | ServerError::RouteNotFound => StatusCode::NOT_FOUND,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Internal { .. } | ServerError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ServerError::NotFound(msg) | ServerError::BadRequest(msg) => msg,
            ServerError::RouteNotFound => "Route not found".to_string(),
            ServerError::Internal { message, source } => {
                tracing::error!("{}: {:?}", message, source);
                message
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                "Internal server error".to_string()
            }
        };

        (status, Json(ApiResponse::<()>::failure(message))).into_response()
    }
}
