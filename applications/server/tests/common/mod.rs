#![allow(dead_code)]

/// Common test utilities and fixtures
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use roster_core::{
    types::{NewUser, User, UserChanges, UserId},
    RosterError, UserStore,
};
use roster_server::{create_app, state::AppState, App};
use std::sync::Arc;
use tower::util::ServiceExt;

/// App over a fresh seeded in-memory store
pub fn create_test_app() -> App {
    create_app(AppState::seeded())
}

/// App over an arbitrary store
pub fn create_app_with_store(store: Arc<dyn UserStore>) -> App {
    create_app(AppState::new(store))
}

/// Send a request and decode the JSON response body
pub async fn send(
    app: &App,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(
    app: &App,
    request: Request<Body>,
) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);

    (status, body)
}

/// Store whose every operation fails
pub struct FailingStore;

#[async_trait]
impl UserStore for FailingStore {
    async fn get_all(&self) -> roster_core::Result<Vec<User>> {
        Err(RosterError::storage("disk on fire"))
    }

    async fn get_by_id(&self, _id: UserId) -> roster_core::Result<Option<User>> {
        Err(RosterError::storage("disk on fire"))
    }

    async fn create(&self, _user: NewUser) -> roster_core::Result<User> {
        Err(RosterError::IdSpaceExhausted)
    }

    async fn update(
        &self,
        _id: UserId,
        _changes: UserChanges,
    ) -> roster_core::Result<Option<User>> {
        Err(RosterError::storage("disk on fire"))
    }

    async fn delete(&self, _id: UserId) -> roster_core::Result<bool> {
        Err(RosterError::storage("disk on fire"))
    }
}

/// Store that panics on listing and otherwise behaves as empty
pub struct PanickingStore;

#[async_trait]
impl UserStore for PanickingStore {
    async fn get_all(&self) -> roster_core::Result<Vec<User>> {
        panic!("listing exploded");
    }

    async fn get_by_id(&self, _id: UserId) -> roster_core::Result<Option<User>> {
        Ok(None)
    }

    async fn create(&self, _user: NewUser) -> roster_core::Result<User> {
        panic!("create exploded");
    }

    async fn update(
        &self,
        _id: UserId,
        _changes: UserChanges,
    ) -> roster_core::Result<Option<User>> {
        Ok(None)
    }

    async fn delete(&self, _id: UserId) -> roster_core::Result<bool> {
        Ok(false)
    }
}

/// Request fixtures
pub mod fixtures {
    pub const NEW_NAME: &str = "A";
    pub const NEW_EMAIL: &str = "a@x.com";
    pub const UPDATED_NAME: &str = "B";
    pub const UPDATED_EMAIL: &str = "b@x.com";
}
