/// Route table and middleware stack
use crate::{
    api::{
        self,
        fallback::{panic_response, route_not_found},
    },
    state::AppState,
};
use axum::{routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    normalize_path::NormalizePath,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// The served application: the router behind trailing-slash trimming
pub type App = NormalizePath<Router>;

/// Build the application as served
///
/// Trailing slashes are trimmed before routing, so `/api/users/` is the list
/// route. Path rewriting has to wrap the router rather than sit inside it.
pub fn create_app(app_state: AppState) -> App {
    NormalizePath::trim_trailing_slash(create_router(app_state))
}

/// Build the application router
///
/// Unknown paths and unsupported methods on known paths both answer
/// 404 "Route not found".
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(api::health::index).fallback(route_not_found))
        .route("/health", get(api::health::health).fallback(route_not_found))
        // Users
        .route(
            "/api/users",
            get(api::users::list_users)
                .post(api::users::create_user)
                .fallback(route_not_found),
        )
        .route(
            "/api/users/:id",
            get(api::users::get_user)
                .put(api::users::update_user)
                .delete(api::users::delete_user)
                .fallback(route_not_found),
        )
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
