/// User CRUD API routes
use crate::{
    api::response::ApiResponse,
    error::{Result, ServerError},
    extract::{RequestedId, UserPayload},
    state::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use roster_core::types::{NewUser, User, UserChanges};

/// GET /api/users - List all users
pub async fn list_users(
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<User>>>> {
    let users = app_state
        .store
        .get_all()
        .await
        .map_err(ServerError::internal("Error fetching users"))?;

    Ok(Json(ApiResponse::list(users)))
}

/// GET /api/users/:id - Get a single user
pub async fn get_user(
    requested: RequestedId,
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<User>>> {
    let Some(id) = requested.id() else {
        return Err(ServerError::user_not_found(requested));
    };

    let user = app_state
        .store
        .get_by_id(id)
        .await
        .map_err(ServerError::internal("Error fetching user"))?
        .ok_or_else(|| ServerError::user_not_found(id))?;

    Ok(Json(ApiResponse::ok(user)))
}

/// POST /api/users - Create a user
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: UserPayload,
) -> Result<(StatusCode, Json<ApiResponse<User>>)> {
    let (name, email) = payload.into_fields()?;

    let user = app_state
        .store
        .create(NewUser { name, email })
        .await
        .map_err(ServerError::internal("Error creating user"))?;

    tracing::info!(id = %user.id, "User created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(user).with_message("User created successfully")),
    ))
}

/// PUT /api/users/:id - Replace a user's name and email
pub async fn update_user(
    requested: RequestedId,
    State(app_state): State<AppState>,
    payload: UserPayload,
) -> Result<Json<ApiResponse<User>>> {
    // Missing fields are reported before the id is looked up
    let (name, email) = payload.into_fields()?;

    let Some(id) = requested.id() else {
        return Err(ServerError::user_not_found(requested));
    };

    let user = app_state
        .store
        .update(id, UserChanges { name, email })
        .await
        .map_err(ServerError::internal("Error updating user"))?
        .ok_or_else(|| ServerError::user_not_found(id))?;

    tracing::info!(id = %user.id, "User updated");

    Ok(Json(
        ApiResponse::ok(user).with_message("User updated successfully"),
    ))
}

/// DELETE /api/users/:id - Remove a user
pub async fn delete_user(
    requested: RequestedId,
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<()>>> {
    let Some(id) = requested.id() else {
        return Err(ServerError::user_not_found(requested));
    };

    let deleted = app_state
        .store
        .delete(id)
        .await
        .map_err(ServerError::internal("Error deleting user"))?;

    if !deleted {
        return Err(ServerError::user_not_found(id));
    }

    tracing::info!(id = %id, "User deleted");

    Ok(Json(ApiResponse::message_only(format!(
        "User with id {} deleted successfully",
        id
    ))))
}
