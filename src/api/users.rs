use crate::api::AppState;
use crate::api::schemas::users::{ApiRoot, User as UserSchema, UserList, UserWrite};
use crate::domain::user::User;
use crate::error::{AppError, Result};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};

/// API root: points clients at the user collection.
pub async fn api_root(headers: HeaderMap) -> impl IntoResponse {
    let host = headers.get(header::HOST).and_then(|h| h.to_str().ok()).unwrap_or("localhost");
    Json(ApiRoot { users: format!("http://{host}/users/") })
}

pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.user_service.list().await?;
    let results = users.into_iter().map(map_user).collect();
    Ok(Json(UserList { results }))
}

pub async fn retrieve_user(State(state): State<AppState>, Path(id): Path<i64>) -> Result<impl IntoResponse> {
    let user = state.user_service.get(id).await?;
    Ok(Json(map_user(user)))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserWrite>,
) -> Result<impl IntoResponse> {
    let username = payload.validate().map_err(|message| AppError::Validation { field: "username", message })?;
    let user = state.user_service.create(&username).await?;
    Ok((StatusCode::CREATED, Json(map_user(user))))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UserWrite>,
) -> Result<impl IntoResponse> {
    let username = payload.validate().map_err(|message| AppError::Validation { field: "username", message })?;
    let user = state.user_service.update(id, &username).await?;
    Ok(Json(map_user(user)))
}

pub async fn delete_user(State(state): State<AppState>, Path(id): Path<i64>) -> Result<impl IntoResponse> {
    state.user_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn map_user(user: User) -> UserSchema {
    UserSchema { id: user.id, username: user.username }
}
