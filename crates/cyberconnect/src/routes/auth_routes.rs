use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::auth;
use crate::feed::UserRole;
use crate::routes::error::FeedRouteError;

#[derive(Deserialize)]
struct LoginRequest {
    username: String,
    password: String,
    /// Which login form the client used; defaults to the normal one.
    #[serde(default)]
    role: Option<UserRole>,
}

#[derive(Serialize)]
struct LoginResponse {
    success: bool,
    user_type: UserRole,
}

pub fn auth_router() -> Router {
    Router::new().route("/auth/login", post(handle_login))
}

async fn handle_login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, FeedRouteError> {
    let requested_role = request.role.unwrap_or(UserRole::Normal);
    let granted = auth::authenticate(&request.username, &request.password, requested_role)
        .map_err(|_| FeedRouteError::InvalidCredentials)?;
    Ok(Json(LoginResponse { success: true, user_type: granted }))
}
