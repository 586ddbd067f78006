//! Authentication routes
//!
//! Provides endpoints for user registration and login.
//!
//! # Performance
//!
//! - Uses pre-computed JWT keys from AppState (no per-request allocation)
//! - Password hashing runs on blocking thread pool (doesn't block async runtime)

use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use crate::types::{Confirmation, LoginRequest, RegisterRequest, TokenResponse};
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
///
/// POST /api/v1/auth/register
///
/// Returns a confirmation; a token is only issued on login.
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<Confirmation>)> {
    let confirmation = UserService::register(
        state.db(),
        &req.email,
        &req.name,
        &req.password,
        state.config().auth.bcrypt_cost,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(confirmation)))
}

/// Login with email and password
///
/// POST /api/v1/auth/login
///
/// # Performance
/// Password verification is offloaded to blocking thread pool.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let token =
        UserService::authenticate(state.db(), state.jwt(), &req.email, &req.password).await?;
    Ok(Json(token))
}
