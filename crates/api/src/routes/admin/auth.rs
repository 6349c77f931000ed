//! Admin login.

use axum::{Json, extract::State};

use crate::error::Result;
use crate::routes::auth::{LoginRequest, SessionResponse};
use crate::services::AuthService;
use crate::state::AppState;

/// `POST /admin/auth/login` - like `/auth/login`, but only admin accounts
/// succeed. Customer credentials fail exactly like wrong ones.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionResponse>> {
    let (user, token) = AuthService::new(state.pool())
        .admin_login(&req.email, &req.password)
        .await?;

    tracing::info!(user_id = %user.id, "Admin logged in");

    Ok(Json(SessionResponse::from_parts(&user, token)))
}
