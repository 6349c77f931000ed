//! Admin profile management.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::services::AuthService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// `PUT /admin/profile/password` - change the admin's password.
///
/// Verifies the current password first. All tokens are revoked on success,
/// including the one authenticating this request.
pub async fn change_password(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<Value>> {
    AuthService::new(state.pool())
        .change_password(admin.id, &req.current_password, &req.new_password)
        .await?;

    tracing::info!(user_id = %admin.id, "Password changed, tokens revoked");

    Ok(Json(json!({ "message": "Password updated; please log in again" })))
}
