//! Admin customer listing.

use axum::{Json, extract::State};

use crate::db::users::UserRepository;
use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::models::UserProfile;
use crate::state::AppState;

/// `GET /admin/customers` - customer accounts, newest first.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<UserProfile>>> {
    let customers = UserRepository::new(state.pool()).list_customers().await?;
    let profiles: Vec<UserProfile> = customers.iter().map(UserProfile::from).collect();
    Ok(Json(profiles))
}
