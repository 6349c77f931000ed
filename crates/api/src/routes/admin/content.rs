//! Admin site content editing.

use std::collections::BTreeMap;

use axum::{Json, extract::State};

use crate::db::content::ContentRepository;
use crate::error::{ApiError, Result};
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// `GET /admin/content` - every content key, defaults included.
pub async fn get(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<BTreeMap<String, String>>> {
    let content = ContentRepository::new(state.pool()).all().await?;
    Ok(Json(content))
}

/// `PUT /admin/content` - upsert the provided keys, leaving others alone.
pub async fn put(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(updates): Json<BTreeMap<String, String>>,
) -> Result<Json<BTreeMap<String, String>>> {
    if updates.is_empty() {
        return Err(ApiError::Validation(
            "No content fields provided".to_string(),
        ));
    }

    let repo = ContentRepository::new(state.pool());
    for (key, value) in &updates {
        repo.upsert(key, value).await?;
    }

    let content = repo.all().await?;
    Ok(Json(content))
}
