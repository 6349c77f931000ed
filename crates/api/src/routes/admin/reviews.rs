//! Admin review moderation.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use nuru_core::{ReviewId, ReviewStatus};

use crate::db::reviews::ReviewRepository;
use crate::error::{ApiError, Result};
use crate::middleware::RequireAdmin;
use crate::models::Review;
use crate::state::AppState;

/// `GET /admin/reviews` - every review, newest first.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<Review>>> {
    let reviews = ReviewRepository::new(state.pool()).list_all().await?;
    Ok(Json(reviews))
}

/// `PUT /admin/reviews/{id}/approve`.
pub async fn approve(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<ReviewId>,
) -> Result<Json<Review>> {
    set_status(&state, id, ReviewStatus::Approved).await
}

/// `PUT /admin/reviews/{id}/reject`.
pub async fn reject(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<ReviewId>,
) -> Result<Json<Review>> {
    set_status(&state, id, ReviewStatus::Rejected).await
}

/// `DELETE /admin/reviews/{id}`.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<ReviewId>,
) -> Result<Json<Value>> {
    let deleted = ReviewRepository::new(state.pool()).delete(id).await?;

    if !deleted {
        return Err(ApiError::NotFound(format!("Review {id} not found")));
    }

    Ok(Json(json!({ "deleted": true })))
}

async fn set_status(state: &AppState, id: ReviewId, status: ReviewStatus) -> Result<Json<Review>> {
    let review = ReviewRepository::new(state.pool())
        .set_status(id, status)
        .await
        .map_err(|e| match e {
            crate::db::RepositoryError::NotFound => {
                ApiError::NotFound(format!("Review {id} not found"))
            }
            other => other.into(),
        })?;

    Ok(Json(review))
}
