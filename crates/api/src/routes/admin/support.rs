//! Admin support ticket handling.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use nuru_core::{TicketId, TicketStatus};

use crate::db::support_tickets::SupportTicketRepository;
use crate::error::{ApiError, Result};
use crate::middleware::RequireAdmin;
use crate::models::SupportTicket;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SetTicketStatusRequest {
    pub status: TicketStatus,
}

/// `GET /admin/support-tickets` - every ticket, newest first.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<SupportTicket>>> {
    let tickets = SupportTicketRepository::new(state.pool()).list_all().await?;
    Ok(Json(tickets))
}

/// `PUT /admin/support-tickets/{id}/status` - open or close a ticket.
pub async fn set_status(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<TicketId>,
    Json(req): Json<SetTicketStatusRequest>,
) -> Result<Json<SupportTicket>> {
    let ticket = SupportTicketRepository::new(state.pool())
        .set_status(id, req.status)
        .await
        .map_err(|e| match e {
            crate::db::RepositoryError::NotFound => {
                ApiError::NotFound(format!("Ticket {id} not found"))
            }
            other => other.into(),
        })?;

    Ok(Json(ticket))
}
