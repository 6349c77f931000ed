//! Support ticket submission.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use nuru_core::TicketPriority;

use crate::db::support_tickets::{NewTicket, SupportTicketRepository};
use crate::error::{ApiError, Result};
use crate::models::SupportTicket;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTicketRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub priority: TicketPriority,
}

/// `POST /support-tickets` - open a ticket from the contact form.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateTicketRequest>,
) -> Result<(StatusCode, Json<SupportTicket>)> {
    for (field, value) in [
        ("name", &req.name),
        ("email", &req.email),
        ("subject", &req.subject),
        ("message", &req.message),
    ] {
        if value.trim().is_empty() {
            return Err(ApiError::Validation(format!("Missing field: {field}")));
        }
    }

    let ticket = SupportTicketRepository::new(state.pool())
        .create(NewTicket {
            customer_name: req.name.trim(),
            customer_email: req.email.trim(),
            subject: req.subject.trim(),
            message: req.message.trim(),
            priority: req.priority,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}
