//! Customer support tickets.

use chrono::{DateTime, Utc};
use serde::Serialize;

use nuru_core::{TicketId, TicketPriority, TicketStatus};

/// A support request submitted from the storefront contact form.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SupportTicket {
    pub id: TicketId,
    pub customer_name: String,
    pub customer_email: String,
    pub subject: String,
    pub message: String,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
}
