//! Support ticket repository.

use sqlx::PgPool;

use nuru_core::{TicketId, TicketPriority, TicketStatus};

use super::RepositoryError;
use crate::models::SupportTicket;

const TICKET_COLUMNS: &str =
    "id, customer_name, customer_email, subject, message, priority, status, created_at";

/// Fields required to insert a support ticket.
#[derive(Debug)]
pub struct NewTicket<'n> {
    pub customer_name: &'n str,
    pub customer_email: &'n str,
    pub subject: &'n str,
    pub message: &'n str,
    pub priority: TicketPriority,
}

/// Repository for support ticket database operations.
pub struct SupportTicketRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SupportTicketRepository<'a> {
    /// Create a new support ticket repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every ticket, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<SupportTicket>, RepositoryError> {
        let tickets = sqlx::query_as::<_, SupportTicket>(&format!(
            "SELECT {TICKET_COLUMNS} FROM support_tickets ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(tickets)
    }

    /// Insert an open ticket.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, new_ticket: NewTicket<'_>) -> Result<SupportTicket, RepositoryError> {
        let ticket = sqlx::query_as::<_, SupportTicket>(&format!(
            "INSERT INTO support_tickets \
                 (customer_name, customer_email, subject, message, priority) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {TICKET_COLUMNS}"
        ))
        .bind(new_ticket.customer_name)
        .bind(new_ticket.customer_email)
        .bind(new_ticket.subject)
        .bind(new_ticket.message)
        .bind(new_ticket.priority)
        .fetch_one(self.pool)
        .await?;

        Ok(ticket)
    }

    /// Open or close a ticket.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the ticket doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_status(
        &self,
        id: TicketId,
        status: TicketStatus,
    ) -> Result<SupportTicket, RepositoryError> {
        let ticket = sqlx::query_as::<_, SupportTicket>(&format!(
            "UPDATE support_tickets SET status = $2 WHERE id = $1 RETURNING {TICKET_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(self.pool)
        .await?;

        ticket.ok_or(RepositoryError::NotFound)
    }
}
