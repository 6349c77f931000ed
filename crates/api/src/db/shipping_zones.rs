//! Shipping zone repository.

use rust_decimal::Decimal;
use sqlx::PgPool;

use nuru_core::{Currency, ShippingZoneId};

use super::RepositoryError;
use crate::models::ShippingZone;

const ZONE_COLUMNS: &str = "id, name, rate, currency, delivery_days, active, created_at";

/// Fields required to insert a shipping zone.
#[derive(Debug)]
pub struct NewShippingZone<'n> {
    pub name: &'n str,
    pub rate: Decimal,
    pub currency: Currency,
    pub delivery_days: &'n str,
}

/// Partial update for a shipping zone; `None` fields are left unchanged.
#[derive(Debug, Default)]
pub struct ShippingZonePatch<'p> {
    pub name: Option<&'p str>,
    pub rate: Option<Decimal>,
    pub currency: Option<Currency>,
    pub delivery_days: Option<&'p str>,
    pub active: Option<bool>,
}

/// Repository for shipping zone database operations.
pub struct ShippingZoneRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ShippingZoneRepository<'a> {
    /// Create a new shipping zone repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every zone, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<ShippingZone>, RepositoryError> {
        let zones = sqlx::query_as::<_, ShippingZone>(&format!(
            "SELECT {ZONE_COLUMNS} FROM shipping_zones ORDER BY id ASC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(zones)
    }

    /// Insert a new zone, active by default.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(
        &self,
        new_zone: NewShippingZone<'_>,
    ) -> Result<ShippingZone, RepositoryError> {
        let zone = sqlx::query_as::<_, ShippingZone>(&format!(
            "INSERT INTO shipping_zones (name, rate, currency, delivery_days) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {ZONE_COLUMNS}"
        ))
        .bind(new_zone.name)
        .bind(new_zone.rate)
        .bind(new_zone.currency)
        .bind(new_zone.delivery_days)
        .fetch_one(self.pool)
        .await?;

        Ok(zone)
    }

    /// Apply a partial update to a zone.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the zone doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ShippingZoneId,
        patch: ShippingZonePatch<'_>,
    ) -> Result<ShippingZone, RepositoryError> {
        let zone = sqlx::query_as::<_, ShippingZone>(&format!(
            "UPDATE shipping_zones SET \
                 name = COALESCE($2, name), \
                 rate = COALESCE($3, rate), \
                 currency = COALESCE($4, currency), \
                 delivery_days = COALESCE($5, delivery_days), \
                 active = COALESCE($6, active) \
             WHERE id = $1 \
             RETURNING {ZONE_COLUMNS}"
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.rate)
        .bind(patch.currency)
        .bind(patch.delivery_days)
        .bind(patch.active)
        .fetch_optional(self.pool)
        .await?;

        zone.ok_or(RepositoryError::NotFound)
    }

    /// Delete a zone. Returns `true` if a row was deleted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ShippingZoneId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM shipping_zones WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
