//! Site content repository.
//!
//! Free-form key/value copy edited through the admin panel (hero text,
//! about section, contact details). Reads merge stored overrides over the
//! built-in defaults so a fresh install renders sensibly.

use std::collections::BTreeMap;

use sqlx::PgPool;

use super::RepositoryError;

/// Copy shipped with the store; overridden per key by admin edits.
pub const DEFAULT_CONTENT: &[(&str, &str)] = &[
    ("hero_title", "Radiant Skin, Naturally"),
    (
        "hero_subtitle",
        "Premium skincare crafted with natural ingredients for East African skin",
    ),
    (
        "about_text",
        "Nuru Skincare was born from a simple belief: everyone deserves skincare \
         that works with their skin, not against it.",
    ),
    ("contact_email", "hello@nuruskincare.com"),
    ("contact_phone", "+254 700 000 000"),
];

/// Repository for site content operations.
pub struct ContentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContentRepository<'a> {
    /// Create a new content repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All content keys: defaults overlaid with stored edits.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn all(&self) -> Result<BTreeMap<String, String>, RepositoryError> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT key, value FROM site_content")
                .fetch_all(self.pool)
                .await?;

        let mut content: BTreeMap<String, String> = DEFAULT_CONTENT
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        content.extend(rows);

        Ok(content)
    }

    /// Set one content key, inserting or overwriting.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn upsert(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO site_content (key, value) VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()",
        )
        .bind(key)
        .bind(value)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
