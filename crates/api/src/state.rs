//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use nuru_core::PricingEngine;

use crate::config::ApiConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to the database pool, the
/// configuration, and the pricing engine.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    pool: PgPool,
    pricing: PricingEngine,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The pricing engine is injected rather than constructed here so a
    /// deployment can supply a different rate table.
    #[must_use]
    pub fn new(config: ApiConfig, pool: PgPool, pricing: PricingEngine) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                pricing,
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the pricing engine.
    #[must_use]
    pub fn pricing(&self) -> &PricingEngine {
        &self.inner.pricing
    }
}
