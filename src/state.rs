//! Shared application state for all routes.

use crate::config::AppConfig;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Resolved once at startup so both API root branches are testable.
    pub config: Arc<AppConfig>,
}
