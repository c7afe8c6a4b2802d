//! Shared application state for all routes.

use crate::auth::AuthKeys;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Signing and verification keys, derived once from the configured secret.
    pub auth: Arc<AuthKeys>,
}
