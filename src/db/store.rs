//! The storage seam.
//!
//! Everything the service needs from persistence goes through [`Store`], so
//! the rest of the code is indifferent to whether it is talking to PostgreSQL
//! ([`PgStore`](crate::db::postgres::PgStore)) or running without a database
//! ([`DemoStore`](crate::db::demo::DemoStore)). The implementation is chosen
//! exactly once, at startup.

use crate::db::errors::Result;
use crate::db::models::{AdminUser, AdminUserCreateDBRequest, Session, SessionCreateDBRequest};
use std::sync::Arc;

/// Shared, dynamically-dispatched store handle.
pub type SharedStore = Arc<dyn Store>;

/// Best-effort connectivity report for the `/test` endpoint.
///
/// Never fails: a broken store is itself a reportable state.
#[derive(Debug, Clone)]
pub struct StoreDiagnostics {
    /// Human-readable store status line
    pub status: String,
    /// "Connected" / "Not Connected"
    pub connection_status: String,
    /// Up to 10 table names, empty when unreachable
    pub collections: Vec<String>,
}

#[async_trait::async_trait]
pub trait Store: Send + Sync {
    /// Look up an account by username, filtering out deactivated accounts.
    async fn find_active_user_by_username(&self, username: &str) -> Result<Option<AdminUser>>;

    /// Insert an account. Idempotent on username: inserting an existing
    /// username returns the existing row untouched.
    async fn insert_user(&self, request: &AdminUserCreateDBRequest) -> Result<AdminUser>;

    /// Persist a freshly issued session.
    async fn insert_session(&self, request: &SessionCreateDBRequest) -> Result<Session>;

    /// Look up a session by its exact token. Revoked sessions are never
    /// returned; expiry is the caller's concern.
    async fn find_session_by_token(&self, token: &str) -> Result<Option<Session>>;

    /// Report connectivity for diagnostics.
    async fn diagnostics(&self) -> StoreDiagnostics;
}
