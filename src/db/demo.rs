//! In-process demo store, used when no `DATABASE_URL` is configured.
//!
//! Holds a single fixed credential pair and recognizes a single literal
//! token. Nothing is ever persisted: user lookups and inserts report
//! [`DbError::Unavailable`] so the auth service can fall back to the demo
//! credential check, and only [`DEMO_TOKEN`] authenticates afterwards.

use crate::db::errors::{DbError, Result};
use crate::db::models::{AdminUser, AdminUserCreateDBRequest, Session, SessionCreateDBRequest};
use crate::db::store::{Store, StoreDiagnostics};
use chrono::Utc;
use uuid::Uuid;

pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "admin123";
pub const DEMO_TOKEN: &str = "demo-token";
pub const DEMO_DISPLAY_NAME: &str = "Administrator";
pub const DEMO_ROLE: &str = "admin";

pub struct DemoStore;

#[async_trait::async_trait]
impl Store for DemoStore {
    async fn find_active_user_by_username(&self, _username: &str) -> Result<Option<AdminUser>> {
        Err(DbError::Unavailable)
    }

    async fn insert_user(&self, _request: &AdminUserCreateDBRequest) -> Result<AdminUser> {
        Err(DbError::Unavailable)
    }

    async fn insert_session(&self, _request: &SessionCreateDBRequest) -> Result<Session> {
        Err(DbError::Unavailable)
    }

    async fn find_session_by_token(&self, token: &str) -> Result<Option<Session>> {
        if token != DEMO_TOKEN {
            return Ok(None);
        }
        // Synthetic non-expiring session for the fixed demo token
        let now = Utc::now();
        Ok(Some(Session {
            id: Uuid::nil(),
            user_id: "demo".to_string(),
            token: DEMO_TOKEN.to_string(),
            role: DEMO_ROLE.to_string(),
            expires_at: None,
            revoked: false,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn diagnostics(&self) -> StoreDiagnostics {
        StoreDiagnostics {
            status: "❌ Not Available".to_string(),
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_user_operations_report_unavailable() {
        let store = DemoStore;
        assert!(matches!(
            store.find_active_user_by_username("admin").await,
            Err(DbError::Unavailable)
        ));
    }

    #[tokio::test]
    async fn test_only_demo_token_resolves() {
        let store = DemoStore;

        let session = store.find_session_by_token(DEMO_TOKEN).await.unwrap().unwrap();
        assert_eq!(session.role, "admin");
        assert!(session.expires_at.is_none());
        assert!(!session.revoked);

        assert!(store.find_session_by_token("some-other-token").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_diagnostics_reports_not_connected() {
        let diag = DemoStore.diagnostics().await;
        assert_eq!(diag.connection_status, "Not Connected");
        assert!(diag.collections.is_empty());
    }
}
