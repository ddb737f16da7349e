//! Database row types and insert requests.
//!
//! Row structs derive [`sqlx::FromRow`] and map 1:1 onto the `adminuser` and
//! `session` tables. `*CreateDBRequest` types carry the caller-supplied
//! fields; identifiers and timestamps are filled in at insert time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An administrator account.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to create an admin account.
#[derive(Debug, Clone)]
pub struct AdminUserCreateDBRequest {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
}

/// A bearer session.
///
/// `user_id` is a plain identifier string, not a foreign key: tokens stay
/// verifiable independently of the account table. `expires_at = None` means
/// the session never expires.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub user_id: String,
    pub token: String,
    pub role: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub revoked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to create a session.
#[derive(Debug, Clone)]
pub struct SessionCreateDBRequest {
    pub user_id: String,
    pub token: String,
    pub role: String,
    pub expires_at: Option<DateTime<Utc>>,
}
