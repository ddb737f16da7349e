//! PostgreSQL-backed store.
//!
//! The pool is created lazily: constructing a [`PgStore`] never performs I/O,
//! so the process starts even when the database is unreachable and individual
//! requests surface the failure instead.

use crate::db::errors::{DbError, Result};
use crate::db::models::{AdminUser, AdminUserCreateDBRequest, Session, SessionCreateDBRequest};
use crate::db::store::{Store, StoreDiagnostics};
use chrono::Utc;
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

const MAX_CONNECTIONS: u32 = 5;

/// Limit matches what the diagnostics endpoint is willing to display.
const DIAGNOSTICS_TABLE_LIMIT: i64 = 10;

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a store with a lazy connection pool. No connection is attempted
    /// until the first query runs.
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_lazy(database_url)
            .map_err(DbError::from)?;
        Ok(Self { pool })
    }

    /// Run the embedded migrations. Called best-effort at startup; a failure
    /// here leaves the store in place and lets later queries report it.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Other(e.into()))
    }
}

#[async_trait::async_trait]
impl Store for PgStore {
    #[tracing::instrument(skip(self), err)]
    async fn find_active_user_by_username(&self, username: &str) -> Result<Option<AdminUser>> {
        let user = sqlx::query_as::<_, AdminUser>(
            "SELECT id, name, email, username, password_hash, role, is_active, created_at, updated_at
             FROM adminuser
             WHERE username = $1 AND is_active",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    #[tracing::instrument(skip(self, request), err)]
    async fn insert_user(&self, request: &AdminUserCreateDBRequest) -> Result<AdminUser> {
        let now = Utc::now();
        let inserted = sqlx::query_as::<_, AdminUser>(
            "INSERT INTO adminuser (id, name, email, username, password_hash, role, is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             ON CONFLICT (username) DO NOTHING
             RETURNING id, name, email, username, password_hash, role, is_active, created_at, updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.username)
        .bind(&request.password_hash)
        .bind(&request.role)
        .bind(request.is_active)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        match inserted {
            Some(user) => Ok(user),
            // Lost the race (or the account predates us): return the existing row
            None => {
                let existing = sqlx::query_as::<_, AdminUser>(
                    "SELECT id, name, email, username, password_hash, role, is_active, created_at, updated_at
                     FROM adminuser
                     WHERE username = $1",
                )
                .bind(&request.username)
                .fetch_one(&self.pool)
                .await?;
                Ok(existing)
            }
        }
    }

    #[tracing::instrument(skip(self, request), err)]
    async fn insert_session(&self, request: &SessionCreateDBRequest) -> Result<Session> {
        let now = Utc::now();
        let session = sqlx::query_as::<_, Session>(
            "INSERT INTO session (id, user_id, token, role, expires_at, revoked, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, FALSE, $6, $6)
             RETURNING id, user_id, token, role, expires_at, revoked, created_at, updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(&request.user_id)
        .bind(&request.token)
        .bind(&request.role)
        .bind(request.expires_at)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(session)
    }

    #[tracing::instrument(skip_all, err)]
    async fn find_session_by_token(&self, token: &str) -> Result<Option<Session>> {
        let session = sqlx::query_as::<_, Session>(
            "SELECT id, user_id, token, role, expires_at, revoked, created_at, updated_at
             FROM session
             WHERE token = $1 AND NOT revoked",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;
        Ok(session)
    }

    async fn diagnostics(&self) -> StoreDiagnostics {
        let tables = sqlx::query_scalar::<_, String>(
            "SELECT table_name::text FROM information_schema.tables
             WHERE table_schema = 'public'
             ORDER BY table_name
             LIMIT $1",
        )
        .bind(DIAGNOSTICS_TABLE_LIMIT)
        .fetch_all(&self.pool)
        .await;

        match tables {
            Ok(collections) => StoreDiagnostics {
                status: "✅ Connected & Working".to_string(),
                connection_status: "Connected".to_string(),
                collections,
            },
            Err(e) => {
                tracing::warn!("Database diagnostics query failed: {e:#}");
                let brief: String = e.to_string().chars().take(50).collect();
                StoreDiagnostics {
                    status: format!("⚠️ Connected but Error: {brief}"),
                    connection_status: "Connected".to_string(),
                    collections: Vec::new(),
                }
            }
        }
    }
}
