//! Shared test helpers: an in-memory [`Store`] and state builders.

use crate::AppState;
use crate::auth::password;
use crate::config::Config;
use crate::db::errors::Result;
use crate::db::models::{AdminUser, AdminUserCreateDBRequest, Session, SessionCreateDBRequest};
use crate::db::store::{SharedStore, Store, StoreDiagnostics};
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

/// In-memory store standing in for PostgreSQL in tests.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<AdminUser>>,
    sessions: Mutex<Vec<Session>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn revoke_token(&self, token: &str) {
        let mut sessions = self.sessions.lock().unwrap();
        for session in sessions.iter_mut().filter(|s| s.token == token) {
            session.revoked = true;
        }
    }

    pub async fn insert_inactive_user(&self, username: &str, plaintext_password: &str) -> AdminUser {
        self.insert_user(&AdminUserCreateDBRequest {
            name: "Administrator".to_string(),
            email: format!("{username}@example.com"),
            username: username.to_string(),
            password_hash: password::hash_password(plaintext_password),
            role: "admin".to_string(),
            is_active: false,
        })
        .await
        .unwrap()
    }
}

#[async_trait::async_trait]
impl Store for MemoryStore {
    async fn find_active_user_by_username(&self, username: &str) -> Result<Option<AdminUser>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username && u.is_active).cloned())
    }

    async fn insert_user(&self, request: &AdminUserCreateDBRequest) -> Result<AdminUser> {
        let mut users = self.users.lock().unwrap();
        if let Some(existing) = users.iter().find(|u| u.username == request.username) {
            return Ok(existing.clone());
        }
        let now = Utc::now();
        let user = AdminUser {
            id: Uuid::new_v4(),
            name: request.name.clone(),
            email: request.email.clone(),
            username: request.username.clone(),
            password_hash: request.password_hash.clone(),
            role: request.role.clone(),
            is_active: request.is_active,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn insert_session(&self, request: &SessionCreateDBRequest) -> Result<Session> {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            user_id: request.user_id.clone(),
            token: request.token.clone(),
            role: request.role.clone(),
            expires_at: request.expires_at,
            revoked: false,
            created_at: now,
            updated_at: now,
        };
        self.sessions.lock().unwrap().push(session.clone());
        Ok(session)
    }

    async fn find_session_by_token(&self, token: &str) -> Result<Option<Session>> {
        let sessions = self.sessions.lock().unwrap();
        Ok(sessions.iter().find(|s| s.token == token && !s.revoked).cloned())
    }

    async fn diagnostics(&self) -> StoreDiagnostics {
        StoreDiagnostics {
            status: "✅ Connected & Working".to_string(),
            connection_status: "Connected".to_string(),
            collections: vec!["adminuser".to_string(), "session".to_string()],
        }
    }
}

/// App state over the given store with default (demo-mode) configuration.
pub fn create_test_state(store: SharedStore) -> AppState {
    AppState::builder().store(store).config(Config::default()).build()
}

/// Insert an active admin account with the given credentials.
pub async fn create_test_admin(store: &MemoryStore, username: &str, plaintext_password: &str, role: &str) -> AdminUser {
    store
        .insert_user(&AdminUserCreateDBRequest {
            name: "Administrator".to_string(),
            email: format!("{username}@example.com"),
            username: username.to_string(),
            password_hash: password::hash_password(plaintext_password),
            role: role.to_string(),
            is_active: true,
        })
        .await
        .unwrap()
}
