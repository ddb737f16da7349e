//! Administrative backend for the madrasah website.
//!
//! Authenticates the admin account, issues bearer session tokens, and serves
//! the dashboard payload for the admin frontend. Runs against PostgreSQL
//! when `DATABASE_URL` is configured; otherwise it degrades to a demo mode
//! with a single fixed credential pair and token, so the frontend can be
//! developed without any infrastructure.
//!
//! Layout:
//!
//! - **[`api`]**: axum handlers and request/response models
//! - **[`auth`]**: password hashing, token issuance, session validation
//! - **[`db`]**: the [`Store`](db::Store) trait and its PostgreSQL/demo
//!   implementations
//! - **[`config`]** / **[`telemetry`]** / **[`errors`]**: ambient plumbing

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod openapi;
pub mod telemetry;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use errors::{Error, Result};

use crate::auth::password;
use crate::db::demo::DemoStore;
use crate::db::postgres::PgStore;
use crate::db::{AdminUserCreateDBRequest, SharedStore, Store};
use crate::openapi::ApiDoc;
use axum::{
    Router,
    routing::{get, post},
};
use bon::Builder;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi as _;
use utoipa_scalar::{Scalar, Servable};

const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Shared application state for request handlers.
#[derive(Clone, Builder)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Config,
}

/// Result of the best-effort default-admin bootstrap.
#[derive(Debug, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Created,
    AlreadyExists,
    Skipped(String),
}

/// Ensure the default admin account exists.
///
/// Never fails and is safe to call repeatedly: a failure (including an
/// unconfigured store) becomes [`BootstrapOutcome::Skipped`] and the caller
/// decides how loudly to log it. Startup proceeds either way.
pub async fn create_default_admin(store: &dyn Store) -> BootstrapOutcome {
    match store.find_active_user_by_username(DEFAULT_ADMIN_USERNAME).await {
        Ok(Some(_)) => BootstrapOutcome::AlreadyExists,
        Ok(None) => {
            let request = AdminUserCreateDBRequest {
                name: "Administrator".to_string(),
                email: "admin@example.com".to_string(),
                username: DEFAULT_ADMIN_USERNAME.to_string(),
                password_hash: password::hash_password(DEFAULT_ADMIN_PASSWORD),
                role: "admin".to_string(),
                is_active: true,
            };
            match store.insert_user(&request).await {
                Ok(_) => BootstrapOutcome::Created,
                Err(e) => BootstrapOutcome::Skipped(e.to_string()),
            }
        }
        Err(e) => BootstrapOutcome::Skipped(e.to_string()),
    }
}

/// Pick the store implementation for this process.
///
/// `DATABASE_URL` set: a lazily connecting PostgreSQL store, with embedded
/// migrations run best-effort (an unreachable database degrades individual
/// requests, never startup). Unset or invalid: the fixed demo store.
async fn setup_store(config: &Config) -> SharedStore {
    match &config.database_url {
        Some(url) => match PgStore::connect_lazy(url) {
            Ok(store) => {
                if let Err(e) = store.migrate().await {
                    tracing::warn!("Database migrations could not be applied yet: {e:#}");
                }
                Arc::new(store)
            }
            Err(e) => {
                tracing::warn!("Invalid DATABASE_URL, falling back to demo mode: {e:#}");
                Arc::new(DemoStore)
            }
        },
        None => {
            tracing::info!("No DATABASE_URL configured, running in demo mode");
            Arc::new(DemoStore)
        }
    }
}

/// Build the router with all routes, documentation, and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::handlers::diagnostics::root))
        .route("/api/login", post(api::handlers::auth::login))
        .route("/api/dashboard", get(api::handlers::dashboard::dashboard))
        .route("/test", get(api::handlers::diagnostics::test_database))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        // The public site and admin frontend are served from other origins
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// The configured application, ready to serve.
pub struct Application {
    router: Router,
    bind_address: String,
}

impl Application {
    /// Select the store, bootstrap the default admin, and assemble the
    /// router. Infallible apart from genuinely broken configuration.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = setup_store(&config).await;

        match create_default_admin(store.as_ref()).await {
            BootstrapOutcome::Created => tracing::info!("Created default admin user"),
            BootstrapOutcome::AlreadyExists => tracing::debug!("Default admin user already exists"),
            BootstrapOutcome::Skipped(reason) => {
                tracing::warn!("Default admin bootstrap skipped: {reason}")
            }
        }

        let bind_address = config.bind_address();
        let state = AppState::builder().store(store).config(config).build();

        Ok(Self {
            router: build_router(state),
            bind_address,
        })
    }

    /// Serve until the shutdown future resolves.
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::bind(&self.bind_address).await?;
        tracing::info!("Listening on {}", self.bind_address);

        axum::serve(listener, self.router).with_graceful_shutdown(shutdown).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MemoryStore;

    #[test_log::test(tokio::test)]
    async fn test_bootstrap_creates_then_recognizes_admin() {
        let store = MemoryStore::new();

        assert_eq!(create_default_admin(&store).await, BootstrapOutcome::Created);
        assert_eq!(create_default_admin(&store).await, BootstrapOutcome::AlreadyExists);
        assert_eq!(store.user_count(), 1);

        let admin = store.find_active_user_by_username("admin").await.unwrap().unwrap();
        assert_eq!(admin.name, "Administrator");
        assert_eq!(admin.email, "admin@example.com");
        assert_eq!(admin.role, "admin");
        assert_eq!(
            admin.password_hash,
            "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9"
        );
    }

    #[tokio::test]
    async fn test_bootstrap_against_demo_store_is_skipped_not_fatal() {
        let outcome = create_default_admin(&DemoStore).await;
        assert!(matches!(outcome, BootstrapOutcome::Skipped(_)));
    }

    #[tokio::test]
    async fn test_setup_store_without_url_selects_demo_mode() {
        let store = setup_store(&Config::default()).await;
        let diag = store.diagnostics().await;
        assert_eq!(diag.connection_status, "Not Connected");
    }
}
