//! Service status endpoints: root greeting and store diagnostics.

use crate::AppState;
use crate::api::models::diagnostics::{DiagnosticsResponse, RootResponse};
use axum::{Json, extract::State};

/// Root greeting, used by uptime checks.
#[utoipa::path(
    get,
    path = "/",
    tag = "status",
    responses((status = 200, description = "Service is up", body = RootResponse))
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Madrasah Backend Running".to_string(),
    })
}

/// Store connectivity report.
///
/// Reports whether the database variables are configured (never their
/// values) and what the store itself says about connectivity. Unauthenticated
/// on purpose: it is the first thing checked when a deployment misbehaves.
#[utoipa::path(
    get,
    path = "/test",
    tag = "status",
    responses((status = 200, description = "Connectivity report", body = DiagnosticsResponse))
)]
#[tracing::instrument(skip_all)]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let diag = state.store.diagnostics().await;

    fn set_flag(is_set: bool) -> String {
        if is_set { "✅ Set".to_string() } else { "❌ Not Set".to_string() }
    }

    Json(DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: diag.status,
        database_url: set_flag(state.config.database_url.is_some()),
        database_name: set_flag(state.config.database_name.is_some()),
        connection_status: diag.connection_status,
        collections: diag.collections,
    })
}

#[cfg(test)]
mod tests {
    use crate::api::models::diagnostics::DiagnosticsResponse;
    use crate::config::Config;
    use crate::db::demo::DemoStore;
    use crate::{AppState, build_router};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_root_greeting() {
        let server = TestServer::new(build_router(crate::test_utils::create_test_state(Arc::new(DemoStore)))).unwrap();

        let response = server.get("/").await;
        response.assert_status(StatusCode::OK);

        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Madrasah Backend Running");
    }

    #[tokio::test]
    async fn test_diagnostics_in_demo_mode() {
        let server = TestServer::new(build_router(crate::test_utils::create_test_state(Arc::new(DemoStore)))).unwrap();

        let response = server.get("/test").await;
        response.assert_status(StatusCode::OK);

        let body: DiagnosticsResponse = response.json();
        assert_eq!(body.backend, "✅ Running");
        assert_eq!(body.database, "❌ Not Available");
        assert_eq!(body.database_url, "❌ Not Set");
        assert_eq!(body.database_name, "❌ Not Set");
        assert_eq!(body.connection_status, "Not Connected");
        assert!(body.collections.is_empty());
    }

    #[tokio::test]
    async fn test_diagnostics_reports_configured_variables() {
        let config = Config {
            database_url: Some("postgres://localhost/madrasah".to_string()),
            database_name: Some("madrasah".to_string()),
            ..Config::default()
        };
        let state = AppState::builder().store(Arc::new(DemoStore)).config(config).build();
        let server = TestServer::new(build_router(state)).unwrap();

        let body: DiagnosticsResponse = server.get("/test").await.json();
        assert_eq!(body.database_url, "✅ Set");
        assert_eq!(body.database_name, "✅ Set");
    }
}
