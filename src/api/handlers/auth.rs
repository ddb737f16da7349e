//! Authentication endpoints.

use crate::AppState;
use crate::api::models::auth::{LoginRequest, LoginResponse};
use crate::auth;
use crate::errors::Result;
use axum::{Json, extract::State};

/// Authenticate with username and password, receiving a bearer token.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Unknown user or wrong password"),
        (status = 500, description = "No database configured and the credentials are not the demo pair"),
    )
)]
#[tracing::instrument(skip_all, fields(username = %request.username))]
pub async fn login(State(state): State<AppState>, Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>> {
    let response = auth::login(state.store.as_ref(), &request).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use crate::db::SharedStore;
    use crate::db::demo::DemoStore;
    use crate::test_utils::{MemoryStore, create_test_admin, create_test_state};
    use crate::{api::models::auth::LoginResponse, build_router};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use std::sync::Arc;

    fn server(store: SharedStore) -> TestServer {
        TestServer::new(build_router(create_test_state(store))).unwrap()
    }

    #[test_log::test(tokio::test)]
    async fn test_login_issues_token() {
        let store = MemoryStore::new();
        create_test_admin(&store, "admin", "admin123", "admin").await;
        let server = server(Arc::new(store));

        let response = server
            .post("/api/login")
            .json(&json!({"username": "admin", "password": "admin123"}))
            .await;
        response.assert_status(StatusCode::OK);

        let body: LoginResponse = response.json();
        assert_eq!(body.token.len(), 48);
        assert_eq!(body.name, "Administrator");
        assert_eq!(body.role, "admin");
    }

    #[tokio::test]
    async fn test_login_wrong_password_returns_401_detail() {
        let store = MemoryStore::new();
        create_test_admin(&store, "admin", "admin123", "admin").await;
        let server = server(Arc::new(store));

        let response = server
            .post("/api/login")
            .json(&json!({"username": "admin", "password": "wrong"}))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = response.json();
        assert_eq!(body["detail"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_login_unknown_user_returns_401() {
        let server = server(Arc::new(MemoryStore::new()));

        let response = server
            .post("/api/login")
            .json(&json!({"username": "ghost", "password": "x"}))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = response.json();
        assert_eq!(body["detail"], "User not found or inactive");
    }

    #[tokio::test]
    async fn test_demo_mode_login_returns_fixed_token() {
        let server = server(Arc::new(DemoStore));

        let response = server
            .post("/api/login")
            .json(&json!({"username": "admin", "password": "admin123"}))
            .await;
        response.assert_status(StatusCode::OK);

        let body: LoginResponse = response.json();
        assert_eq!(body.token, "demo-token");
        assert_eq!(body.name, "Administrator");
        assert_eq!(body.role, "admin");
    }

    #[tokio::test]
    async fn test_demo_mode_wrong_credentials_return_500() {
        let server = server(Arc::new(DemoStore));

        let response = server
            .post("/api/login")
            .json(&json!({"username": "admin", "password": "wrong"}))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = response.json();
        assert_eq!(body["detail"], "Database not configured");
    }
}
