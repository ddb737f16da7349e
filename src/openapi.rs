//! OpenAPI document assembly, served interactively at `/docs`.

use crate::api::{handlers, models};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Madrasah Admin API",
        description = "Admin login, bearer sessions, and dashboard data for the madrasah website"
    ),
    paths(
        handlers::diagnostics::root,
        handlers::auth::login,
        handlers::dashboard::dashboard,
        handlers::diagnostics::test_database,
    ),
    components(schemas(
        models::auth::LoginRequest,
        models::auth::LoginResponse,
        models::dashboard::DashboardResponse,
        models::dashboard::DashboardUser,
        models::dashboard::DashboardStats,
        models::dashboard::Announcement,
        models::diagnostics::RootResponse,
        models::diagnostics::DiagnosticsResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Login and session issuance"),
        (name = "dashboard", description = "Authenticated dashboard data"),
        (name = "status", description = "Liveness and store diagnostics"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_all_routes() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/api/login", "/api/dashboard", "/test"] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }
}
