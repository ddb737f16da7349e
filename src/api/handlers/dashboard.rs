//! Admin dashboard endpoint.

use crate::api::models::dashboard::{Announcement, DashboardResponse, DashboardStats, DashboardUser};
use crate::auth::CurrentSession;
use axum::Json;

const ADMIN_DISPLAY_NAME: &str = "Administrator";

/// Dashboard data for the admin frontend.
///
/// The numbers are maintained by hand until enrolment records move into the
/// database; only the authentication gate is dynamic.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "dashboard",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Dashboard data", body = DashboardResponse),
        (status = 401, description = "Missing, invalid, or expired token"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn dashboard(CurrentSession(_session): CurrentSession) -> Json<DashboardResponse> {
    // Sessions do not carry a display name, so the dashboard always shows
    // the fixed admin name
    Json(DashboardResponse {
        user: DashboardUser {
            name: ADMIN_DISPLAY_NAME.to_string(),
        },
        stats: DashboardStats {
            students: 1240,
            teachers: 68,
            classes: 32,
            alumni: 5400,
        },
        announcements: vec![
            Announcement {
                title: "Penerimaan Santri Baru".to_string(),
                date: "2025-06-01".to_string(),
            },
            Announcement {
                title: "Ujian Akhir Semester".to_string(),
                date: "2025-12-15".to_string(),
            },
        ],
    })
}
