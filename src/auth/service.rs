//! Login and bearer-token authentication.
//!
//! Both entry points take `&dyn Store` so they behave identically over
//! PostgreSQL and the demo fallback. The demo path is triggered by the store
//! itself reporting [`DbError::Unavailable`], never by configuration checks
//! here.

use crate::api::models::auth::{LoginRequest, LoginResponse};
use crate::auth::{password, token};
use crate::db::demo::{DEMO_DISPLAY_NAME, DEMO_PASSWORD, DEMO_ROLE, DEMO_TOKEN, DEMO_USERNAME};
use crate::db::{DbError, SessionCreateDBRequest, Store};
use crate::errors::{Error, Result};
use chrono::{Duration, Utc};

/// Sessions issued at login expire this many hours later.
pub const SESSION_TTL_HOURS: i64 = 8;

/// Who a validated token belongs to.
#[derive(Debug, Clone)]
pub struct SessionIdentity {
    pub user_id: String,
    pub role: String,
}

/// Verify credentials and issue a session token.
///
/// Against a real store: look up the active account, compare password
/// digests, persist a session expiring in [`SESSION_TTL_HOURS`].
///
/// When the store reports itself unavailable (demo mode), the fixed demo
/// credential pair yields the literal demo token; any other credentials fail
/// with [`Error::ServiceUnavailable`] rather than 401, so a missing database
/// is never mistaken for a bad password.
pub async fn login(store: &dyn Store, request: &LoginRequest) -> Result<LoginResponse> {
    let user = match store.find_active_user_by_username(&request.username).await {
        Ok(user) => user,
        Err(DbError::Unavailable) => {
            if request.username == DEMO_USERNAME && request.password == DEMO_PASSWORD {
                tracing::info!("Demo login accepted (no database configured)");
                return Ok(LoginResponse {
                    token: DEMO_TOKEN.to_string(),
                    name: DEMO_DISPLAY_NAME.to_string(),
                    role: DEMO_ROLE.to_string(),
                });
            }
            return Err(Error::ServiceUnavailable {
                message: "Database not configured".to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let user = user.ok_or(Error::Unauthorized {
        message: Some("User not found or inactive".to_string()),
    })?;

    if !password::verify_password(&request.password, &user.password_hash) {
        return Err(Error::Unauthorized {
            message: Some("Invalid credentials".to_string()),
        });
    }

    let session_token = token::generate_session_token();
    let session = store
        .insert_session(&SessionCreateDBRequest {
            user_id: user.id.to_string(),
            token: session_token,
            role: user.role.clone(),
            expires_at: Some(Utc::now() + Duration::hours(SESSION_TTL_HOURS)),
        })
        .await?;

    tracing::info!(username = %user.username, "Login succeeded");

    Ok(LoginResponse {
        token: session.token,
        name: user.name,
        role: user.role,
    })
}

/// Resolve an `Authorization` header value to a session identity.
///
/// A literal `"Bearer "` prefix is stripped if present; otherwise the whole
/// header value is treated as the token. A session is valid iff it is not
/// revoked and its expiry (when set) lies in the future.
pub async fn authenticate(store: &dyn Store, authorization: Option<&str>) -> Result<SessionIdentity> {
    let header = authorization.ok_or(Error::Unauthorized {
        message: Some("Missing Authorization header".to_string()),
    })?;

    let token = header.strip_prefix("Bearer ").unwrap_or(header);

    let session = store
        .find_session_by_token(token)
        .await?
        .ok_or(Error::Unauthorized {
            message: Some("Invalid token".to_string()),
        })?;

    if let Some(expires_at) = session.expires_at
        && expires_at < Utc::now()
    {
        return Err(Error::Unauthorized {
            message: Some("Token expired".to_string()),
        });
    }

    Ok(SessionIdentity {
        user_id: session.user_id,
        role: session.role,
    })
}
