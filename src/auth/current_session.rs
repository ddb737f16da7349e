//! Axum extractor for bearer-authenticated routes.

use crate::AppState;
use crate::auth::service::{self, SessionIdentity};
use crate::errors::Error;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Extracts and validates the session behind the `Authorization` header.
///
/// Handlers taking this parameter reject unauthenticated requests with 401
/// before the handler body runs.
pub struct CurrentSession(pub SessionIdentity);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // A header that is not valid UTF-8 cannot match any stored token;
        // treat it the same as an absent header
        let authorization = parts.headers.get(AUTHORIZATION).and_then(|value| value.to_str().ok());

        let identity = service::authenticate(state.store.as_ref(), authorization).await?;
        Ok(Self(identity))
    }
}
