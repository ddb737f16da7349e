//! Authentication and session management.
//!
//! - **[`password`]**: SHA-256 digest hashing and verification
//! - **[`token`]**: CSPRNG session token generation
//! - **[`service`]**: login and bearer-token validation over a [`Store`](crate::db::Store)
//! - **[`current_session`]**: axum extractor gating authenticated routes

pub mod current_session;
pub mod password;
pub mod service;
pub mod token;

pub use current_session::CurrentSession;
pub use service::{SESSION_TTL_HOURS, SessionIdentity, authenticate, login};
