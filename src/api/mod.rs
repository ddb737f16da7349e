//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: axum route handlers for all endpoints
//! - **[`models`]**: request/response data structures
//!
//! All endpoints carry OpenAPI annotations via `utoipa`; the interactive
//! reference is served at `/docs`.

pub mod handlers;
pub mod models;
