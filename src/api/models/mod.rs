//! Request/response data structures for API communication.

pub mod auth;
pub mod dashboard;
pub mod diagnostics;
