//! Persistence layer.
//!
//! - **[`store`]**: the [`Store`] trait every backend implements
//! - **[`postgres`]**: PostgreSQL implementation (sqlx, lazy pool)
//! - **[`demo`]**: fixed in-process fallback for running without a database
//! - **[`models`]**: row types and insert requests
//! - **[`errors`]**: [`DbError`]

pub mod demo;
pub mod errors;
pub mod models;
pub mod postgres;
pub mod store;

pub use errors::DbError;
pub use models::{AdminUser, AdminUserCreateDBRequest, Session, SessionCreateDBRequest};
pub use store::{SharedStore, Store, StoreDiagnostics};
