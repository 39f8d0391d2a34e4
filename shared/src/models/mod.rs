//! Data models
//!
//! Shared between the server and the admin frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod auth;
pub mod bus;
pub mod department;
pub mod employee;
pub mod permission;
pub mod position;
pub mod report;
pub mod route;
pub mod schedule;
pub mod stop;

// Re-exports
pub use auth::*;
pub use bus::*;
pub use department::*;
pub use employee::*;
pub use permission::*;
pub use position::*;
pub use report::*;
pub use route::*;
pub use schedule::*;
pub use stop::*;
