//! Authentication and authorization
//!
//! - [`JwtService`] - JWT token service
//! - [`CurrentUser`] - current user context
//! - [`require_auth`] - authentication middleware
//! - [`require_permission`] - permission-check middleware (re-derives
//!   grants from the database per request)

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_auth, require_permission};
