//! Fleet Server - bus-fleet back-office administration API
//!
//! # Module structure
//!
//! ```text
//! fleet-server/src/
//! ├── config.rs      # Environment configuration
//! ├── state.rs       # Shared application state
//! ├── auth/          # JWT authentication, permission checks
//! ├── api/           # HTTP routes and handlers, one module per resource
//! ├── db/            # SQLite pool, migrations, repositories
//! └── utils/         # Validation helpers
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod state;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtConfig, JwtService};
pub use config::Config;
pub use state::AppState;

// Re-export unified error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};

// Security logging macro - events land under the `security` tracing target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
