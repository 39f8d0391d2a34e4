//! Server configuration
//!
//! All configuration items can be overridden through environment variables:
//!
//! | Env var | Default | Purpose |
//! |---------|---------|---------|
//! | DATABASE_PATH | fleet.db | SQLite database file |
//! | HTTP_PORT | 3000 | HTTP service port |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | ADMIN_PASSWORD | (generated warning default) | First-boot admin password |
//! | JWT_SECRET | (dev fallback) | HS256 signing secret, min 32 chars |
//! | JWT_EXPIRATION_MINUTES | 1440 | Token lifetime |

use crate::auth::JwtConfig;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file path
    pub database_path: String,
    /// HTTP API service port
    pub http_port: u16,
    /// JWT authentication configuration
    pub jwt: JwtConfig,
    /// Running environment: development | staging | production
    pub environment: String,
    /// Password assigned to the bootstrap admin account on first start
    pub admin_password: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "fleet.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").ok().filter(|s| !s.is_empty()),
        }
    }

    /// Override database path and port
    ///
    /// Used by tests.
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    /// Whether running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether running in development
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
