//! Application state
//!
//! [`AppState`] holds shared references to every service a handler needs.
//! `Clone` is shallow (pool handle + `Arc`), so handing a copy to each
//! request is cheap.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::config::Config;
use crate::db::{self, DbService};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Config,
    /// SQLite database service
    pub db: DbService,
    /// JWT authentication service
    pub jwt: Arc<JwtService>,
}

impl AppState {
    /// Initialize state: open the database, apply migrations, seed the
    /// bootstrap admin account, build the JWT service.
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let db = DbService::new(&config.database_path).await?;

        db::seed::ensure_admin(db.pool(), config.admin_password.as_deref()).await?;

        let jwt = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self {
            config: config.clone(),
            db,
            jwt,
        })
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        self.db.pool()
    }
}
