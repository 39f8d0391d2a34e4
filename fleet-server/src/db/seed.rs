//! First-boot seeding
//!
//! Migrations seed the permission list and the bootstrap organisation;
//! the admin employee needs a runtime argon2 hash, so it is created here.

use sqlx::SqlitePool;

use super::RepoResult;
use crate::auth::password;
use shared::util::now_millis;

const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Create the bootstrap admin account if no employee exists yet.
///
/// The password comes from `ADMIN_PASSWORD`; without it a development
/// default is used and a warning logged.
pub async fn ensure_admin(pool: &SqlitePool, admin_password: Option<&str>) -> RepoResult<()> {
    let employees: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee")
        .fetch_one(pool)
        .await?;
    if employees > 0 {
        return Ok(());
    }

    let password = match admin_password {
        Some(p) => p.to_string(),
        None => {
            tracing::warn!(
                "ADMIN_PASSWORD not set; bootstrap admin uses the development default. \
                 Set ADMIN_PASSWORD before exposing this server."
            );
            "admin".to_string()
        }
    };

    let hash_pass = password::hash_password(&password)
        .map_err(|e| super::RepoError::Database(format!("Failed to hash admin password: {e}")))?;

    let position_id: i64 =
        sqlx::query_scalar("SELECT id FROM position WHERE name = 'Administrator'")
            .fetch_one(pool)
            .await?;
    let department_id: i64 =
        sqlx::query_scalar("SELECT id FROM department WHERE name = 'Operations'")
            .fetch_one(pool)
            .await?;

    sqlx::query(
        r#"
        INSERT INTO employee (username, hash_pass, name, position_id, department_id, is_active, created_at)
        VALUES (?, ?, 'Administrator', ?, ?, 1, ?)
        "#,
    )
    .bind(DEFAULT_ADMIN_USERNAME)
    .bind(&hash_pass)
    .bind(position_id)
    .bind(department_id)
    .bind(now_millis())
    .execute(pool)
    .await?;

    tracing::info!(username = DEFAULT_ADMIN_USERNAME, "Bootstrap admin account created");
    Ok(())
}
