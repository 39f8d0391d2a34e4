//! Position-Permission Grant Repository
//!
//! Replace-all semantics per position: saving a position's grant set
//! deletes every existing grant for that position and inserts the
//! submitted rows, all inside one transaction. Positions absent from the
//! payload are untouched. There is no optimistic concurrency token;
//! concurrent writers overwrite each other whole-set, never partially.

use std::collections::HashSet;

use super::{RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{GrantReplaceRequest, GrantRow};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<GrantRow>> {
    let grants = sqlx::query_as::<_, GrantRow>(
        r#"
        SELECT pp.position_id, pp.permission_id, p.name AS permission_name, pp.department_id
        FROM position_permission pp
        JOIN permission p ON p.id = pp.permission_id
        ORDER BY pp.position_id, p.name
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(grants)
}

pub async fn find_for_position(pool: &SqlitePool, position_id: i64) -> RepoResult<Vec<GrantRow>> {
    let grants = sqlx::query_as::<_, GrantRow>(
        r#"
        SELECT pp.position_id, pp.permission_id, p.name AS permission_name, pp.department_id
        FROM position_permission pp
        JOIN permission p ON p.id = pp.permission_id
        WHERE pp.position_id = ?
        ORDER BY p.name
        "#,
    )
    .bind(position_id)
    .fetch_all(pool)
    .await?;
    Ok(grants)
}

/// Replace the grant sets of the submitted positions.
///
/// Commit on success, rollback on any failure: no position ends up with a
/// partial set.
pub async fn replace(pool: &SqlitePool, request: GrantReplaceRequest) -> RepoResult<()> {
    // Validate references before touching anything
    for set in &request.positions {
        super::positions::find_by_id(pool, set.position_id)
            .await?
            .ok_or_else(|| RepoError::Business(
                ErrorCode::PositionNotFound,
                format!("Position {} not found", set.position_id),
            ))?;

        let permission_ids: Vec<i64> = set
            .grants
            .iter()
            .map(|g| g.permission_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let existing = super::permissions::count_existing(pool, &permission_ids).await?;
        if existing != permission_ids.len() as i64 {
            return Err(RepoError::Business(
                ErrorCode::PermissionNotFound,
                format!("Unknown permission id in grant set for position {}", set.position_id),
            ));
        }

        for grant in &set.grants {
            if let Some(department_id) = grant.department_id {
                super::departments::find_by_id(pool, department_id)
                    .await?
                    .ok_or_else(|| RepoError::Business(
                        ErrorCode::DepartmentNotFound,
                        format!("Department {department_id} not found"),
                    ))?;
            }
        }
    }

    let mut tx = pool.begin().await?;
    for set in &request.positions {
        sqlx::query("DELETE FROM position_permission WHERE position_id = ?")
            .bind(set.position_id)
            .execute(&mut *tx)
            .await?;

        // Dedupe: SQLite treats NULL scopes as distinct in the UNIQUE index
        let mut seen = HashSet::new();
        for grant in &set.grants {
            if !seen.insert((grant.permission_id, grant.department_id)) {
                continue;
            }
            sqlx::query(
                "INSERT INTO position_permission (position_id, permission_id, department_id) VALUES (?, ?, ?)",
            )
            .bind(set.position_id)
            .bind(grant.permission_id)
            .bind(grant.department_id)
            .execute(&mut *tx)
            .await?;
        }
    }
    tx.commit().await?;
    Ok(())
}
