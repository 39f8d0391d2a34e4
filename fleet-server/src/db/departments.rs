//! Department Repository

use super::{RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{Department, DepartmentCreate, DepartmentUpdate};
use shared::util::now_millis;
use sqlx::SqlitePool;

const SELECT: &str =
    "SELECT id, printf('D%03d', id) AS formatted_id, name, created_at FROM department";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Department>> {
    let departments = sqlx::query_as::<_, Department>(&format!("{SELECT} ORDER BY name"))
        .fetch_all(pool)
        .await?;
    Ok(departments)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Department>> {
    let department = sqlx::query_as::<_, Department>(&format!("{SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(department)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Department>> {
    let department = sqlx::query_as::<_, Department>(&format!("{SELECT} WHERE name = ? LIMIT 1"))
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(department)
}

pub async fn create(pool: &SqlitePool, data: DepartmentCreate) -> RepoResult<Department> {
    if find_by_name(pool, &data.name).await?.is_some() {
        return Err(RepoError::Business(
            ErrorCode::DepartmentNameExists,
            format!("Department '{}' already exists", data.name),
        ));
    }

    let id: i64 =
        sqlx::query_scalar("INSERT INTO department (name, created_at) VALUES (?, ?) RETURNING id")
            .bind(&data.name)
            .bind(now_millis())
            .fetch_one(pool)
            .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create department".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: DepartmentUpdate) -> RepoResult<Department> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Business(
            ErrorCode::DepartmentNotFound,
            format!("Department {id} not found"),
        ))?;

    if let Some(ref new_name) = data.name
        && new_name != &existing.name
        && find_by_name(pool, new_name).await?.is_some()
    {
        return Err(RepoError::Business(
            ErrorCode::DepartmentNameExists,
            format!("Department '{new_name}' already exists"),
        ));
    }

    sqlx::query("UPDATE department SET name = COALESCE(?1, name) WHERE id = ?2")
        .bind(&data.name)
        .bind(id)
        .execute(pool)
        .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Department {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Business(
            ErrorCode::DepartmentNotFound,
            format!("Department {id} not found"),
        ))?;

    // Usage check: employees and department-scoped grants
    let employees: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM employee WHERE department_id = ?")
            .bind(id)
            .fetch_one(pool)
            .await?;
    if employees > 0 {
        return Err(RepoError::Business(
            ErrorCode::DepartmentInUse,
            format!("Department is referenced by {employees} employee(s)"),
        ));
    }

    let grants: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM position_permission WHERE department_id = ?")
            .bind(id)
            .fetch_one(pool)
            .await?;
    if grants > 0 {
        return Err(RepoError::Business(
            ErrorCode::DepartmentInUse,
            format!("Department is referenced by {grants} permission grant(s)"),
        ));
    }

    sqlx::query("DELETE FROM department WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(true)
}
