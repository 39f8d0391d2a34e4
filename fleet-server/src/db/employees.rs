//! Employee Repository
//!
//! The API-facing `Employee` row is a join (position/department names);
//! credential lookups use the internal [`EmployeeAuth`] row, which is the
//! only place the password hash leaves the database.

use super::{RepoError, RepoResult};
use crate::auth::password;
use shared::error::ErrorCode;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, UserAccount, UserAccountUpdate};
use shared::util::now_millis;
use sqlx::SqlitePool;

const SELECT: &str = r#"
SELECT e.id, printf('E%03d', e.id) AS formatted_id, e.username, e.name, e.phone,
       e.position_id, p.name AS position_name,
       e.department_id, d.name AS department_name,
       e.is_active, e.created_at
FROM employee e
JOIN position p ON p.id = e.position_id
JOIN department d ON d.id = e.department_id
"#;

/// Internal row for credential verification; never serialized
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EmployeeAuth {
    pub id: i64,
    pub hash_pass: String,
    pub is_active: bool,
}

pub async fn find_all(pool: &SqlitePool, include_inactive: bool) -> RepoResult<Vec<Employee>> {
    let sql = if include_inactive {
        format!("{SELECT} ORDER BY e.username")
    } else {
        format!("{SELECT} WHERE e.is_active = 1 ORDER BY e.username")
    };
    let employees = sqlx::query_as::<_, Employee>(&sql).fetch_all(pool).await?;
    Ok(employees)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(&format!("{SELECT} WHERE e.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(employee)
}

pub async fn find_auth_by_username(
    pool: &SqlitePool,
    username: &str,
) -> RepoResult<Option<EmployeeAuth>> {
    let auth = sqlx::query_as::<_, EmployeeAuth>(
        "SELECT id, hash_pass, is_active FROM employee WHERE username = ? LIMIT 1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(auth)
}

async fn username_taken(pool: &SqlitePool, username: &str) -> RepoResult<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee WHERE username = ?")
        .bind(username)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    if username_taken(pool, &data.username).await? {
        return Err(RepoError::Business(
            ErrorCode::EmployeeUsernameExists,
            format!("Username '{}' already exists", data.username),
        ));
    }

    // Referenced reference data must exist
    super::positions::find_by_id(pool, data.position_id)
        .await?
        .ok_or_else(|| RepoError::Business(
            ErrorCode::PositionNotFound,
            format!("Position {} not found", data.position_id),
        ))?;
    super::departments::find_by_id(pool, data.department_id)
        .await?
        .ok_or_else(|| RepoError::Business(
            ErrorCode::DepartmentNotFound,
            format!("Department {} not found", data.department_id),
        ))?;

    let hash_pass = password::hash_password(&data.password)
        .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?;

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO employee (username, hash_pass, name, phone, position_id, department_id, is_active, created_at)
        VALUES (?, ?, ?, ?, ?, ?, 1, ?)
        RETURNING id
        "#,
    )
    .bind(&data.username)
    .bind(&hash_pass)
    .bind(&data.name)
    .bind(&data.phone)
    .bind(data.position_id)
    .bind(data.department_id)
    .bind(now_millis())
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Business(
            ErrorCode::EmployeeNotFound,
            format!("Employee {id} not found"),
        ))?;

    if let Some(ref new_username) = data.username
        && new_username != &existing.username
        && username_taken(pool, new_username).await?
    {
        return Err(RepoError::Business(
            ErrorCode::EmployeeUsernameExists,
            format!("Username '{new_username}' already exists"),
        ));
    }

    if let Some(position_id) = data.position_id {
        super::positions::find_by_id(pool, position_id)
            .await?
            .ok_or_else(|| RepoError::Business(
                ErrorCode::PositionNotFound,
                format!("Position {position_id} not found"),
            ))?;
    }
    if let Some(department_id) = data.department_id {
        super::departments::find_by_id(pool, department_id)
            .await?
            .ok_or_else(|| RepoError::Business(
                ErrorCode::DepartmentNotFound,
                format!("Department {department_id} not found"),
            ))?;
    }

    let hash_pass = match data.password.as_deref() {
        Some(p) => Some(
            password::hash_password(p)
                .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?,
        ),
        None => None,
    };

    sqlx::query(
        r#"
        UPDATE employee SET
            username = COALESCE(?1, username),
            hash_pass = COALESCE(?2, hash_pass),
            name = COALESCE(?3, name),
            phone = COALESCE(?4, phone),
            position_id = COALESCE(?5, position_id),
            department_id = COALESCE(?6, department_id),
            is_active = COALESCE(?7, is_active)
        WHERE id = ?8
        "#,
    )
    .bind(&data.username)
    .bind(&hash_pass)
    .bind(&data.name)
    .bind(&data.phone)
    .bind(data.position_id)
    .bind(data.department_id)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Business(
            ErrorCode::EmployeeNotFound,
            format!("Employee {id} not found"),
        ))?;

    let trips: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schedule WHERE driver_id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    if trips > 0 {
        return Err(RepoError::Business(
            ErrorCode::EmployeeIsDriver,
            format!("Employee is assigned to {trips} schedule entries"),
        ));
    }

    sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(true)
}

// ── Account view (/api/users) ──

pub async fn list_accounts(pool: &SqlitePool) -> RepoResult<Vec<UserAccount>> {
    let accounts = sqlx::query_as::<_, UserAccount>(
        r#"
        SELECT e.id, e.username, e.name, p.name AS position_name, e.is_active
        FROM employee e
        JOIN position p ON p.id = e.position_id
        ORDER BY e.username
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(accounts)
}

pub async fn update_account(
    pool: &SqlitePool,
    id: i64,
    data: UserAccountUpdate,
) -> RepoResult<UserAccount> {
    let patch = EmployeeUpdate {
        username: data.username,
        password: data.password,
        name: None,
        phone: None,
        position_id: None,
        department_id: None,
        is_active: data.is_active,
    };
    update(pool, id, patch).await?;

    let account = sqlx::query_as::<_, UserAccount>(
        r#"
        SELECT e.id, e.username, e.name, p.name AS position_name, e.is_active
        FROM employee e
        JOIN position p ON p.id = e.position_id
        WHERE e.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))?;
    Ok(account)
}
