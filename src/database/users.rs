//! User store: typed queries against the `users` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::{classify, DatabaseError};
use crate::database::models::User;

const USER_COLUMNS: &str = "id, email, password_hash, first_name, last_name, created_at, updated_at";

/// Insert a new user. A duplicate email surfaces as
/// `DatabaseError::UniqueViolation`.
pub async fn create(pool: &PgPool, email: &str, password_hash: &str) -> Result<User, DatabaseError> {
    sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING {USER_COLUMNS}"
    ))
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
    .map_err(classify)
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, DatabaseError> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1"))
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(DatabaseError::Sqlx)
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, DatabaseError> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(DatabaseError::Sqlx)
}

/// Partial profile update: unsupplied fields keep their current value.
/// Changing the email can hit the unique constraint, reported as
/// `DatabaseError::UniqueViolation`.
pub async fn update_profile(
    pool: &PgPool,
    id: Uuid,
    email: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<User, DatabaseError> {
    sqlx::query_as::<_, User>(&format!(
        r#"
        UPDATE users
        SET email = COALESCE($2, email),
            first_name = COALESCE($3, first_name),
            last_name = COALESCE($4, last_name),
            updated_at = now()
        WHERE id = $1
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(email)
    .bind(first_name)
    .bind(last_name)
    .fetch_one(pool)
    .await
    .map_err(classify)
}
