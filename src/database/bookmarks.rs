//! Bookmark store: typed queries against the `bookmarks` table.
//!
//! `find_owned` scopes by owner inside the query (the read path reveals
//! nothing about foreign rows); `find_by_id` loads unscoped so mutation
//! handlers can run the explicit ownership check afterwards.

use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::Bookmark;

const BOOKMARK_COLUMNS: &str = "id, user_id, title, link, description, created_at, updated_at";

pub async fn create(
    pool: &PgPool,
    owner: Uuid,
    title: &str,
    link: &str,
    description: Option<&str>,
) -> Result<Bookmark, DatabaseError> {
    sqlx::query_as::<_, Bookmark>(&format!(
        r#"
        INSERT INTO bookmarks (user_id, title, link, description)
        VALUES ($1, $2, $3, $4)
        RETURNING {BOOKMARK_COLUMNS}
        "#
    ))
    .bind(owner)
    .bind(title)
    .bind(link)
    .bind(description)
    .fetch_one(pool)
    .await
    .map_err(DatabaseError::Sqlx)
}

pub async fn list_by_owner(pool: &PgPool, owner: Uuid) -> Result<Vec<Bookmark>, DatabaseError> {
    sqlx::query_as::<_, Bookmark>(&format!(
        "SELECT {BOOKMARK_COLUMNS} FROM bookmarks WHERE user_id = $1 ORDER BY created_at"
    ))
    .bind(owner)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::Sqlx)
}

/// Owner-scoped single read: absent and not-owned are indistinguishable.
pub async fn find_owned(
    pool: &PgPool,
    id: Uuid,
    owner: Uuid,
) -> Result<Option<Bookmark>, DatabaseError> {
    sqlx::query_as::<_, Bookmark>(&format!(
        "SELECT {BOOKMARK_COLUMNS} FROM bookmarks WHERE id = $1 AND user_id = $2"
    ))
    .bind(id)
    .bind(owner)
    .fetch_optional(pool)
    .await
    .map_err(DatabaseError::Sqlx)
}

/// Unscoped load for the mutation paths, which must tell 404 from 403.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Bookmark>, DatabaseError> {
    sqlx::query_as::<_, Bookmark>(&format!(
        "SELECT {BOOKMARK_COLUMNS} FROM bookmarks WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(DatabaseError::Sqlx)
}

/// Partial update: unsupplied fields keep their current value.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    title: Option<&str>,
    link: Option<&str>,
    description: Option<&str>,
) -> Result<Bookmark, DatabaseError> {
    sqlx::query_as::<_, Bookmark>(&format!(
        r#"
        UPDATE bookmarks
        SET title = COALESCE($2, title),
            link = COALESCE($3, link),
            description = COALESCE($4, description),
            updated_at = now()
        WHERE id = $1
        RETURNING {BOOKMARK_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(title)
    .bind(link)
    .bind(description)
    .fetch_one(pool)
    .await
    .map_err(DatabaseError::Sqlx)
}

/// Delete a bookmark, returning the removed row.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<Bookmark, DatabaseError> {
    sqlx::query_as::<_, Bookmark>(&format!(
        "DELETE FROM bookmarks WHERE id = $1 RETURNING {BOOKMARK_COLUMNS}"
    ))
    .bind(id)
    .fetch_one(pool)
    .await
    .map_err(DatabaseError::Sqlx)
}
