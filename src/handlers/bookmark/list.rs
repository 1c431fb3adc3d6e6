use axum::{extract::Extension, response::Json};

use crate::database::bookmarks;
use crate::database::manager::DatabaseManager;
use crate::database::models::Bookmark;
use crate::error::ApiError;
use crate::middleware::CurrentUser;

/// GET /bookmark/user - all bookmarks owned by the authenticated user.
pub async fn list(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<Bookmark>>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let bookmarks = bookmarks::list_by_owner(&pool, user.id).await?;
    Ok(Json(bookmarks))
}
