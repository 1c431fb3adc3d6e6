use axum::{
    extract::{Extension, Path},
    response::Json,
};
use uuid::Uuid;

use crate::auth::ownership;
use crate::database::bookmarks;
use crate::database::manager::DatabaseManager;
use crate::database::models::Bookmark;
use crate::error::ApiError;
use crate::middleware::CurrentUser;

/// DELETE /bookmark/bookmarkId/:id - owner only; responds with the
/// deleted row. Same 404/403 split as the update path.
pub async fn remove(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Bookmark>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let existing = bookmarks::find_by_id(&pool, id).await?;
    let bookmark = ownership::require_owner(existing, user.id)?;

    let deleted = bookmarks::delete(&pool, bookmark.id).await?;
    tracing::info!("user {} deleted bookmark {}", user.id, deleted.id);

    Ok(Json(deleted))
}
