use axum::{
    extract::{Extension, Path},
    response::Json,
};
use uuid::Uuid;

use crate::database::bookmarks;
use crate::database::manager::DatabaseManager;
use crate::database::models::Bookmark;
use crate::error::ApiError;
use crate::middleware::CurrentUser;

/// GET /bookmark/bookmarkId/:id - single bookmark by id, scoped to the
/// authenticated owner in the query. Absent and not-owned both come back
/// as `null`; the read path is no existence oracle for foreign rows.
pub async fn show(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<Bookmark>>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let bookmark = bookmarks::find_owned(&pool, id, user.id).await?;
    Ok(Json(bookmark))
}
