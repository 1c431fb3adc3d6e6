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
use crate::handlers::utils::ValidJson;
use crate::middleware::CurrentUser;

use super::UpdateBookmarkBody;

/// PUT /bookmark/:id - partial update, owner only. Loads the row
/// unscoped first so a missing id is 404 while someone else's row is 403.
pub async fn update(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    ValidJson(body): ValidJson<UpdateBookmarkBody>,
) -> Result<Json<Bookmark>, ApiError> {
    body.validate()?;

    let pool = DatabaseManager::pool().await?;
    let existing = bookmarks::find_by_id(&pool, id).await?;
    let bookmark = ownership::require_owner(existing, user.id)?;

    let updated = bookmarks::update(
        &pool,
        bookmark.id,
        body.title.as_deref(),
        body.link.as_deref(),
        body.description.as_deref(),
    )
    .await?;

    Ok(Json(updated))
}
