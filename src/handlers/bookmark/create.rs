use axum::{extract::Extension, http::StatusCode, response::Json};

use crate::database::bookmarks;
use crate::database::manager::DatabaseManager;
use crate::database::models::Bookmark;
use crate::error::ApiError;
use crate::handlers::utils::ValidJson;
use crate::middleware::CurrentUser;

use super::CreateBookmarkBody;

/// POST /bookmark - create a bookmark owned by the authenticated user.
pub async fn create(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ValidJson(body): ValidJson<CreateBookmarkBody>,
) -> Result<(StatusCode, Json<Bookmark>), ApiError> {
    body.validate()?;

    let pool = DatabaseManager::pool().await?;
    let bookmark = bookmarks::create(
        &pool,
        user.id,
        &body.title,
        &body.link,
        body.description.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(bookmark)))
}
