use axum::{extract::Extension, response::Json};

use crate::database::models::User;
use crate::middleware::CurrentUser;

/// GET /user - the authenticated account, as resolved by the auth guard.
pub async fn show(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<User> {
    Json(user)
}
