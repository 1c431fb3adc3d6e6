use axum::{http::StatusCode, response::Json};

use crate::auth::password;
use crate::database::manager::DatabaseManager;
use crate::database::models::User;
use crate::database::users;
use crate::error::ApiError;
use crate::handlers::utils::ValidJson;

use super::CredentialsBody;

/// POST /auth/register - create an account from an email + password pair.
///
/// A duplicate email comes back as 403 (CREDENTIAL_TAKEN) via the store's
/// unique-violation mapping; the created user serializes without its
/// password hash.
pub async fn register(
    ValidJson(body): ValidJson<CredentialsBody>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    body.validate()?;

    let password_hash = password::hash_password(&body.password)?;

    let pool = DatabaseManager::pool().await?;
    let user = users::create(&pool, &body.email, &password_hash).await?;

    tracing::info!("registered user {}", user.id);
    Ok((StatusCode::CREATED, Json(user)))
}
