use axum::response::Json;
use serde_json::{json, Value};

use crate::auth::{self, password, Claims};
use crate::database::manager::DatabaseManager;
use crate::database::users;
use crate::error::ApiError;
use crate::handlers::utils::ValidJson;

use super::CredentialsBody;

/// POST /auth/login - verify credentials and mint a bearer token.
///
/// Unknown email and wrong password take the same `InvalidCredential`
/// exit so the response never says which half failed.
pub async fn login(ValidJson(body): ValidJson<CredentialsBody>) -> Result<Json<Value>, ApiError> {
    body.validate()?;

    let pool = DatabaseManager::pool().await?;
    let user = users::find_by_email(&pool, &body.email)
        .await?
        .ok_or(ApiError::InvalidCredential)?;

    if !password::verify_password(&body.password, &user.password_hash)? {
        return Err(ApiError::InvalidCredential);
    }

    let claims = Claims::new(user.id, user.email);
    let token = auth::generate_token(&claims)?;

    Ok(Json(json!({ "access_token": token })))
}
