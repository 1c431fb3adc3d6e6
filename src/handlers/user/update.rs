use axum::{extract::Extension, response::Json};
use serde::Deserialize;

use crate::database::manager::DatabaseManager;
use crate::database::models::User;
use crate::database::users;
use crate::error::ApiError;
use crate::handlers::utils::{self, ValidJson};
use crate::middleware::CurrentUser;

/// Partial profile update; absent fields are left unchanged.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserBody {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UpdateUserBody {
    fn validate(&self) -> Result<(), ApiError> {
        if let Some(email) = &self.email {
            utils::validate_email_format(email)?;
        }
        Ok(())
    }
}

/// PUT /user - update the authenticated user's own row. The target id
/// comes from the auth guard, never from the client.
pub async fn update(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ValidJson(body): ValidJson<UpdateUserBody>,
) -> Result<Json<User>, ApiError> {
    body.validate()?;

    let pool = DatabaseManager::pool().await?;
    let updated = users::update_profile(
        &pool,
        user.id,
        body.email.as_deref(),
        body.first_name.as_deref(),
        body.last_name.as_deref(),
    )
    .await?;

    Ok(Json(updated))
}
