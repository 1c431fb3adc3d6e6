use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth;
use crate::database::manager::DatabaseManager;
use crate::database::models::User;
use crate::database::users;
use crate::error::ApiError;

/// Identity resolved by the auth guard, available to handlers via request
/// extensions.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// Bearer-token guard applied to every protected route.
pub async fn require_auth(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = resolve_identity(&headers).await?;
    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}

/// Explicit verification step: bearer token -> live user row.
///
/// The signed claims are only a hint. The account is re-fetched so a user
/// deleted after issuance cannot keep authenticating with an unexpired
/// token.
pub async fn resolve_identity(headers: &HeaderMap) -> Result<User, ApiError> {
    let token = extract_bearer_token(headers)?;
    let claims = auth::verify_token(&token)?;

    let pool = DatabaseManager::pool().await?;
    users::find_by_id(&pool, claims.sub)
        .await?
        .ok_or_else(|| {
            tracing::warn!("token subject {} no longer exists", claims.sub);
            ApiError::unauthorized("Unknown user")
        })
}

/// Extract the token from an `Authorization: Bearer <token>` header.
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header format"))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthorized("Authorization header must use Bearer token format"))?;

    if token.trim().is_empty() {
        return Err(ApiError::unauthorized("Empty bearer token"));
    }

    Ok(token.to_string())
}
