//! Shared request-validation pieces for handler DTOs.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::error::ApiError;

/// JSON body extractor that surfaces parse failures as 400 before any
/// handler logic runs. Axum's stock `Json` rejection splits across 400,
/// 415, and 422; the API contract wants a single "invalid body" status.
pub struct ValidJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => Err(ApiError::bad_request(rejection.body_text())),
        }
    }
}

/// Shape check only: something before and after an '@', and a dot in the
/// domain part. Full address validation is the mail server's problem.
pub fn validate_email_format(email: &str) -> Result<(), ApiError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        let mut field_errors = HashMap::new();
        field_errors.insert("email".to_string(), "Invalid email format".to_string());
        Err(ApiError::validation_error("Invalid email format", Some(field_errors)))
    }
}

/// Reject empty or whitespace-only required string fields.
pub fn validate_non_empty(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), "This field cannot be empty".to_string());
        return Err(ApiError::validation_error(
            format!("Field '{}' cannot be empty", field),
            Some(field_errors),
        ));
    }
    Ok(())
}
