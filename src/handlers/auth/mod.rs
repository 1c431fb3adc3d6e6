mod login;
mod register;

pub use login::login;
pub use register::register;

use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::utils;

/// Credentials body shared by register and login.
#[derive(Debug, Deserialize)]
pub struct CredentialsBody {
    pub email: String,
    pub password: String,
}

impl CredentialsBody {
    pub fn validate(&self) -> Result<(), ApiError> {
        utils::validate_email_format(&self.email)?;
        utils::validate_non_empty("password", &self.password)
    }
}
