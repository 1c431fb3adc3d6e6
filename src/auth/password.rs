//! Password hashing and verification (Argon2id).
//!
//! Hashes are PHC-format strings (`$argon2id$v=19$...`) with a fresh random
//! salt per call, stored in the `password_hash` column of `users`.
//! Verification parses the stored string, so parameter changes only affect
//! newly created hashes.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hash(argon2::password_hash::Error),

    #[error("stored password hash is malformed: {0}")]
    MalformedHash(argon2::password_hash::Error),
}

/// Hash a password with the default Argon2id parameters and a random salt.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(PasswordError::Hash)
}

/// Verify a password against a stored PHC-format hash.
///
/// Returns `Ok(false)` on mismatch; `Err` only when the stored hash itself
/// cannot be parsed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(PasswordError::MalformedHash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trips() {
        let hash = hash_password("12345").unwrap();
        assert!(verify_password("12345", &hash).unwrap());
        assert!(!verify_password("54321", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        // Random salt per call; both must still verify.
        let first = hash_password("12345").unwrap();
        let second = hash_password("12345").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("12345", &first).unwrap());
        assert!(verify_password("12345", &second).unwrap());
    }

    #[test]
    fn hash_is_phc_format_argon2id() {
        let hash = hash_password("12345").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        assert!(verify_password("12345", "not-a-phc-string").is_err());
    }
}
