//! Per-resource ownership enforcement.
//!
//! Mutating operations on a bookmark must distinguish "no such row" (404)
//! from "exists but belongs to someone else" (403), so the check is a
//! separate step after the load rather than a filter folded into the query.

use uuid::Uuid;

use crate::error::ApiError;

/// Resources that record an owning user.
pub trait Owned {
    fn owner_id(&self) -> Uuid;
}

/// Outcome of an ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Allowed,
    NotFound,
    Forbidden,
}

/// Check a loaded resource against the authenticated identity.
pub fn check_ownership<R: Owned>(resource: Option<&R>, identity: Uuid) -> Ownership {
    match resource {
        None => Ownership::NotFound,
        Some(r) if r.owner_id() == identity => Ownership::Allowed,
        Some(_) => Ownership::Forbidden,
    }
}

/// Run the ownership check and convert rejections into their boundary
/// errors, handing the resource back on success. Shared by the bookmark
/// update and delete paths.
pub fn require_owner<R: Owned>(resource: Option<R>, identity: Uuid) -> Result<R, ApiError> {
    match resource {
        None => Err(ApiError::not_found("Record not found")),
        Some(r) => match check_ownership(Some(&r), identity) {
            Ownership::Forbidden => Err(ApiError::forbidden("Access to resource denied")),
            _ => Ok(r),
        },
    }
}
