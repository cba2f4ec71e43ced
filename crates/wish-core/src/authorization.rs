//! Ownership guard
//!
//! Every mutating action on a wishlist (or anything hanging off one) is only
//! allowed for the wishlist's owner. Callers resolve the owner id from storage
//! and pass it here together with the acting user.

use uuid::Uuid;

use crate::error::DomainError;

/// Outcome of an ownership check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny,
}

impl AccessDecision {
    #[inline]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Compare the resource owner with the acting user
#[inline]
pub fn check_owner(resource_owner_id: Uuid, acting_user_id: Uuid) -> AccessDecision {
    if resource_owner_id == acting_user_id {
        AccessDecision::Allow
    } else {
        AccessDecision::Deny
    }
}

/// Ownership check as a `Result`, for use with `?`
pub fn authorize_owner(resource_owner_id: Uuid, acting_user_id: Uuid) -> Result<(), DomainError> {
    match check_owner(resource_owner_id, acting_user_id) {
        AccessDecision::Allow => Ok(()),
        AccessDecision::Deny => Err(DomainError::NotWishlistOwner),
    }
}
