//! Pure authorization predicates (capability checks).
//!
//! These are deliberately free of HTTP and storage so the API layer can
//! compose them at the boundary and tests can exercise them directly.
//! - No IO
//! - No panics

use thiserror::Error;

use crate::token::ADMIN_ROLE;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthzError {
    /// An owner-scoped read targeted a different principal's records.
    #[error("Forbidden access")]
    OwnerMismatch,

    /// A role-gated operation was attempted without the required role.
    #[error("Forbidden")]
    MissingRole,
}

/// Owner-scoped access: the requested email must equal the authenticated
/// principal's email claim.
pub fn require_owner(claims_email: &str, requested_email: &str) -> Result<(), AuthzError> {
    if claims_email == requested_email {
        Ok(())
    } else {
        Err(AuthzError::OwnerMismatch)
    }
}

/// Admin gate: the role on record must be exactly `admin`.
///
/// The caller supplies the role from the user record, not from the token;
/// promotion takes effect without re-issuing tokens.
pub fn require_admin_role(role: Option<&str>) -> Result<(), AuthzError> {
    match role {
        Some(r) if r == ADMIN_ROLE => Ok(()),
        _ => Err(AuthzError::MissingRole),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_match_is_allowed() {
        assert_eq!(require_owner("a@x.com", "a@x.com"), Ok(()));
    }

    #[test]
    fn owner_mismatch_is_forbidden() {
        assert_eq!(
            require_owner("b@x.com", "a@x.com"),
            Err(AuthzError::OwnerMismatch)
        );
        assert_eq!(require_owner("b@x.com", ""), Err(AuthzError::OwnerMismatch));
    }

    #[test]
    fn admin_role_passes_the_gate() {
        assert_eq!(require_admin_role(Some("admin")), Ok(()));
    }

    #[test]
    fn other_or_absent_roles_are_forbidden() {
        assert_eq!(
            require_admin_role(Some("viewer")),
            Err(AuthzError::MissingRole)
        );
        assert_eq!(require_admin_role(None), Err(AuthzError::MissingRole));
    }
}
