//! `stockroom-auth` — authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it issues
//! and verifies identity tokens and exposes pure capability checks. Where
//! the role behind a check lives (the `user` collection) is the caller's
//! concern.

pub mod authorize;
pub mod claims;
pub mod token;

pub use authorize::{AuthzError, require_admin_role, require_owner};
pub use claims::{Claims, VerificationError, validate_claims};
pub use token::{Hs256TokenCodec, TokenCodec, TokenError, ADMIN_ROLE, TOKEN_TTL_SECS};
