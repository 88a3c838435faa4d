use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity token claims (transport-agnostic).
///
/// This is the full payload a token carries once decoded: the principal's
/// email, an optional role, and the issuance/expiry window as unix
/// timestamps (the JWT-native representation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Principal identity. Also the ownership key for scoped reads.
    pub email: String,

    /// Role granted to the principal, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Issued-at (unix seconds).
    pub iat: i64,

    /// Expiry (unix seconds).
    pub exp: i64,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VerificationError {
    #[error("token has expired")]
    Expired,

    #[error("invalid token")]
    Invalid,
}

/// Deterministically validate a claims window against `now`.
///
/// Signature verification / decoding happens in [`crate::token`]; this
/// checks only the time window, so expiry behavior is testable without a
/// wall clock.
pub fn validate_claims(claims: &Claims, now: DateTime<Utc>) -> Result<(), VerificationError> {
    if claims.exp <= claims.iat {
        return Err(VerificationError::Invalid);
    }
    if now.timestamp() >= claims.exp {
        return Err(VerificationError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn claims(iat: i64, exp: i64) -> Claims {
        Claims {
            email: "a@x.com".to_string(),
            role: None,
            iat,
            exp,
        }
    }

    #[test]
    fn accepts_claims_inside_window() {
        let now = Utc.timestamp_opt(1_000, 0).unwrap();
        assert_eq!(validate_claims(&claims(500, 2_000), now), Ok(()));
    }

    #[test]
    fn rejects_expired_claims() {
        let now = Utc.timestamp_opt(2_000, 0).unwrap();
        assert_eq!(
            validate_claims(&claims(500, 2_000), now),
            Err(VerificationError::Expired)
        );
    }

    #[test]
    fn rejects_inverted_window() {
        let now = Utc.timestamp_opt(1_000, 0).unwrap();
        assert_eq!(
            validate_claims(&claims(2_000, 500), now),
            Err(VerificationError::Invalid)
        );
    }

    proptest! {
        // A well-formed window accepts exactly the instants in [iat, exp).
        #[test]
        fn window_accepts_iff_now_before_exp(iat in 0i64..10_000, len in 1i64..10_000, offset in 0i64..20_000) {
            let exp = iat + len;
            let now = Utc.timestamp_opt(offset, 0).unwrap();
            let verdict = validate_claims(&claims(iat, exp), now);
            if offset >= exp {
                prop_assert_eq!(verdict, Err(VerificationError::Expired));
            } else {
                prop_assert_eq!(verdict, Ok(()));
            }
        }
    }
}
