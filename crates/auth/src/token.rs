//! Token issuance and verification (HS256).

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use crate::claims::{Claims, VerificationError, validate_claims};

/// Role string that grants access through the admin gate.
pub const ADMIN_ROLE: &str = "admin";

/// Token lifetime: 1 day.
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token encoding failed: {0}")]
    Encode(String),
}

/// Signs and verifies identity tokens.
///
/// `verify` takes `now` explicitly so the expiry check is deterministic;
/// implementations must never return claims whose window fails at `now`.
pub trait TokenCodec: Send + Sync {
    fn issue(
        &self,
        email: &str,
        role: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError>;

    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, VerificationError>;
}

/// HS256 codec over a shared secret.
pub struct Hs256TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl Hs256TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked by `validate_claims` against the caller's `now`,
        // not the library's wall clock.
        validation.validate_exp = false;
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl TokenCodec for Hs256TokenCodec {
    fn issue(
        &self,
        email: &str,
        role: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            email: email.to_string(),
            role: role.map(str::to_string),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Encode(e.to_string()))
    }

    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, VerificationError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|_| VerificationError::Invalid)?;
        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}
