use stockroom_auth::Claims;

/// Caller context for a request (authenticated identity).
///
/// Inserted into request extensions by the auth middleware **only** after
/// token verification succeeded; a handler that can extract this saw a
/// valid token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerContext {
    email: String,
    role: Option<String>,
}

impl CallerContext {
    pub fn new(email: String, role: Option<String>) -> Self {
        Self { email, role }
    }

    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            email: claims.email.clone(),
            role: claims.role.clone(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }
}
