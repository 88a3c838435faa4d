use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use stockroom_auth::TokenCodec;

use crate::app::errors;
use crate::context::CallerContext;

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<dyn TokenCodec>,
}

/// Token-verification middleware.
///
/// No usable bearer credential → 401 before verification is attempted.
/// A credential that fails verification → 403, and the wrapped handler
/// never runs. Only on success is the caller context attached and the
/// request allowed through.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer(req.headers())?;

    let claims = match state.tokens.verify(token, Utc::now()) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!(error = %e, "token verification failed");
            return Err(errors::json_error(
                StatusCode::FORBIDDEN,
                "forbidden",
                "Forbidden access",
            ));
        }
    };

    req.extensions_mut()
        .insert(CallerContext::from_claims(&claims));

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, Response> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(unauthorized)?;

    let header = header.to_str().map_err(|_| unauthorized())?;

    let header = header.strip_prefix("Bearer ").ok_or_else(unauthorized)?;

    let token = header.trim();
    if token.is_empty() {
        return Err(unauthorized());
    }

    Ok(token)
}

fn unauthorized() -> Response {
    errors::json_error(StatusCode::UNAUTHORIZED, "unauthorized", "unauthorized")
}
