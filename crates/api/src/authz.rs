//! Authorization guards applied at the request boundary.
//!
//! The pure predicates live in `stockroom-auth`; this module binds them to
//! the store lookup and the HTTP error shapes so handlers and middleware
//! stay thin.

use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use stockroom_core::collections;
use stockroom_store::{DocumentStore, Filter, doc_str};

use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::CallerContext;

/// Admin gate: the caller's user record must exist and carry the admin
/// role. One store read per invocation, no caching.
pub async fn require_admin(
    store: &dyn DocumentStore,
    caller: &CallerContext,
) -> Result<(), Response> {
    let user = store
        .find_one(collections::USER, Filter::eq("email", caller.email()))
        .await
        .map_err(errors::store_error_to_response)?;

    let Some(user) = user else {
        return Err(errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            "user not found",
        ));
    };

    stockroom_auth::require_admin_role(doc_str(&user, "role"))
        .map_err(errors::authz_error_to_response)
}

/// Owner-scoped access: the requested email must match the caller's.
pub fn require_owner(caller: &CallerContext, requested_email: &str) -> Result<(), Response> {
    stockroom_auth::require_owner(caller.email(), requested_email)
        .map_err(errors::authz_error_to_response)
}

/// Middleware form of the admin gate. Layered inside the auth middleware,
/// so the caller context is always populated by the time it runs.
pub async fn admin_middleware(
    State(services): State<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    require_admin(services.store(), &caller).await?;
    Ok(next.run(req).await)
}
