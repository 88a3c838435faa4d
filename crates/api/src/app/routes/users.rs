//! User records, token issuance, and role management.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use chrono::Utc;
use serde_json::{Value, json};

use stockroom_auth::{ADMIN_ROLE, require_admin_role};
use stockroom_core::collections;
use stockroom_store::{Document, Filter, doc_str};

use crate::app::errors;
use crate::app::services::AppServices;
use crate::middleware::AuthState;

pub fn router(auth: &AuthState, services: &Arc<AppServices>) -> Router {
    let require_auth =
        axum::middleware::from_fn_with_state(auth.clone(), crate::middleware::auth_middleware);
    let require_admin =
        axum::middleware::from_fn_with_state(services.clone(), crate::authz::admin_middleware);

    Router::new()
        .route("/users", get(list_users).layer(require_auth.clone()))
        .route("/user/:email", put(upsert_user))
        .route(
            "/user/admin/:email",
            put(promote_to_admin)
                .layer(require_admin)
                .layer(require_auth),
        )
        .route("/admin/:email", get(is_admin))
}

async fn list_users(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services
        .store()
        .find(collections::USER, Filter::empty())
        .await
    {
        Ok(docs) => (StatusCode::OK, Json(docs)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// Login/registration: upsert the user record keyed by email and hand back
/// a fresh identity token. A token is issued even when the upsert changed
/// nothing.
async fn upsert_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(email): Path<String>,
    Json(body): Json<Document>,
) -> axum::response::Response {
    let role = doc_str(&body, "role").map(str::to_string);

    let result = match services
        .store()
        .update_one(collections::USER, Filter::eq("email", email.clone()), body, true)
        .await
    {
        Ok(result) => result,
        Err(e) => return errors::store_error_to_response(e),
    };

    let token = match services.tokens().issue(&email, role.as_deref(), Utc::now()) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "token issuance failed");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "token_error",
                e.to_string(),
            );
        }
    };

    (
        StatusCode::OK,
        Json(json!({ "result": result, "token": token })),
    )
        .into_response()
}

async fn promote_to_admin(
    Extension(services): Extension<Arc<AppServices>>,
    Path(email): Path<String>,
) -> axum::response::Response {
    let mut set = Document::new();
    set.insert("role".to_string(), Value::String(ADMIN_ROLE.to_string()));

    match services
        .store()
        .update_one(collections::USER, Filter::eq("email", email), set, false)
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

async fn is_admin(
    Extension(services): Extension<Arc<AppServices>>,
    Path(email): Path<String>,
) -> axum::response::Response {
    match services
        .store()
        .find_one(collections::USER, Filter::eq("email", email))
        .await
    {
        Ok(user) => {
            let admin = require_admin_role(
                user.as_ref().and_then(|u| doc_str(u, "role")),
            )
            .is_ok();
            (StatusCode::OK, Json(json!({ "admin": admin }))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}
