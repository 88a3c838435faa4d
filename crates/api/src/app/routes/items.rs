//! Inventory items.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};

use stockroom_core::{DocumentId, collections};
use stockroom_store::{Document, Filter};

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::CallerContext;
use crate::middleware::AuthState;

pub fn router(auth: &AuthState) -> Router {
    let require_auth =
        axum::middleware::from_fn_with_state(auth.clone(), crate::middleware::auth_middleware);

    Router::new()
        .route(
            "/item",
            post(create_item).merge(get(list_items_for_owner).layer(require_auth)),
        )
        .route("/item/:id", delete(delete_item))
}

/// Owner-scoped read: the target email must match the caller's claim.
async fn list_items_for_owner(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    Query(query): Query<dto::OwnerQuery>,
) -> axum::response::Response {
    let requested = query.email.unwrap_or_default();
    if let Err(resp) = crate::authz::require_owner(&caller, &requested) {
        return resp;
    }

    match services
        .store()
        .find(collections::ITEM, Filter::eq("email", requested))
        .await
    {
        Ok(docs) => (StatusCode::OK, Json(docs)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Document>,
) -> axum::response::Response {
    match services.store().insert_one(collections::ITEM, body).await {
        Ok(result) => (StatusCode::CREATED, Json(result)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: DocumentId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services
        .store()
        .delete_one(collections::ITEM, Filter::by_id(&id))
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
