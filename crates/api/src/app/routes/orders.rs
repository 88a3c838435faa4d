//! Orders, including the admin-wide listing.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use serde_json::{Value, json};

use stockroom_core::{DocumentId, collections};
use stockroom_store::{Document, Filter};

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::CallerContext;
use crate::middleware::AuthState;

pub fn router(auth: &AuthState, services: &Arc<AppServices>) -> Router {
    let require_auth =
        axum::middleware::from_fn_with_state(auth.clone(), crate::middleware::auth_middleware);
    let require_admin =
        axum::middleware::from_fn_with_state(services.clone(), crate::authz::admin_middleware);

    Router::new()
        .route(
            "/orders",
            post(create_order).merge(get(list_orders_for_owner).layer(require_auth.clone())),
        )
        .route(
            "/orders/:id",
            get(get_order).merge(patch(mark_order_paid).layer(require_auth.clone())),
        )
        // The admin gate runs inside the auth layer: verification first,
        // then the role lookup.
        .route(
            "/allOrders",
            get(list_all_orders)
                .layer(require_admin)
                .layer(require_auth.clone()),
        )
        .route("/allOrders/:id", delete(delete_order).layer(require_auth))
}

async fn list_orders_for_owner(
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
        .find(collections::ORDERS, Filter::eq("email", requested))
        .await
    {
        Ok(docs) => (StatusCode::OK, Json(docs)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Document>,
) -> axum::response::Response {
    match services.store().insert_one(collections::ORDERS, body).await {
        Ok(result) => (StatusCode::CREATED, Json(result)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: DocumentId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services
        .store()
        .find_one(collections::ORDERS, Filter::by_id(&id))
        .await
    {
        Ok(Some(doc)) => (StatusCode::OK, Json(doc)).into_response(),
        Ok(None) => errors::not_found_response("order"),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// Record the payment, then flag the order paid.
///
/// Two related but independently-applied document writes: if the order
/// update fails the payment record remains and the request surfaces the
/// store error. There is no compensating rollback.
async fn mark_order_paid(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::MarkPaidRequest>,
) -> axum::response::Response {
    let id: DocumentId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let transaction_id = body.transaction_id.clone();
    let payment = match services
        .store()
        .insert_one(collections::PAYMENTS, body.into_document())
        .await
    {
        Ok(result) => result,
        Err(e) => return errors::store_error_to_response(e),
    };

    let mut set = Document::new();
    set.insert("paid".to_string(), Value::Bool(true));
    set.insert("transaction_id".to_string(), Value::String(transaction_id));

    match services
        .store()
        .update_one(collections::ORDERS, Filter::by_id(&id), set, false)
        .await
    {
        Ok(order) => (
            StatusCode::OK,
            Json(json!({ "payment": payment, "order": order })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

async fn list_all_orders(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services
        .store()
        .find(collections::ORDERS, Filter::empty())
        .await
    {
        Ok(docs) => (StatusCode::OK, Json(docs)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

async fn delete_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: DocumentId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services
        .store()
        .delete_one(collections::ORDERS, Filter::by_id(&id))
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
