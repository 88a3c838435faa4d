//! Warehouse location ("management") records.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use serde_json::Value;

use stockroom_core::{DocumentId, collections};
use stockroom_store::{Document, Filter};

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::middleware::AuthState;

pub fn router(auth: &AuthState) -> Router {
    let require_auth =
        axum::middleware::from_fn_with_state(auth.clone(), crate::middleware::auth_middleware);

    Router::new()
        .route(
            "/management",
            get(list_management).post(create_management),
        )
        .route(
            "/management/:id",
            get(get_management)
                .put(update_quantity)
                .merge(delete(delete_management).layer(require_auth)),
        )
}

async fn list_management(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services
        .store()
        .find(collections::MANAGEMENT, Filter::empty())
        .await
    {
        Ok(docs) => (StatusCode::OK, Json(docs)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

async fn get_management(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: DocumentId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services
        .store()
        .find_one(collections::MANAGEMENT, Filter::by_id(&id))
        .await
    {
        Ok(Some(doc)) => (StatusCode::OK, Json(doc)).into_response(),
        Ok(None) => errors::not_found_response("management record"),
        Err(e) => errors::store_error_to_response(e),
    }
}

async fn create_management(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Document>,
) -> axum::response::Response {
    match services
        .store()
        .insert_one(collections::MANAGEMENT, body)
        .await
    {
        Ok(result) => (StatusCode::CREATED, Json(result)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// Restock/draw-down: replace the quantity field, creating the record when
/// it does not exist yet.
async fn update_quantity(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateQuantityRequest>,
) -> axum::response::Response {
    let id: DocumentId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let mut set = Document::new();
    set.insert("quantity".to_string(), Value::from(body.quantity));

    match services
        .store()
        .update_one(collections::MANAGEMENT, Filter::by_id(&id), set, true)
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

async fn delete_management(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: DocumentId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services
        .store()
        .delete_one(collections::MANAGEMENT, Filter::by_id(&id))
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
