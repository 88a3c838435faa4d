//! Supplier and review listings.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use stockroom_core::collections;
use stockroom_store::Filter;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/supplier", get(list_suppliers))
        .route("/review", get(list_reviews))
}

async fn list_suppliers(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    list_collection(&services, collections::SUPPLIER).await
}

async fn list_reviews(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    list_collection(&services, collections::REVIEW).await
}

async fn list_collection(
    services: &AppServices,
    collection: &str,
) -> axum::response::Response {
    match services.store().find(collection, Filter::empty()).await {
        Ok(docs) => (StatusCode::OK, Json(docs)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
