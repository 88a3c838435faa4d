//! Profile upsert.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::put,
};

use stockroom_core::collections;
use stockroom_store::{Document, Filter};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/profile/:email", put(upsert_profile))
}

async fn upsert_profile(
    Extension(services): Extension<Arc<AppServices>>,
    Path(email): Path<String>,
    Json(body): Json<Document>,
) -> axum::response::Response {
    match services
        .store()
        .update_one(collections::PROFILE, Filter::eq("email", email), body, true)
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
