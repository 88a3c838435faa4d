use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};

pub fn router() -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health))
}

async fn liveness() -> impl IntoResponse {
    "stockroom warehouse server is running"
}

async fn health() -> StatusCode {
    StatusCode::OK
}
