//! Payment records and gateway payment intents.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{patch, post},
};
use serde_json::{Value, json};

use stockroom_core::{DocumentId, collections};
use stockroom_payments::minor_units;
use stockroom_store::{Document, Filter};

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::middleware::AuthState;

const CURRENCY: &str = "usd";

pub fn router(auth: &AuthState) -> Router {
    let require_auth =
        axum::middleware::from_fn_with_state(auth.clone(), crate::middleware::auth_middleware);

    Router::new()
        .route(
            "/payments/:id",
            patch(update_shipment_status).layer(require_auth.clone()),
        )
        .route(
            "/create-payment-intent",
            post(create_payment_intent).layer(require_auth),
        )
}

async fn update_shipment_status(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ShipmentStatusRequest>,
) -> axum::response::Response {
    let id: DocumentId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if !dto::SHIPMENT_STATUSES.contains(&body.status.as_str()) {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "status must be one of: pending, shipped",
        );
    }

    let mut set = Document::new();
    set.insert("status".to_string(), Value::String(body.status));

    match services
        .store()
        .update_one(collections::PAYMENTS, Filter::by_id(&id), set, false)
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

async fn create_payment_intent(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::PaymentIntentRequest>,
) -> axum::response::Response {
    // The price is validated before conversion so a garbage amount never
    // reaches the gateway.
    let amount = match minor_units(body.price) {
        Ok(v) => v,
        Err(e) => return errors::payment_error_to_response(e),
    };

    match services.gateway().create_payment_intent(amount, CURRENCY).await {
        Ok(intent) => (
            StatusCode::OK,
            Json(json!({ "clientSecret": intent.client_secret })),
        )
            .into_response(),
        Err(e) => errors::payment_error_to_response(e),
    }
}
