use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_auth::AuthzError;
use stockroom_core::DomainError;
use stockroom_payments::PaymentError;
use stockroom_store::StoreError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Single mapping from the domain error taxonomy to HTTP statuses.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Unauthenticated => {
            json_error(StatusCode::UNAUTHORIZED, "unauthorized", "unauthorized")
        }
        DomainError::Forbidden(msg) => json_error(StatusCode::FORBIDDEN, "forbidden", msg),
        DomainError::Upstream(msg) => json_error(StatusCode::BAD_GATEWAY, "upstream_error", msg),
    }
}

/// Store failures surface as 5xx with no retry.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "store operation failed");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "store_error",
        err.to_string(),
    )
}

pub fn payment_error_to_response(err: PaymentError) -> axum::response::Response {
    match err {
        PaymentError::InvalidAmount(msg) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_amount", msg)
        }
        PaymentError::Gateway(msg) => {
            tracing::error!(error = %msg, "payment gateway call failed");
            json_error(StatusCode::BAD_GATEWAY, "gateway_error", msg)
        }
    }
}

/// Both authorization failures are 403; the message distinguishes the
/// owner-mismatch and missing-role cases.
pub fn authz_error_to_response(err: AuthzError) -> axum::response::Response {
    json_error(StatusCode::FORBIDDEN, "forbidden", err.to_string())
}

pub fn not_found_response(what: &'static str) -> axum::response::Response {
    json_error(
        StatusCode::NOT_FOUND,
        "not_found",
        format!("{what} not found"),
    )
}
