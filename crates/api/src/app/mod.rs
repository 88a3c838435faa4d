//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the store/gateway/token handles handlers run against
//! - `routes/`: HTTP routes + handlers (one file per resource area)
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;
use std::time::Duration;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use stockroom_auth::{Hs256TokenCodec, TokenCodec};
use stockroom_payments::{FakeGateway, PaymentGateway, StripeGateway};
use stockroom_store::{DocumentStore, InMemoryDocumentStore};

use crate::config::Config;
use crate::middleware::AuthState;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// A store call that never completes must not hang the request forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(config: &Config) -> Router {
    let tokens: Arc<dyn TokenCodec> = Arc::new(Hs256TokenCodec::new(config.jwt_secret.as_bytes()));

    // The store handle is constructed here and passed into handlers by
    // reference, never reached through ambient global state.
    let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());

    let gateway: Arc<dyn PaymentGateway> = match &config.stripe_secret_key {
        Some(key) => Arc::new(StripeGateway::new(key.clone())),
        None => {
            tracing::warn!("STRIPE_SECRET_KEY not set; using in-process fake gateway");
            Arc::new(FakeGateway::new())
        }
    };

    let services = Arc::new(services::AppServices::new(store, gateway, tokens.clone()));
    let auth_state = AuthState { tokens };

    routes::router(&auth_state, &services)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT)),
        )
        .layer(Extension(services))
}
