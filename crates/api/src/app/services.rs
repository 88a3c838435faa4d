//! Shared service handles for request handlers.

use std::sync::Arc;

use stockroom_auth::TokenCodec;
use stockroom_payments::PaymentGateway;
use stockroom_store::DocumentStore;

/// Long-lived collaborators, constructed once at startup and shared by all
/// handlers for the life of the process.
pub struct AppServices {
    store: Arc<dyn DocumentStore>,
    gateway: Arc<dyn PaymentGateway>,
    tokens: Arc<dyn TokenCodec>,
}

impl AppServices {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        gateway: Arc<dyn PaymentGateway>,
        tokens: Arc<dyn TokenCodec>,
    ) -> Self {
        Self {
            store,
            gateway,
            tokens,
        }
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    pub fn gateway(&self) -> &dyn PaymentGateway {
        self.gateway.as_ref()
    }

    pub fn tokens(&self) -> &dyn TokenCodec {
        self.tokens.as_ref()
    }
}
