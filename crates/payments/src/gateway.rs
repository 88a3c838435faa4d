//! Gateway trait and error model.

use async_trait::async_trait;
use thiserror::Error;

/// A created payment intent. The `client_secret` is what the browser-side
/// payment form needs to confirm the payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// The amount failed validation before ever reaching the gateway.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// The gateway was unreachable or rejected the request.
    #[error("payment gateway failure: {0}")]
    Gateway(String),
}

/// Creates payment intents for a given amount in minor units.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_payment_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError>;
}
