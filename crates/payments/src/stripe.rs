//! Stripe-backed gateway over the REST API.

use async_trait::async_trait;
use serde::Deserialize;

use crate::gateway::{PaymentError, PaymentGateway, PaymentIntent};

const DEFAULT_BASE_URL: &str = "https://api.stripe.com";

/// Client for the Stripe payment-intent API.
pub struct StripeGateway {
    client: reqwest::Client,
    secret_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PaymentIntentResponse {
    id: String,
    client_secret: String,
}

impl StripeGateway {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self::with_base_url(secret_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a non-default host (local stub in tests).
    pub fn with_base_url(secret_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key: secret_key.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError> {
        let params = [
            ("amount", amount_minor.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .client
            .post(format!("{}/v1/payment_intents", self.base_url))
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| PaymentError::Gateway(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "payment intent creation rejected");
            return Err(PaymentError::Gateway(format!(
                "payment intent creation returned {status}: {body}"
            )));
        }

        let intent: PaymentIntentResponse = response
            .json()
            .await
            .map_err(|e| PaymentError::Gateway(format!("malformed gateway response: {e}")))?;

        Ok(PaymentIntent {
            id: intent.id,
            client_secret: intent.client_secret,
        })
    }
}
