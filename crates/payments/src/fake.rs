//! Fake gateway for dev/test.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::gateway::{PaymentError, PaymentGateway, PaymentIntent};

/// Deterministic in-process gateway. Records every request so tests can
/// assert on the amounts that reached it.
#[derive(Debug, Default)]
pub struct FakeGateway {
    counter: AtomicU64,
    requests: Mutex<Vec<(i64, String)>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<(i64, String)> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PaymentGateway for FakeGateway {
    async fn create_payment_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((amount_minor, currency.to_string()));
        }
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        Ok(PaymentIntent {
            id: format!("pi_fake_{n}"),
            client_secret: format!("pi_fake_{n}_secret"),
        })
    }
}
