//! `stockroom-payments` — payment gateway adapter.
//!
//! Creates payment intents against a Stripe-style processor. The
//! [`PaymentGateway`] trait is the seam; [`StripeGateway`] talks to the
//! real API, [`FakeGateway`] stands in for dev/test.

pub mod amount;
pub mod fake;
pub mod gateway;
pub mod stripe;

pub use amount::minor_units;
pub use fake::FakeGateway;
pub use gateway::{PaymentError, PaymentGateway, PaymentIntent};
pub use stripe::StripeGateway;
