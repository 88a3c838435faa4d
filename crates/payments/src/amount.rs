//! Price-to-minor-units conversion.

use crate::gateway::PaymentError;

/// Convert a decimal price into integer minor units (cents).
///
/// The price must be a positive finite number; anything else is rejected
/// before the conversion, so `NaN`/`Infinity` can never reach the gateway
/// as a garbage amount.
pub fn minor_units(price: f64) -> Result<i64, PaymentError> {
    if !price.is_finite() {
        return Err(PaymentError::InvalidAmount(
            "price must be a finite number".to_string(),
        ));
    }
    if price <= 0.0 {
        return Err(PaymentError::InvalidAmount(
            "price must be positive".to_string(),
        ));
    }
    Ok((price * 100.0).round() as i64)
}
