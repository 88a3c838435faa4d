use serde::Deserialize;
use serde_json::Value;

use stockroom_store::Document;

// -------------------------
// Request DTOs
// -------------------------

/// Target email for owner-scoped reads. Absent means "nobody" and fails
/// the owner check rather than widening the query.
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

/// Payment details accompanying a paid order. Everything beyond the
/// transaction reference is stored verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkPaidRequest {
    pub transaction_id: String,
    #[serde(flatten)]
    pub extra: Document,
}

impl MarkPaidRequest {
    /// The payment document to record: the opaque fields plus the
    /// transaction reference.
    pub fn into_document(self) -> Document {
        let mut doc = self.extra;
        doc.insert(
            "transaction_id".to_string(),
            Value::String(self.transaction_id),
        );
        doc
    }
}

#[derive(Debug, Deserialize)]
pub struct ShipmentStatusRequest {
    pub status: String,
}

pub const SHIPMENT_STATUSES: &[&str] = &["pending", "shipped"];

#[derive(Debug, Deserialize)]
pub struct PaymentIntentRequest {
    pub price: f64,
}
