//! Opaque document model.

use serde_json::Value;

/// A stored document: an opaque JSON object.
///
/// The store interprets only the `_id` field; everything else is the
/// handlers' business.
pub type Document = serde_json::Map<String, Value>;

/// Field under which a document carries its identifier (string form).
pub const ID_FIELD: &str = "_id";

/// Read a string field from a document.
pub fn doc_str<'a>(doc: &'a Document, field: &str) -> Option<&'a str> {
    doc.get(field).and_then(Value::as_str)
}
