//! Filter model: a conjunction of field-equality clauses.

use serde_json::Value;

use stockroom_core::DocumentId;

use crate::document::{Document, ID_FIELD};

/// Conjunction of field-equality clauses. The empty filter matches every
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filter {
    clauses: Vec<(String, Value)>,
}

impl Filter {
    /// Matches every document in the collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Single equality clause.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            clauses: vec![(field.into(), value.into())],
        }
    }

    /// Add a further equality clause (AND semantics).
    pub fn and_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.clauses.push((field.into(), value.into()));
        self
    }

    /// Match the document with the given id.
    pub fn by_id(id: &DocumentId) -> Self {
        Self::eq(ID_FIELD, id.to_string())
    }

    pub fn clauses(&self) -> &[(String, Value)] {
        &self.clauses
    }

    /// True when every clause equals the corresponding document field.
    pub fn matches(&self, doc: &Document) -> bool {
        self.clauses
            .iter()
            .all(|(field, value)| doc.get(field) == Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(Filter::empty().matches(&doc(json!({"a": 1}))));
        assert!(Filter::empty().matches(&Document::new()));
    }

    #[test]
    fn single_clause_requires_equality() {
        let f = Filter::eq("email", "a@x.com");
        assert!(f.matches(&doc(json!({"email": "a@x.com", "qty": 3}))));
        assert!(!f.matches(&doc(json!({"email": "b@x.com"}))));
        assert!(!f.matches(&doc(json!({"qty": 3}))));
    }

    #[test]
    fn conjunction_requires_all_clauses() {
        let f = Filter::eq("email", "a@x.com").and_eq("paid", true);
        assert!(f.matches(&doc(json!({"email": "a@x.com", "paid": true}))));
        assert!(!f.matches(&doc(json!({"email": "a@x.com", "paid": false}))));
    }

    #[test]
    fn by_id_matches_the_id_field() {
        let id = stockroom_core::DocumentId::new();
        let f = Filter::by_id(&id);
        assert!(f.matches(&doc(json!({ ID_FIELD: id.to_string() }))));
    }
}
