//! In-memory store backend for dev/test.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use stockroom_core::DocumentId;

use crate::document::{Document, ID_FIELD};
use crate::filter::Filter;
use crate::results::{DeleteResult, InsertOneResult, UpdateResult};
use crate::store::{DocumentStore, StoreError};

/// In-memory document store.
///
/// One lock acquisition per operation: document-level atomicity only, the
/// same consistency level a networked document store would give each
/// single-document write.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    inner: RwLock<HashMap<String, Vec<Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn ensure_id(doc: &mut Document) -> String {
    match doc.get(ID_FIELD).and_then(Value::as_str) {
        Some(id) => id.to_string(),
        None => {
            let id = DocumentId::new().to_string();
            doc.insert(ID_FIELD.to_string(), Value::String(id.clone()));
            id
        }
    }
}

fn apply_set(doc: &mut Document, set: &Document) -> bool {
    let mut changed = false;
    for (field, value) in set {
        if doc.get(field) != Some(value) {
            doc.insert(field.clone(), value.clone());
            changed = true;
        }
    }
    changed
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn find(&self, collection: &str, filter: Filter) -> Result<Vec<Document>, StoreError> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(map
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).cloned().collect())
            .unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Filter,
    ) -> Result<Option<Document>, StoreError> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(map
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| filter.matches(d)).cloned()))
    }

    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<InsertOneResult, StoreError> {
        let inserted_id = ensure_id(&mut document);
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        map.entry(collection.to_string()).or_default().push(document);
        Ok(InsertOneResult { inserted_id })
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Filter,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateResult, StoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        let docs = map.entry(collection.to_string()).or_default();

        if let Some(doc) = docs.iter_mut().find(|d| filter.matches(d)) {
            let changed = apply_set(doc, &set);
            return Ok(UpdateResult {
                matched_count: 1,
                modified_count: u64::from(changed),
                upserted_id: None,
            });
        }

        if !upsert {
            return Ok(UpdateResult {
                matched_count: 0,
                modified_count: 0,
                upserted_id: None,
            });
        }

        // Upsert: seed the new document from the filter's equality clauses,
        // then apply the set fields on top.
        let mut doc = Document::new();
        for (field, value) in filter.clauses() {
            doc.insert(field.clone(), value.clone());
        }
        apply_set(&mut doc, &set);
        let upserted_id = ensure_id(&mut doc);
        docs.push(doc);

        Ok(UpdateResult {
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(upserted_id),
        })
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: Filter,
    ) -> Result<DeleteResult, StoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        let Some(docs) = map.get_mut(collection) else {
            return Ok(DeleteResult { deleted_count: 0 });
        };
        match docs.iter().position(|d| filter.matches(d)) {
            Some(idx) => {
                docs.remove(idx);
                Ok(DeleteResult { deleted_count: 1 })
            }
            None => Ok(DeleteResult { deleted_count: 0 }),
        }
    }
}
