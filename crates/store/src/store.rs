//! Store trait and error model.

use async_trait::async_trait;
use thiserror::Error;

use crate::document::Document;
use crate::filter::Filter;
use crate::results::{DeleteResult, InsertOneResult, UpdateResult};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend was unreachable or failed internally.
    #[error("store backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Named-collection document store.
///
/// One shared, long-lived instance is opened at startup and passed by
/// reference into every handler; store calls are the handlers' only
/// suspension points.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find(&self, collection: &str, filter: Filter) -> Result<Vec<Document>, StoreError>;

    async fn find_one(
        &self,
        collection: &str,
        filter: Filter,
    ) -> Result<Option<Document>, StoreError>;

    /// Insert a document, generating an `_id` when absent.
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<InsertOneResult, StoreError>;

    /// `$set`-style merge into the first match. With `upsert`, a miss
    /// inserts a new document built from the filter's equality clauses
    /// plus the set fields.
    async fn update_one(
        &self,
        collection: &str,
        filter: Filter,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateResult, StoreError>;

    /// Delete the first match. A miss reports `deleted_count: 0`, not an
    /// error.
    async fn delete_one(
        &self,
        collection: &str,
        filter: Filter,
    ) -> Result<DeleteResult, StoreError>;
}
