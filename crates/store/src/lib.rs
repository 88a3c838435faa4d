//! `stockroom-store` — document store adapter.
//!
//! Named collections of opaque JSON documents with filter-based
//! find/insert/update/delete. The [`DocumentStore`] trait is the seam a
//! networked backend would implement; [`InMemoryDocumentStore`] is the
//! dev/test backend.

pub mod document;
pub mod filter;
pub mod memory;
pub mod results;
pub mod store;

pub use document::{Document, ID_FIELD, doc_str};
pub use filter::Filter;
pub use memory::InMemoryDocumentStore;
pub use results::{DeleteResult, InsertOneResult, UpdateResult};
pub use store::{DocumentStore, StoreError};
