//! Document store access
//!
//! Handlers talk to the store through the [`AlbumStore`] trait. The
//! production implementation in [`mongo`] wraps a single MongoDB collection
//! handle opened at startup and shared by every request; tests substitute
//! their own implementations.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde_json::Value;
use thiserror::Error;

pub mod mongo;

pub use mongo::MongoStore;

/// Store operation errors, surfaced to clients as HTTP 500 with the
/// message passed through verbatim.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Driver-reported failure (connection, server, write errors)
    #[error("{0}")]
    Driver(#[from] mongodb::error::Error),

    /// Document could not be converted to the store's wire format
    #[error("{0}")]
    Serialization(#[from] mongodb::bson::ser::Error),

    /// Failure reported by an alternative store backend
    #[error("{0}")]
    Backend(String),
}

/// The four collection operations the route handlers consume.
///
/// Albums are schemaless JSON documents; `_id` fields in returned documents
/// are rendered as the identifier's 24-character hex form.
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// All documents in the collection, in store-native order.
    async fn find_all(&self) -> Result<Vec<Value>, StoreError>;

    /// Insert one document, identifier assigned by the store. Returns the
    /// stored document including its new `_id`.
    async fn insert_one(&self, album: Value) -> Result<Value, StoreError>;

    /// Delete the document matching `id`. Returns the deleted count.
    async fn delete_one(&self, id: ObjectId) -> Result<u64, StoreError>;

    /// Replace the whole document matching `id` with `album`. Returns the
    /// modified count (0 when no document matched).
    async fn replace_one(&self, id: ObjectId, album: Value) -> Result<u64, StoreError>;
}
