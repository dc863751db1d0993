//! MongoDB-backed implementation of [`AlbumStore`]

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, to_document, Bson, Document};
use mongodb::{Client, Collection};
use serde_json::Value;

use crate::config::Config;
use crate::store::{AlbumStore, StoreError};

/// Shared handle on the albums collection. The driver pools connections
/// behind this handle.
#[derive(Clone)]
pub struct MongoStore {
    collection: Collection<Document>,
}

impl MongoStore {
    /// Open a client against the configured connection string and select
    /// the configured database and collection. The driver connects lazily,
    /// so this succeeds even before the store is reachable.
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.store_uri).await?;
        let collection = client
            .database(&config.database)
            .collection(&config.collection);
        Ok(Self { collection })
    }
}

#[async_trait]
impl AlbumStore for MongoStore {
    async fn find_all(&self) -> Result<Vec<Value>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(document_to_json).collect())
    }

    async fn insert_one(&self, album: Value) -> Result<Value, StoreError> {
        let mut document = to_document(&album)?;
        // The store owns identifier assignment.
        document.remove("_id");
        let result = self.collection.insert_one(document.clone()).await?;
        document.insert("_id", result.inserted_id);
        Ok(document_to_json(document))
    }

    async fn delete_one(&self, id: ObjectId) -> Result<u64, StoreError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }

    async fn replace_one(&self, id: ObjectId, album: Value) -> Result<u64, StoreError> {
        let mut replacement = to_document(&album)?;
        // Whatever `_id` came in on the wire, the replacement keeps the
        // identifier it is filed under.
        replacement.insert("_id", id);
        let result = self
            .collection
            .replace_one(doc! { "_id": id }, replacement)
            .await?;
        Ok(result.modified_count)
    }
}

/// Render a stored document as plain JSON, with the `_id` flattened to its
/// 24-character hex form rather than extended-JSON `{"$oid": ...}`.
fn document_to_json(mut document: Document) -> Value {
    let id = match document.remove("_id") {
        Some(Bson::ObjectId(oid)) => Some(oid.to_hex()),
        Some(other) => Some(other.to_string()),
        None => None,
    };
    let mut json = Bson::Document(document).into_relaxed_extjson();
    if let (Value::Object(map), Some(id)) = (&mut json, id) {
        map.insert("_id".to_string(), Value::String(id));
    }
    json
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_id_flattens_to_hex() {
        let oid = ObjectId::new();
        let document = doc! {
            "_id": oid,
            "title": "Abraxas",
            "songs": [{ "title": "Oye Como Va", "duration": 254.0 }],
        };

        let json = document_to_json(document);

        assert_eq!(json["_id"], json!(oid.to_hex()));
        assert_eq!(json["title"], json!("Abraxas"));
        assert_eq!(json["songs"][0]["title"], json!("Oye Como Va"));
    }

    #[test]
    fn document_without_id_passes_through() {
        let json = document_to_json(doc! { "title": "Clics Modernos" });
        assert_eq!(json, json!({ "title": "Clics Modernos" }));
    }
}
