//! Storage seam between the HTTP handlers and the document database.

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};
use service_core::error::AppError;

/// Field the store assigns to every document. Never returned to callers.
pub const ID_FIELD: &str = "_id";

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist a document as-is.
    async fn insert(&self, document: Document) -> Result<(), AppError>;

    /// All stored documents in store order, without [`ID_FIELD`].
    async fn find_all(&self) -> Result<Vec<Document>, AppError>;

    /// Cheap round-trip used by the health probes.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Convert an incoming JSON object into a BSON document.
pub fn json_to_document(object: &Map<String, Value>) -> Result<Document, AppError> {
    Ok(mongodb::bson::to_document(object)?)
}

/// Render a stored document as relaxed extended JSON.
pub fn document_to_json(document: Document) -> Value {
    Bson::Document(document).into_relaxed_extjson()
}
