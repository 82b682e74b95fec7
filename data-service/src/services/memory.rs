use super::store::{DocumentStore, ID_FIELD};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use service_core::error::AppError;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local store with the same observable behaviour as [`super::MongoStore`].
#[derive(Clone, Default)]
pub struct InMemoryStore {
    documents: Arc<RwLock<Vec<Document>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored documents including their identifiers.
    pub async fn raw_documents(&self) -> Vec<Document> {
        self.documents.read().await.clone()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn insert(&self, mut document: Document) -> Result<(), AppError> {
        if !document.contains_key(ID_FIELD) {
            document.insert(ID_FIELD, ObjectId::new());
        }
        self.documents.write().await.push(document);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .map(|stored| {
                let mut document = stored.clone();
                document.remove(ID_FIELD);
                document
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
