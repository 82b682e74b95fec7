use super::store::{DocumentStore, ID_FIELD};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::FindOptions,
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
    collection: String,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(
            database = %database,
            collection = %collection,
            "Successfully connected to MongoDB database"
        );
        Ok(Self {
            client,
            db,
            collection: collection.to_string(),
        })
    }

    pub fn documents(&self) -> Collection<Document> {
        self.db.collection(&self.collection)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(&self, document: Document) -> Result<(), AppError> {
        let result = self
            .documents()
            .insert_one(document, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert document into {}: {}", self.collection, e);
                AppError::from(e)
            })?;

        tracing::debug!(id = %result.inserted_id, "Document inserted");
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        let find_options = FindOptions::builder()
            .projection(doc! { ID_FIELD: 0 })
            .build();

        let cursor = self
            .documents()
            .find(doc! {}, find_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query {}: {}", self.collection, e);
                AppError::from(e)
            })?;

        Ok(cursor.try_collect().await?)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
