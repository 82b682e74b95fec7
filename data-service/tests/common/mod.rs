#![allow(dead_code)]

use async_trait::async_trait;
use data_service::config::{DataConfig, MongoConfig, StoreBackend};
use data_service::services::{DocumentStore, InMemoryStore, MongoStore};
use data_service::startup::Application;
use mongodb::bson::Document;
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub store: InMemoryStore,
}

/// Store whose every call fails the way an unreachable MongoDB would.
pub struct FailingStore;

impl FailingStore {
    fn unavailable() -> AppError {
        AppError::DatabaseError(anyhow::anyhow!("server selection timeout"))
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn insert(&self, _document: Document) -> Result<(), AppError> {
        Err(Self::unavailable())
    }

    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        Err(Self::unavailable())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(Self::unavailable())
    }
}

pub fn test_config(backend: StoreBackend) -> DataConfig {
    DataConfig {
        common: CoreConfig { port: 0 }, // Random port for testing
        mongodb: MongoConfig {
            uri: std::env::var("TEST_MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: format!("data_test_{}", uuid::Uuid::new_v4().simple()),
            collection: "data".to_string(),
        },
        store: backend,
        otlp_endpoint: None,
    }
}

async fn start(app: Application) -> String {
    let port = app.port();
    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    // Wait for the server to be ready by polling the health endpoint
    let client = reqwest::Client::new();
    let health_url = format!("http://127.0.0.1:{}/health", port);
    for _ in 0..50 {
        if client.get(&health_url).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
    }

    format!("http://127.0.0.1:{}", port)
}

impl TestApp {
    pub async fn spawn() -> Self {
        let store = InMemoryStore::new();
        let shared: Arc<dyn DocumentStore> = Arc::new(store.clone());

        let app = Application::build_with_store(test_config(StoreBackend::Memory), shared)
            .await
            .expect("Failed to build test application");
        let address = start(app).await;

        TestApp { address, store }
    }
}

/// Spawn the service on top of a store that is down. Returns its base URL.
pub async fn spawn_with_failing_store() -> String {
    let app = Application::build_with_store(
        test_config(StoreBackend::Memory),
        Arc::new(FailingStore),
    )
    .await
    .expect("Failed to build test application");
    start(app).await
}

pub struct MongoTestApp {
    pub address: String,
    pub db: MongoStore,
    pub db_name: String,
}

impl MongoTestApp {
    pub async fn spawn() -> Self {
        let config = test_config(StoreBackend::Mongo);
        let db_name = config.mongodb.database.clone();
        let db = MongoStore::connect(
            &config.mongodb.uri,
            &config.mongodb.database,
            &config.mongodb.collection,
        )
        .await
        .expect("Failed to connect to MongoDB");

        let app = Application::build_with_store(config, Arc::new(db.clone()))
            .await
            .expect("Failed to build test application");
        let address = start(app).await;

        MongoTestApp {
            address,
            db,
            db_name,
        }
    }

    pub async fn cleanup(&self) {
        self.db
            .client()
            .database(&self.db_name)
            .drop(None)
            .await
            .expect("Failed to drop test database");
    }
}
