pub mod database;
pub mod memory;
pub mod metrics;
pub mod store;

pub use database::MongoStore;
pub use memory::InMemoryStore;
pub use metrics::{get_metrics, init_metrics};
pub use store::{document_to_json, json_to_document, DocumentStore, ID_FIELD};
