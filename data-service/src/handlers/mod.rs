pub mod data;
pub mod health;
pub mod home;

pub use data::{insert_data, list_data};
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use home::index;
