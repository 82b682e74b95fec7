use serde::{Deserialize, Serialize};

pub const INSERTED_MESSAGE: &str = "Data inserted";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn inserted() -> Self {
        Self {
            message: INSERTED_MESSAGE.to_string(),
        }
    }
}
