use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct PostId {
    pub id: String,
}

#[derive(Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: Option<String>,
}

impl ApiResponse {
    pub fn success() -> Self {
        Self { success: true, message: None }
    }

    pub fn error(message: String) -> Self {
        Self { success: false, message: Some(message) }
    }
}
