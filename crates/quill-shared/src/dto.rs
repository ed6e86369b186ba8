//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Query string for `GET /blogs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    /// Comma separated projection, e.g. `title,author`.
    pub fields: Option<String>,
}

/// Acknowledgement for a bulk insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertPostsResponse {
    pub message: String,
    pub inserted: u64,
}

/// Prompt for `POST /generate-text`, accepted from the query string or a JSON body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateTextRequest {
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateTextResponse {
    pub generated_text: String,
}

/// Response for `POST /files/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSizeResponse {
    pub file_size: usize,
}

/// Response for `POST /uploadfile/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadFileResponse {
    pub filename: Option<String>,
    pub content: serde_json::Value,
}

/// Plain informational message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}
