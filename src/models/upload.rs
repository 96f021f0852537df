// file: src/models/upload.rs
// description: upload response model and the background-vs-synchronous signal
// reference: Document Analysis API upload endpoint

use super::DocumentId;
use serde::Deserialize;

/// How the service handled an upload: immediately, or queued for
/// background analysis. Older server builds report the background path
/// as `processing`, newer ones as `background`; both mean "attach a
/// poller".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingMode {
    #[serde(alias = "processing")]
    Background,
    Complete,
}

impl ProcessingMode {
    pub fn is_background(&self) -> bool {
        matches!(self, ProcessingMode::Background)
    }
}

/// Response body of `POST /documents/upload/`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub id: DocumentId,
    pub title: String,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub upload_time: Option<String>,
    pub processing_status: ProcessingMode,
}
