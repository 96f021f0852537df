// file: src/models/search.rs
// description: semantic search request and result models
// reference: Document Analysis API search endpoint

use super::DocumentId;
use serde::{Deserialize, Serialize};

/// Request body of `POST /documents/search/`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
}

/// One matched chunk; `distance` is the vector distance (lower is more
/// similar).
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub chunk_text: String,
    pub document_id: DocumentId,
    pub document_title: String,
    pub distance: f64,
}

impl SearchHit {
    /// First `max_chars` of the chunk, for terminal display.
    pub fn preview(&self, max_chars: usize) -> String {
        if self.chunk_text.chars().count() > max_chars {
            let truncated: String = self.chunk_text.chars().take(max_chars).collect();
            format!("{}...", truncated)
        } else {
            self.chunk_text.clone()
        }
    }
}
