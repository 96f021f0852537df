// file: src/models/history.rs
// description: analysis history entries with placeholder samples
// reference: Document Analysis API analysis-history endpoint

use super::{DocumentId, ProcessingStatus};
use chrono::NaiveDateTime;
use serde::Deserialize;

/// One entry of `GET /documents/analysis-history/`.
///
/// `created_at` is a timezone-less ISO timestamp as the server emits it.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryEntry {
    pub id: DocumentId,
    pub title: String,
    #[serde(default)]
    pub file_type: Option<String>,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub sections: Vec<String>,
    pub processing_status: ProcessingStatus,
}

impl HistoryEntry {
    /// Sample history shown when the endpoint is unreachable.
    pub fn placeholder_entries() -> Vec<Self> {
        let entry = |id: &str, title: &str, created_at: &str, sections: &[&str]| HistoryEntry {
            id: DocumentId::new(id),
            title: title.to_string(),
            file_type: Some("pdf".to_string()),
            created_at: created_at.parse().expect("valid sample timestamp"),
            sections: sections.iter().map(|s| (*s).to_string()).collect(),
            processing_status: ProcessingStatus::Complete,
        };

        vec![
            entry(
                "17",
                "CHIPOTLE ANNUAL REPORT.pdf",
                "2024-05-01T14:32:10",
                &["business", "risk_factors", "management_discussion"],
            ),
            entry(
                "16",
                "TESLA 10-K 2023.pdf",
                "2024-04-28T09:15:22",
                &["business", "risk_factors", "financial_statements"],
            ),
            entry(
                "15",
                "MICROSOFT ANNUAL REPORT.pdf",
                "2024-04-25T16:45:33",
                &["business", "financial_statements", "outlook"],
            ),
        ]
    }
}
