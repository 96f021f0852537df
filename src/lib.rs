// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod api;
pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod poller;
pub mod utils;

pub use api::{ApiClient, or_placeholder};
pub use config::{ApiConfig, Config, PollingConfig, UploadConfig};
pub use error::{ClientError, Result};
pub use exporter::JsonExporter;
pub use models::{
    AnalyzeRequest, DocumentId, ExtendedTldr, ExtendedTldrResponse, FinancialFlowResponse,
    FinancialSummary, FlowData, FlowLink, FlowNode, HistoryEntry, ProcessingMode,
    ProcessingStatus, ReportSummary, SearchHit, SearchRequest, SearchResponse, StatusReport,
    TextAnalysis, UploadResponse,
};
pub use poller::{JobProgress, PollerHandle, ProgressRenderer, StatusPoller, StatusSource};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _exporter = JsonExporter::new(true);
    }
}
