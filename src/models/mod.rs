// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod analysis;
pub mod flow;
pub mod history;
pub mod job;
pub mod search;
pub mod summary;
pub mod upload;

pub use analysis::{AnalyzeRequest, Sentiment, SummaryBlock, TextAnalysis, TopicItem, Topics};
pub use flow::{FinancialFlowResponse, FlowData, FlowLink, FlowNode};
pub use history::HistoryEntry;
pub use job::{DocumentId, ProcessingStatus, StatusReport};
pub use search::{SearchHit, SearchRequest, SearchResponse};
pub use summary::{ExtendedTldr, ExtendedTldrResponse, FinancialSummary, ReportSummary};
pub use upload::{ProcessingMode, UploadResponse};
