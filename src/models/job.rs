// file: src/models/job.rs
// description: processing job identity, status enum, and the poll wire type
// reference: Document Analysis API processing-status endpoint

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque document identifier assigned by the service at upload time.
///
/// The server currently sends it as a JSON integer, but nothing in this
/// layer depends on that, so both integers and strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Str(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => DocumentId(n.to_string()),
            Raw::Str(s) => DocumentId(s),
        })
    }
}

/// Lifecycle status reported by the service for one processing job.
///
/// The wire value is a closed set; anything the service invents later
/// lands in `Unknown` and is treated as "not yet started" rather than
/// failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStatus {
    Uploaded,
    Parsing,
    Analyzing,
    GeneratingVisualizations,
    Complete,
    Error,
    #[serde(other)]
    Unknown,
}

impl ProcessingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingStatus::Uploaded => "uploaded",
            ProcessingStatus::Parsing => "parsing",
            ProcessingStatus::Analyzing => "analyzing",
            ProcessingStatus::GeneratingVisualizations => "generating_visualizations",
            ProcessingStatus::Complete => "complete",
            ProcessingStatus::Error => "error",
            ProcessingStatus::Unknown => "unknown",
        }
    }

    /// Human-readable label for display, underscores replaced.
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Fixed status-to-percentage mapping used by the progress display.
    ///
    /// `Error` has no entry on purpose: on a failed job the progress
    /// figure stops changing and the last derived value is kept.
    pub fn progress_percent(&self) -> Option<u8> {
        match self {
            ProcessingStatus::Uploaded => Some(10),
            ProcessingStatus::Parsing => Some(25),
            ProcessingStatus::Analyzing => Some(50),
            ProcessingStatus::GeneratingVisualizations => Some(75),
            ProcessingStatus::Complete => Some(100),
            ProcessingStatus::Unknown => Some(0),
            ProcessingStatus::Error => None,
        }
    }

    /// Terminal statuses never transition again and stop the poller.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProcessingStatus::Complete | ProcessingStatus::Error)
    }
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProcessingStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "uploaded" => Ok(ProcessingStatus::Uploaded),
            "parsing" => Ok(ProcessingStatus::Parsing),
            "analyzing" => Ok(ProcessingStatus::Analyzing),
            "generating_visualizations" => Ok(ProcessingStatus::GeneratingVisualizations),
            "complete" => Ok(ProcessingStatus::Complete),
            "error" => Ok(ProcessingStatus::Error),
            _ => Err(format!("Invalid processing status: {}", s)),
        }
    }
}

/// Response body of `GET /documents/processing-status/{id}`.
///
/// The server also sends a `progress` figure, but the percentage shown
/// to the user is derived locally from `status` and the server field is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusReport {
    pub status: ProcessingStatus,
    #[serde(default)]
    pub error: Option<String>,
}
