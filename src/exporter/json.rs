// file: src/exporter/json.rs
// description: json export of fetched API payloads
// reference: feeds external charting and reporting tools

use crate::error::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes fetched payloads (summaries, flow data) to disk as JSON.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn write<T: Serialize>(&self, value: &T, output: &Path) -> Result<PathBuf> {
        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };

        fs::write(output, json)?;
        info!("Exported payload to {}", output.display());
        Ok(output.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FinancialFlowResponse;
    use tempfile::tempdir;

    #[test]
    fn test_write_flow_payload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flow.json");

        let exporter = JsonExporter::new(false);
        exporter
            .write(&FinancialFlowResponse::placeholder(), &path)
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let parsed: FinancialFlowResponse = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.flow_data.nodes.len(), 9);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out/summary.json");

        let exporter = JsonExporter::new(true);
        assert!(exporter.write(&serde_json::json!({"ok": true}), &path).is_ok());
        assert!(path.exists());
    }
}
