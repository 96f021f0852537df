// file: src/models/flow.rs
// description: financial flow (Sankey) data model with link validation
// reference: Document Analysis API financial-flow endpoint

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};

/// Response body of `GET /documents/financial-flow/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialFlowResponse {
    pub flow_data: FlowData,
    #[serde(default)]
    pub insights: Vec<String>,
}

/// Node/link structure consumed by Sankey charting tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowData {
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowNode {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowLink {
    pub source: usize,
    pub target: usize,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl FlowData {
    /// Every link must reference nodes that exist; charting libraries
    /// fail opaquely otherwise.
    pub fn validate(&self) -> Result<()> {
        for (idx, link) in self.links.iter().enumerate() {
            if link.source >= self.nodes.len() || link.target >= self.nodes.len() {
                return Err(ClientError::Validation(format!(
                    "Flow link {} references node out of range ({} -> {}, {} nodes)",
                    idx,
                    link.source,
                    link.target,
                    self.nodes.len()
                )));
            }
        }
        Ok(())
    }

    pub fn total_outflow(&self, node: usize) -> f64 {
        self.links
            .iter()
            .filter(|l| l.source == node)
            .map(|l| l.value)
            .sum()
    }
}

impl FinancialFlowResponse {
    /// Sample revenue-to-retained-earnings flow shown when the endpoint
    /// is unreachable.
    pub fn placeholder() -> Self {
        let nodes = [
            "Revenue",
            "Cost of Revenue",
            "Gross Profit",
            "Operating Expenses",
            "Operating Income",
            "Income Tax",
            "Net Income",
            "Dividends",
            "Retained Earnings",
        ]
        .iter()
        .map(|name| FlowNode {
            name: (*name).to_string(),
        })
        .collect();

        let link = |source, target, value: f64, color: &str| FlowLink {
            source,
            target,
            value,
            color: Some(color.to_string()),
        };

        Self {
            flow_data: FlowData {
                nodes,
                links: vec![
                    link(0, 1, 800_000.0, "#d62728"),
                    link(0, 2, 1_200_000.0, "#2ca02c"),
                    link(2, 3, 700_000.0, "#d62728"),
                    link(2, 4, 500_000.0, "#2ca02c"),
                    link(4, 5, 125_000.0, "#d62728"),
                    link(4, 6, 375_000.0, "#2ca02c"),
                    link(6, 7, 125_000.0, "#d62728"),
                    link(6, 8, 250_000.0, "#2ca02c"),
                ],
            },
            insights: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_placeholder_flow_is_valid() {
        let flow = FinancialFlowResponse::placeholder();
        assert!(flow.flow_data.validate().is_ok());
        assert_eq!(flow.flow_data.nodes.len(), 9);
        assert_eq!(flow.flow_data.links.len(), 8);
    }

    #[test]
    fn test_out_of_range_link_rejected() {
        let flow = FlowData {
            nodes: vec![FlowNode {
                name: "Revenue".to_string(),
            }],
            links: vec![FlowLink {
                source: 0,
                target: 3,
                value: 100.0,
                color: None,
            }],
        };
        assert!(flow.validate().is_err());
    }

    #[test]
    fn test_total_outflow() {
        let flow = FinancialFlowResponse::placeholder().flow_data;
        assert_eq!(flow.total_outflow(0), 2_000_000.0);
    }

    #[test]
    fn test_flow_deserialization_without_insights() {
        let response: FinancialFlowResponse = serde_json::from_str(
            r#"{"flow_data": {"nodes": [{"name": "Revenue"}], "links": []}}"#,
        )
        .unwrap();
        assert!(response.insights.is_empty());
        assert_eq!(response.flow_data.nodes[0].name, "Revenue");
    }
}
