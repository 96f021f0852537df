// file: src/models/summary.rs
// description: financial summary and extended TLDR payloads with placeholder values
// reference: Document Analysis API summary endpoints

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Response body of `GET /documents/financial-summary/{id}`.
///
/// `financial_data` keys are statement names chosen server-side
/// (income_statement, balance_sheet, ...); their shape varies per
/// document, so values stay untyped JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialSummary {
    #[serde(default)]
    pub financial_data: BTreeMap<String, Value>,
    pub summary: ReportSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(default)]
    pub executive_summary: String,
    #[serde(default)]
    pub sections: BTreeMap<String, String>,
}

/// Response body of `GET /documents/extended-tldr/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendedTldrResponse {
    pub extended_tldr: ExtendedTldr,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendedTldr {
    #[serde(default)]
    pub executive_summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub key_metrics: BTreeMap<String, Value>,
    #[serde(default)]
    pub sections: BTreeMap<String, String>,
    #[serde(default)]
    pub section_metrics: BTreeMap<String, BTreeMap<String, Value>>,
}

impl FinancialSummary {
    /// Extracted statement names, in the order the user will see them.
    pub fn section_names(&self) -> Vec<&str> {
        self.financial_data.keys().map(String::as_str).collect()
    }

    /// Substitute content shown when the summary endpoint is unreachable.
    pub fn placeholder() -> Self {
        let mut financial_data = BTreeMap::new();
        financial_data.insert(
            "income_statement".to_string(),
            json!({
                "revenue": 1_000_000,
                "cost_of_goods_sold": 650_000,
                "gross_profit": 350_000,
                "operating_expenses": 200_000,
                "net_profit": 150_000
            }),
        );

        let mut sections = BTreeMap::new();
        sections.insert(
            "business".to_string(),
            "The company operates in various market segments and continues to expand its \
             product offerings."
                .to_string(),
        );
        sections.insert(
            "risk_factors".to_string(),
            "Market competition and regulatory changes present ongoing challenges to the \
             business."
                .to_string(),
        );
        sections.insert(
            "management_discussion".to_string(),
            "Management believes the company is well-positioned for growth in the coming \
             fiscal year."
                .to_string(),
        );

        Self {
            financial_data,
            summary: ReportSummary {
                executive_summary: "This is a placeholder executive summary of the document. \
                                    In a real implementation, this would contain a condensed \
                                    overview of the key points from the financial report."
                    .to_string(),
                sections,
            },
        }
    }
}

impl ExtendedTldrResponse {
    /// Substitute content shown when the extended-TLDR endpoint is
    /// unreachable. Trimmed relative to the full sample text the service
    /// would produce, but structurally identical.
    pub fn placeholder() -> Self {
        let mut key_metrics = BTreeMap::new();
        key_metrics.insert("revenue".to_string(), json!(1_000_000));
        key_metrics.insert("gross_profit".to_string(), json!(350_000));
        key_metrics.insert("net_income".to_string(), json!(150_000));
        key_metrics.insert("earnings_per_share".to_string(), json!(2.45));
        key_metrics.insert("year_over_year_growth".to_string(), json!("15%"));

        let mut sections = BTreeMap::new();
        sections.insert(
            "business".to_string(),
            "The company operates in multiple market segments including consumer goods, \
             technology solutions, and professional services, with a business model built \
             around subscription services and direct product sales."
                .to_string(),
        );
        sections.insert(
            "risk_factors".to_string(),
            "Key risks include intensifying market competition, regulatory changes in core \
             markets, supply chain disruption, and cybersecurity exposure, each with an \
             active mitigation program."
                .to_string(),
        );
        sections.insert(
            "management_discussion".to_string(),
            "Revenue grew 15% year-over-year, gross margins held at 35%, and operating \
             expenses rose 10% on R&D and market-expansion investment."
                .to_string(),
        );
        sections.insert(
            "financial_statements".to_string(),
            "Total assets grew 12% with a debt-to-equity ratio of 0.4 and free cash flow \
             of $200 million, up 20% from the prior year."
                .to_string(),
        );
        sections.insert(
            "outlook".to_string(),
            "Management projects 12-15% revenue growth with stable margins, driven by \
             subscription expansion, new markets, and product launches planned for Q2 and Q3."
                .to_string(),
        );

        let mut section_metrics = BTreeMap::new();
        let mut fin = BTreeMap::new();
        fin.insert("revenue_growth".to_string(), json!("15%"));
        fin.insert("operating_income_growth".to_string(), json!("18%"));
        fin.insert("free_cash_flow".to_string(), json!("$200 million"));
        fin.insert("debt_to_equity".to_string(), json!(0.4));
        section_metrics.insert("financial_statements".to_string(), fin);
        let mut outlook = BTreeMap::new();
        outlook.insert("projected_revenue_growth".to_string(), json!("12-15%"));
        outlook.insert("rd_spending_increase".to_string(), json!("18%"));
        section_metrics.insert("outlook".to_string(), outlook);

        Self {
            extended_tldr: ExtendedTldr {
                executive_summary: "This company has demonstrated strong revenue growth over \
                                    the past fiscal year, with a 15% increase in total revenue \
                                    compared to the previous period, while maintaining a 35% \
                                    gross margin despite supply chain challenges."
                    .to_string(),
                highlights: vec![
                    "15% year-over-year revenue growth".to_string(),
                    "35% gross margin maintained despite supply chain challenges".to_string(),
                    "New product line launched in Q4 with positive initial reception".to_string(),
                    "Expansion into three new international markets".to_string(),
                ],
                key_metrics,
                sections,
                section_metrics,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary_deserialization() {
        let summary: FinancialSummary = serde_json::from_str(
            r#"{
                "financial_data": {"income_statement": {"revenue": 500}},
                "summary": {
                    "executive_summary": "A quiet year.",
                    "sections": {"business": "Retail."}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(summary.section_names(), vec!["income_statement"]);
        assert_eq!(summary.summary.executive_summary, "A quiet year.");
    }

    #[test]
    fn test_missing_financial_data_defaults_empty() {
        let summary: FinancialSummary =
            serde_json::from_str(r#"{"summary": {"executive_summary": "x"}}"#).unwrap();
        assert!(summary.financial_data.is_empty());
        assert!(summary.summary.sections.is_empty());
    }

    #[test]
    fn test_placeholder_has_income_statement() {
        let placeholder = FinancialSummary::placeholder();
        assert_eq!(placeholder.section_names(), vec!["income_statement"]);
        assert!(!placeholder.summary.executive_summary.is_empty());
        assert_eq!(placeholder.summary.sections.len(), 3);
    }

    #[test]
    fn test_extended_placeholder_structure() {
        let placeholder = ExtendedTldrResponse::placeholder();
        assert_eq!(placeholder.extended_tldr.highlights.len(), 4);
        assert!(placeholder.extended_tldr.sections.contains_key("outlook"));
        assert!(
            placeholder
                .extended_tldr
                .section_metrics
                .contains_key("financial_statements")
        );
    }
}
