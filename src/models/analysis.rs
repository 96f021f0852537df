// file: src/models/analysis.rs
// description: ad-hoc text analysis models (sentiment, summary, topics)
// reference: Document Analysis API analyze endpoint

use serde::{Deserialize, Serialize};

/// Request body of `POST /documents/analyze/`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Response body of `POST /documents/analyze/`.
#[derive(Debug, Clone, Deserialize)]
pub struct TextAnalysis {
    pub sentiment: Sentiment,
    pub summary: SummaryBlock,
    pub topics: Topics,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sentiment {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryBlock {
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Topics {
    pub topics: Vec<TopicItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopicItem {
    pub word: String,
    pub frequency: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_analysis_deserialization() {
        let analysis: TextAnalysis = serde_json::from_str(
            r#"{
                "sentiment": {"label": "POSITIVE", "score": 0.93, "analysis_type": "sentiment"},
                "summary": {"summary": "Strong quarter.", "analysis_type": "summary"},
                "topics": {
                    "topics": [{"word": "revenue", "frequency": 12}],
                    "analysis_type": "topics"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(analysis.sentiment.label, "POSITIVE");
        assert_eq!(analysis.topics.topics[0].word, "revenue");
        assert_eq!(analysis.topics.topics[0].frequency, 12);
    }
}
