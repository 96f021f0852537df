// file: src/api/client.rs
// description: HTTP client for the Document Analysis API
// reference: https://docs.rs/reqwest

use crate::config::ApiConfig;
use crate::error::{ClientError, Result};
use crate::models::{
    AnalyzeRequest, ExtendedTldrResponse, FinancialFlowResponse, FinancialSummary, HistoryEntry,
    SearchRequest, SearchResponse, StatusReport, TextAnalysis, UploadResponse,
};
use crate::poller::StatusSource;
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reachability check against the service root (above the `/api`
    /// prefix), mirroring the root welcome endpoint.
    pub async fn ping(&self) -> bool {
        let root = self
            .base_url
            .trim_end_matches("/api")
            .trim_end_matches('/')
            .to_string();

        match self.client.get(format!("{}/", root)).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Ping failed: {}", e);
                false
            }
        }
    }

    pub async fn upload_document(&self, path: &Path) -> Result<UploadResponse> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ClientError::FileOperation {
                path: path.to_path_buf(),
                source: e,
            })?;

        debug!("Uploading {} ({} bytes)", file_name, bytes.len());

        let form = reqwest::multipart::Form::new()
            .part("file", reqwest::multipart::Part::bytes(bytes).file_name(file_name));

        let response = self
            .client
            .post(self.url("/documents/upload/"))
            .multipart(form)
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn processing_status(&self, document_id: &str) -> Result<StatusReport> {
        self.get_json(&format!("/documents/processing-status/{}", document_id))
            .await
    }

    pub async fn financial_summary(&self, document_id: &str) -> Result<FinancialSummary> {
        self.get_json(&format!("/documents/financial-summary/{}", document_id))
            .await
    }

    pub async fn extended_tldr(&self, document_id: &str) -> Result<ExtendedTldrResponse> {
        self.get_json(&format!("/documents/extended-tldr/{}", document_id))
            .await
    }

    pub async fn financial_flow(&self, document_id: &str) -> Result<FinancialFlowResponse> {
        let response: FinancialFlowResponse = self
            .get_json(&format!("/documents/financial-flow/{}", document_id))
            .await?;
        response.flow_data.validate()?;
        Ok(response)
    }

    pub async fn search(&self, query: &str, limit: usize) -> Result<SearchResponse> {
        let request = SearchRequest {
            query: query.to_string(),
            limit,
        };
        self.post_json("/documents/search/", &request).await
    }

    pub async fn analyze_text(&self, text: &str) -> Result<TextAnalysis> {
        let request = AnalyzeRequest {
            text: text.to_string(),
        };
        self.post_json("/documents/analyze/", &request).await
    }

    pub async fn analysis_history(&self, limit: usize, offset: usize) -> Result<Vec<HistoryEntry>> {
        let response = self
            .client
            .get(self.url("/documents/analysis-history/"))
            .query(&[("limit", limit), ("offset", offset)])
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("GET {}", path);
        let response = self.client.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        debug!("POST {}", path);
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    /// Non-2xx responses become `ClientError::Api`, carrying the FastAPI
    /// `detail` field when the body has one.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("detail").and_then(|d| d.as_str().map(String::from)))
                .unwrap_or(body);

            return Err(ClientError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response.json().await?)
    }
}

impl StatusSource for ApiClient {
    fn fetch_status(
        &self,
        document_id: &str,
    ) -> impl Future<Output = Result<StatusReport>> + Send {
        let client = self.clone();
        let document_id = document_id.to_string();
        async move { client.processing_status(&document_id).await }
    }
}
