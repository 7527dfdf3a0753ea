use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::api::{ApiError, PatternsApi};
use crate::config::Config;
use crate::models::{AnalysisResponse, AnalysisTree, Cluster, ClusterId};

/// HTTP implementation of [`PatternsApi`] against the dashboard backend.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(cfg: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: cfg.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `path`, check the status, then decode the body. Decoding goes
    /// through serde_json on the raw text so a non-JSON or wrong-shape body
    /// surfaces as [`ApiError::Payload`] rather than a transport error.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PatternsApi for ApiClient {
    async fn fetch_clusters(&self) -> Result<Vec<Cluster>, ApiError> {
        self.get_json("/api/patterns").await
    }

    async fn fetch_analysis(&self, cluster_id: ClusterId) -> Result<AnalysisTree, ApiError> {
        let resp: AnalysisResponse = self
            .get_json(&format!("/api/patterns/{cluster_id}/analysis"))
            .await?;
        Ok(resp.analysis)
    }
}
