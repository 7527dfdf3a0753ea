pub mod client;

pub use client::ApiClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{AnalysisTree, Cluster, ClusterId};

/// Failures of the two read endpoints. The controller collapses all of them
/// into one static user-facing message; the variant detail only reaches logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Read-only backend seam. Both endpoints are idempotent reads; there are no
/// mutation endpoints in this contract.
#[async_trait]
pub trait PatternsApi: Send + Sync {
    /// `GET /api/patterns` — the candidate cluster set, fetched once at startup.
    async fn fetch_clusters(&self) -> Result<Vec<Cluster>, ApiError>;

    /// `GET /api/patterns/{cluster_id}/analysis` — a fresh analysis tree,
    /// replacing any prior one wholesale.
    async fn fetch_analysis(&self, cluster_id: ClusterId) -> Result<AnalysisTree, ApiError>;
}
