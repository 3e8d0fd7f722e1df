//! HTTP client for the inference backend.
//!
//! Each analysis operation is one JSON `POST` to `<base>/api/<path>`. The
//! [`Operation`] table binds every backend request type to its path and
//! response shape, so [`BackendClient::call`] is the only place that talks
//! HTTP.

pub mod base64_bytes;
pub mod types;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::time::Instant;
use tracing::{debug, warn};

use crate::config::BackendConfig;
use crate::error::{BackendError, Error, Result};

/// The five analysis operations the gateway forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ArticleAnalysis,
    QueryAnalysis,
    SemanticSearch,
    ExpertAnalysis,
    DepartmentAnalysis,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::ArticleAnalysis,
        Operation::QueryAnalysis,
        Operation::SemanticSearch,
        Operation::ExpertAnalysis,
        Operation::DepartmentAnalysis,
    ];

    /// Backend path, relative to the configured base URL.
    pub fn path(self) -> &'static str {
        match self {
            Operation::ArticleAnalysis => "/api/analyze-article",
            Operation::QueryAnalysis => "/api/analyze-query",
            Operation::SemanticSearch => "/api/semantic-search",
            Operation::ExpertAnalysis => "/api/analyze-experts",
            Operation::DepartmentAnalysis => "/api/analyze-departments",
        }
    }

    /// Method name on the `ai_agent.AIAnalysisService` RPC surface.
    pub fn rpc_name(self) -> &'static str {
        match self {
            Operation::ArticleAnalysis => "AnalyzeArticleTopics",
            Operation::QueryAnalysis => "AnalyzeUserQuery",
            Operation::SemanticSearch => "SemanticArticleSearch",
            Operation::ExpertAnalysis => "AnalyzeExpertsByTopic",
            Operation::DepartmentAnalysis => "AnalyzeDepartmentsByTopic",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rpc_name())
    }
}

/// A backend request body, bound to the operation it is sent for.
pub trait BackendRequest: Serialize {
    const OPERATION: Operation;
    type Response: DeserializeOwned;
}

/// Client for the inference backend.
///
/// Holds only immutable configuration and a pooled `reqwest::Client`; clones
/// share the pool and are safe to use from concurrent calls.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Build a client from the backend section of the gateway configuration.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL the given operation is posted to.
    pub fn endpoint(&self, operation: Operation) -> String {
        format!("{}{}", self.base_url, operation.path())
    }

    /// Perform one JSON round trip for `request`.
    ///
    /// Succeeds only on `200 OK` with a body matching the response shape.
    /// No retry is attempted on any failure.
    pub async fn call<R>(&self, request: &R) -> std::result::Result<R::Response, BackendError>
    where
        R: BackendRequest,
    {
        let endpoint = self.endpoint(R::OPERATION);

        let body = serde_json::to_vec(request).map_err(|source| BackendError::Encoding {
            endpoint: endpoint.clone(),
            source,
        })?;

        let started = Instant::now();
        let response = self
            .http
            .post(&endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await
            .map_err(|source| unavailable(&endpoint, source))?;

        let status = response.status();
        let payload = response
            .bytes()
            .await
            .map_err(|source| unavailable(&endpoint, source))?;

        debug!(
            "backend {} answered {} in {:?} ({} bytes)",
            endpoint,
            status,
            started.elapsed(),
            payload.len()
        );

        if status != StatusCode::OK {
            let body = String::from_utf8_lossy(&payload).into_owned();
            warn!("backend rejected {} with {}: {}", endpoint, status, body);
            return Err(BackendError::Rejected {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_slice(&payload).map_err(|source| {
            warn!("undecodable response from {}: {}", endpoint, source);
            BackendError::Decoding { endpoint, source }
        })
    }

    pub async fn analyze_article(
        &self,
        request: &types::ArticleAnalysisRequest,
    ) -> std::result::Result<types::ArticleAnalysisResponse, BackendError> {
        self.call(request).await
    }

    pub async fn analyze_query(
        &self,
        request: &types::QueryAnalysisRequest,
    ) -> std::result::Result<types::QueryAnalysisResponse, BackendError> {
        self.call(request).await
    }

    pub async fn semantic_search(
        &self,
        request: &types::SemanticSearchRequest,
    ) -> std::result::Result<types::SemanticSearchResponse, BackendError> {
        self.call(request).await
    }

    pub async fn analyze_experts(
        &self,
        request: &types::ExpertAnalysisRequest,
    ) -> std::result::Result<types::ExpertAnalysisResponse, BackendError> {
        self.call(request).await
    }

    pub async fn analyze_departments(
        &self,
        request: &types::DepartmentAnalysisRequest,
    ) -> std::result::Result<types::DepartmentAnalysisResponse, BackendError> {
        self.call(request).await
    }

    /// Probe `GET <base>/health`. Only `200 OK` counts as healthy.
    pub async fn health(&self) -> std::result::Result<(), BackendError> {
        let endpoint = format!("{}/health", self.base_url);

        let response = self
            .http
            .get(&endpoint)
            .send()
            .await
            .map_err(|source| unavailable(&endpoint, source))?;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(BackendError::Rejected {
            endpoint,
            status: status.as_u16(),
            body,
        })
    }
}

fn unavailable(endpoint: &str, source: reqwest::Error) -> BackendError {
    let timed_out = source.is_timeout();
    warn!(
        "backend call to {} failed{}: {}",
        endpoint,
        if timed_out { " (timed out)" } else { "" },
        source
    );
    BackendError::Unavailable {
        endpoint: endpoint.to_string(),
        timed_out,
        source,
    }
}
