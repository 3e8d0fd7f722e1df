//! Orchestration of the analysis operations.
//!
//! Each operation translates the RPC request into the backend shape, makes
//! exactly one backend call and translates the answer back. Failures are
//! tagged with the operation and returned as they are: no retry, no partial
//! response, no caching.

mod context;
mod translate;

pub use context::CallContext;

use std::future::Future;
use std::sync::Arc;
use tracing::debug;

use crate::client::types as backend;
use crate::client::{BackendClient, BackendRequest, Operation};
use crate::error::{BackendError, Error, Result};
use crate::proto;

/// Translate-call-translate pipeline shared by all RPC operations.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    client: Arc<BackendClient>,
}

impl AnalysisService {
    pub fn new(client: BackendClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn client(&self) -> &BackendClient {
        &self.client
    }

    pub async fn analyze_article_topics(
        &self,
        ctx: &CallContext,
        req: proto::ArticleAnalysisRequest,
    ) -> Result<proto::ArticleAnalysisResponse> {
        self.forward::<backend::ArticleAnalysisRequest, _, _>(ctx, req).await
    }

    pub async fn analyze_user_query(
        &self,
        ctx: &CallContext,
        req: proto::QueryAnalysisRequest,
    ) -> Result<proto::QueryAnalysisResponse> {
        self.forward::<backend::QueryAnalysisRequest, _, _>(ctx, req).await
    }

    pub async fn semantic_article_search(
        &self,
        ctx: &CallContext,
        req: proto::SemanticSearchRequest,
    ) -> Result<proto::SemanticSearchResponse> {
        self.forward::<backend::SemanticSearchRequest, _, _>(ctx, req).await
    }

    pub async fn analyze_experts_by_topic(
        &self,
        ctx: &CallContext,
        req: proto::ExpertAnalysisRequest,
    ) -> Result<proto::ExpertAnalysisResponse> {
        self.forward::<backend::ExpertAnalysisRequest, _, _>(ctx, req).await
    }

    pub async fn analyze_departments_by_topic(
        &self,
        ctx: &CallContext,
        req: proto::DepartmentAnalysisRequest,
    ) -> Result<proto::DepartmentAnalysisResponse> {
        self.forward::<backend::DepartmentAnalysisRequest, _, _>(ctx, req).await
    }

    async fn forward<B, In, Out>(&self, ctx: &CallContext, req: In) -> Result<Out>
    where
        B: BackendRequest,
        In: Into<B>,
        Out: From<B::Response>,
    {
        let operation = B::OPERATION;
        let request: B = req.into();

        debug!("{} -> {}", operation, self.client.endpoint(operation));
        let response = guarded(ctx, operation, self.client.call(&request)).await?;
        Ok(response.into())
    }
}

/// Run a backend call, giving up early when the caller cancels or its
/// deadline passes. Dropping `call` aborts the in-flight HTTP request.
async fn guarded<T, F>(ctx: &CallContext, operation: Operation, call: F) -> Result<T>
where
    F: Future<Output = std::result::Result<T, BackendError>>,
{
    if ctx.is_cancelled() {
        return Err(Error::Cancelled { operation });
    }

    let deadline = async {
        match ctx.deadline() {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending().await,
        }
    };

    tokio::select! {
        biased;
        _ = ctx.cancelled() => Err(Error::Cancelled { operation }),
        _ = deadline => Err(Error::DeadlineExceeded { operation }),
        result = call => result.map_err(|source| Error::backend(operation, source)),
    }
}
