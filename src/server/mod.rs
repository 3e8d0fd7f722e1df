//! RPC dispatch for the `ai_agent.AIAnalysisService` surface.
//!
//! A routing table only: each method hands the request and its call context
//! to [`AnalysisService`] and returns the outcome as-is.

use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::{Request, Response, Status};
use tracing::{info, info_span, Instrument};

use crate::error::Result;
use crate::proto::{self, AIAnalysisService, AIAnalysisServiceServer};
use crate::service::{AnalysisService, CallContext};

/// tonic handler bound to the orchestration layer.
#[derive(Debug, Clone)]
pub struct AnalysisHandler {
    service: AnalysisService,
}

impl AnalysisHandler {
    pub fn new(service: AnalysisService) -> Self {
        Self { service }
    }

    pub fn into_server(self) -> AIAnalysisServiceServer<Self> {
        AIAnalysisServiceServer::new(self)
    }
}

#[tonic::async_trait]
impl AIAnalysisService for AnalysisHandler {
    async fn analyze_article_topics(
        &self,
        request: Request<proto::ArticleAnalysisRequest>,
    ) -> std::result::Result<Response<proto::ArticleAnalysisResponse>, Status> {
        let ctx = CallContext::from_metadata(request.metadata());
        self.service
            .analyze_article_topics(&ctx, request.into_inner())
            .instrument(info_span!("rpc", method = "AnalyzeArticleTopics"))
            .await
            .map(Response::new)
            .map_err(Status::from)
    }

    async fn analyze_user_query(
        &self,
        request: Request<proto::QueryAnalysisRequest>,
    ) -> std::result::Result<Response<proto::QueryAnalysisResponse>, Status> {
        let ctx = CallContext::from_metadata(request.metadata());
        self.service
            .analyze_user_query(&ctx, request.into_inner())
            .instrument(info_span!("rpc", method = "AnalyzeUserQuery"))
            .await
            .map(Response::new)
            .map_err(Status::from)
    }

    async fn semantic_article_search(
        &self,
        request: Request<proto::SemanticSearchRequest>,
    ) -> std::result::Result<Response<proto::SemanticSearchResponse>, Status> {
        let ctx = CallContext::from_metadata(request.metadata());
        self.service
            .semantic_article_search(&ctx, request.into_inner())
            .instrument(info_span!("rpc", method = "SemanticArticleSearch"))
            .await
            .map(Response::new)
            .map_err(Status::from)
    }

    async fn analyze_experts_by_topic(
        &self,
        request: Request<proto::ExpertAnalysisRequest>,
    ) -> std::result::Result<Response<proto::ExpertAnalysisResponse>, Status> {
        let ctx = CallContext::from_metadata(request.metadata());
        self.service
            .analyze_experts_by_topic(&ctx, request.into_inner())
            .instrument(info_span!("rpc", method = "AnalyzeExpertsByTopic"))
            .await
            .map(Response::new)
            .map_err(Status::from)
    }

    async fn analyze_departments_by_topic(
        &self,
        request: Request<proto::DepartmentAnalysisRequest>,
    ) -> std::result::Result<Response<proto::DepartmentAnalysisResponse>, Status> {
        let ctx = CallContext::from_metadata(request.metadata());
        self.service
            .analyze_departments_by_topic(&ctx, request.into_inner())
            .instrument(info_span!("rpc", method = "AnalyzeDepartmentsByTopic"))
            .await
            .map(Response::new)
            .map_err(Status::from)
    }
}

/// Serve the gateway on `addr` until `shutdown` resolves.
pub async fn serve<F>(addr: SocketAddr, service: AnalysisService, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    let listener = TcpListener::bind(addr).await?;
    serve_with_listener(listener, service, shutdown).await
}

/// Serve the gateway on an already bound listener until `shutdown` resolves.
pub async fn serve_with_listener<F>(
    listener: TcpListener,
    service: AnalysisService,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()>,
{
    info!("Starting gateway on {}", listener.local_addr()?);
    info!("Forwarding to inference backend at {}", service.client().base_url());

    Server::builder()
        .add_service(AnalysisHandler::new(service).into_server())
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await?;

    info!("Gateway stopped");
    Ok(())
}
