//! Build script generating the tonic server and client stubs for the
//! `ai_agent.AIAnalysisService` RPC surface.
//!
//! The message types are declared by hand in `src/proto.rs`, so only the
//! service plumbing is generated here and no `protoc` is needed.

use tonic_build::manual::{Builder, Method, Service};

const CODEC: &str = "tonic::codec::ProstCodec";

fn unary(name: &str, route: &str, input: &str, output: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route)
        .input_type(format!("crate::proto::{}", input))
        .output_type(format!("crate::proto::{}", output))
        .codec_path(CODEC)
        .build()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let service = Service::builder()
        .name("AIAnalysisService")
        .package("ai_agent")
        .method(unary(
            "analyze_article_topics",
            "AnalyzeArticleTopics",
            "ArticleAnalysisRequest",
            "ArticleAnalysisResponse",
        ))
        .method(unary(
            "analyze_user_query",
            "AnalyzeUserQuery",
            "QueryAnalysisRequest",
            "QueryAnalysisResponse",
        ))
        .method(unary(
            "semantic_article_search",
            "SemanticArticleSearch",
            "SemanticSearchRequest",
            "SemanticSearchResponse",
        ))
        .method(unary(
            "analyze_experts_by_topic",
            "AnalyzeExpertsByTopic",
            "ExpertAnalysisRequest",
            "ExpertAnalysisResponse",
        ))
        .method(unary(
            "analyze_departments_by_topic",
            "AnalyzeDepartmentsByTopic",
            "DepartmentAnalysisRequest",
            "DepartmentAnalysisResponse",
        ))
        .build();

    Builder::new().compile(&[service]);
}
