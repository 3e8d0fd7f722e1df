//! Wire messages of the `ai_agent` RPC package.
//!
//! The messages are declared directly with `prost` derives; the service
//! traits, servers and clients are generated by `build.rs` and included at
//! the bottom of this module; [`AIAnalysisService`], [`AIAnalysisServiceServer`]
//! and [`AIAnalysisServiceClient`] are re-exported from there.

#[derive(Clone, PartialEq, prost::Message)]
pub struct ArticleAnalysisRequest {
    #[prost(string, tag = "1")]
    pub document_id: String,
    #[prost(string, tag = "2")]
    pub title_ru: String,
    #[prost(string, tag = "3")]
    pub abstract_ru: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ArticleTopic {
    #[prost(string, tag = "1")]
    pub topic_name: String,
    #[prost(float, tag = "2")]
    pub confidence: f32,
    /// Either `primary` or `secondary` as assigned by the backend.
    #[prost(string, tag = "3")]
    pub topic_type: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ArticleAnalysisResponse {
    #[prost(message, repeated, tag = "1")]
    pub topics: Vec<ArticleTopic>,
    #[prost(bytes = "vec", tag = "2")]
    pub title_embedding: Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    pub abstract_embedding: Vec<u8>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct QueryAnalysisRequest {
    #[prost(string, tag = "1")]
    pub user_query: String,
    #[prost(string, tag = "2")]
    pub context: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct QueryAnalysisResponse {
    #[prost(string, tag = "1")]
    pub interpreted_query: String,
    #[prost(string, repeated, tag = "2")]
    pub key_concepts: Vec<String>,
    #[prost(bytes = "vec", tag = "3")]
    pub query_vector: Vec<u8>,
    #[prost(string, tag = "4")]
    pub query_type: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ArticleForSearch {
    #[prost(string, tag = "1")]
    pub document_id: String,
    #[prost(string, tag = "2")]
    pub title_ru: String,
    #[prost(string, tag = "3")]
    pub abstract_ru: String,
    #[prost(bytes = "vec", tag = "4")]
    pub title_embedding: Vec<u8>,
    #[prost(bytes = "vec", tag = "5")]
    pub abstract_embedding: Vec<u8>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SemanticSearchRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub query_vector: Vec<u8>,
    #[prost(message, repeated, tag = "2")]
    pub articles: Vec<ArticleForSearch>,
    #[prost(int32, tag = "3")]
    pub max_results: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SearchResult {
    #[prost(string, tag = "1")]
    pub document_id: String,
    #[prost(float, tag = "2")]
    pub relevance_score: f32,
    #[prost(string, repeated, tag = "3")]
    pub matched_concepts: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SemanticSearchResponse {
    #[prost(message, repeated, tag = "1")]
    pub results: Vec<SearchResult>,
    #[prost(int32, tag = "2")]
    pub total_found: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AuthorArticles {
    #[prost(string, tag = "1")]
    pub author_id: String,
    #[prost(string, repeated, tag = "2")]
    pub article_ids: Vec<String>,
    #[prost(string, repeated, tag = "3")]
    pub article_topics: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ExpertAnalysisRequest {
    #[prost(string, tag = "1")]
    pub topic: String,
    #[prost(message, repeated, tag = "2")]
    pub authors: Vec<AuthorArticles>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ExpertAnalysis {
    #[prost(string, tag = "1")]
    pub author_id: String,
    #[prost(float, tag = "2")]
    pub expertise_score: f32,
    #[prost(int32, tag = "3")]
    pub topic_article_count: i32,
    #[prost(int32, tag = "4")]
    pub total_citations: i32,
    #[prost(int32, tag = "5")]
    pub last_activity_year: i32,
    #[prost(string, repeated, tag = "6")]
    pub related_topics: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ExpertAnalysisResponse {
    #[prost(message, repeated, tag = "1")]
    pub experts: Vec<ExpertAnalysis>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DepartmentData {
    #[prost(string, tag = "1")]
    pub organization_id: String,
    #[prost(string, repeated, tag = "2")]
    pub author_ids: Vec<String>,
    #[prost(string, repeated, tag = "3")]
    pub article_topics: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DepartmentAnalysisRequest {
    #[prost(string, tag = "1")]
    pub topic: String,
    #[prost(message, repeated, tag = "2")]
    pub departments: Vec<DepartmentData>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DepartmentAnalysis {
    #[prost(string, tag = "1")]
    pub organization_id: String,
    #[prost(float, tag = "2")]
    pub strength_score: f32,
    #[prost(int32, tag = "3")]
    pub expert_count: i32,
    #[prost(int32, tag = "4")]
    pub total_articles: i32,
    #[prost(string, repeated, tag = "5")]
    pub key_author_ids: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DepartmentAnalysisResponse {
    #[prost(message, repeated, tag = "1")]
    pub departments: Vec<DepartmentAnalysis>,
}

include!(concat!(env!("OUT_DIR"), "/ai_agent.AIAnalysisService.rs"));

pub use a_i_analysis_service_client::AIAnalysisServiceClient;
pub use a_i_analysis_service_server::{AIAnalysisService, AIAnalysisServiceServer};

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_bytes_fields_survive_wire_encoding() {
        let response = QueryAnalysisResponse {
            interpreted_query: "neural networks".into(),
            key_concepts: vec!["neural".into(), "networks".into()],
            query_vector: vec![0, 255, 7, 0],
            query_type: "search".into(),
        };

        let encoded = response.encode_to_vec();
        let decoded = QueryAnalysisResponse::decode(encoded.as_slice()).unwrap();
        assert_eq!(decoded, response);
    }
}
