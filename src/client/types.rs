//! JSON shapes exchanged with the inference backend.
//!
//! Every response field is required: a missing key or a `null` collection is
//! a decoding failure, never a silently defaulted value. Unknown keys are
//! ignored.

use serde::{Deserialize, Serialize};

use super::{base64_bytes, BackendRequest, Operation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleAnalysisRequest {
    pub document_id: String,
    pub title_ru: String,
    pub abstract_ru: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleTopic {
    pub topic_name: String,
    pub confidence: f32,
    pub topic_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleAnalysisResponse {
    pub topics: Vec<ArticleTopic>,
    #[serde(with = "base64_bytes")]
    pub title_embedding: Vec<u8>,
    #[serde(with = "base64_bytes")]
    pub abstract_embedding: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryAnalysisRequest {
    pub user_query: String,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryAnalysisResponse {
    pub interpreted_query: String,
    pub key_concepts: Vec<String>,
    #[serde(with = "base64_bytes")]
    pub query_vector: Vec<u8>,
    pub query_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleForSearch {
    pub document_id: String,
    pub title_ru: String,
    pub abstract_ru: String,
    #[serde(with = "base64_bytes")]
    pub title_embedding: Vec<u8>,
    #[serde(with = "base64_bytes")]
    pub abstract_embedding: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticSearchRequest {
    #[serde(with = "base64_bytes")]
    pub query_vector: Vec<u8>,
    pub articles: Vec<ArticleForSearch>,
    pub max_results: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub document_id: String,
    pub relevance_score: f32,
    pub matched_concepts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticSearchResponse {
    pub results: Vec<SearchResult>,
    pub total_found: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorArticles {
    pub author_id: String,
    pub article_ids: Vec<String>,
    pub article_topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertAnalysisRequest {
    pub topic: String,
    pub authors: Vec<AuthorArticles>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertAnalysis {
    pub author_id: String,
    pub expertise_score: f32,
    pub topic_article_count: i32,
    pub total_citations: i32,
    pub last_activity_year: i32,
    pub related_topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertAnalysisResponse {
    pub experts: Vec<ExpertAnalysis>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentData {
    pub organization_id: String,
    pub author_ids: Vec<String>,
    pub article_topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentAnalysisRequest {
    pub topic: String,
    pub departments: Vec<DepartmentData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentAnalysis {
    pub organization_id: String,
    pub strength_score: f32,
    pub expert_count: i32,
    pub total_articles: i32,
    pub key_author_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentAnalysisResponse {
    pub departments: Vec<DepartmentAnalysis>,
}

impl BackendRequest for ArticleAnalysisRequest {
    const OPERATION: Operation = Operation::ArticleAnalysis;
    type Response = ArticleAnalysisResponse;
}

impl BackendRequest for QueryAnalysisRequest {
    const OPERATION: Operation = Operation::QueryAnalysis;
    type Response = QueryAnalysisResponse;
}

impl BackendRequest for SemanticSearchRequest {
    const OPERATION: Operation = Operation::SemanticSearch;
    type Response = SemanticSearchResponse;
}

impl BackendRequest for ExpertAnalysisRequest {
    const OPERATION: Operation = Operation::ExpertAnalysis;
    type Response = ExpertAnalysisResponse;
}

impl BackendRequest for DepartmentAnalysisRequest {
    const OPERATION: Operation = Operation::DepartmentAnalysis;
    type Response = DepartmentAnalysisResponse;
}
