//! Field-by-field conversions between RPC messages and backend JSON shapes.
//!
//! Every conversion is a direct copy. Collections keep their order and
//! length, binary payloads are moved through untouched, and nothing is
//! computed or defaulted here.

use crate::client::types as backend;
use crate::proto;

impl From<proto::ArticleAnalysisRequest> for backend::ArticleAnalysisRequest {
    fn from(req: proto::ArticleAnalysisRequest) -> Self {
        Self {
            document_id: req.document_id,
            title_ru: req.title_ru,
            abstract_ru: req.abstract_ru,
        }
    }
}

impl From<backend::ArticleTopic> for proto::ArticleTopic {
    fn from(topic: backend::ArticleTopic) -> Self {
        Self {
            topic_name: topic.topic_name,
            confidence: topic.confidence,
            topic_type: topic.topic_type,
        }
    }
}

impl From<backend::ArticleAnalysisResponse> for proto::ArticleAnalysisResponse {
    fn from(resp: backend::ArticleAnalysisResponse) -> Self {
        Self {
            topics: resp.topics.into_iter().map(Into::into).collect(),
            title_embedding: resp.title_embedding,
            abstract_embedding: resp.abstract_embedding,
        }
    }
}

impl From<proto::QueryAnalysisRequest> for backend::QueryAnalysisRequest {
    fn from(req: proto::QueryAnalysisRequest) -> Self {
        Self {
            user_query: req.user_query,
            context: req.context,
        }
    }
}

impl From<backend::QueryAnalysisResponse> for proto::QueryAnalysisResponse {
    fn from(resp: backend::QueryAnalysisResponse) -> Self {
        Self {
            interpreted_query: resp.interpreted_query,
            key_concepts: resp.key_concepts,
            query_vector: resp.query_vector,
            query_type: resp.query_type,
        }
    }
}

impl From<proto::ArticleForSearch> for backend::ArticleForSearch {
    fn from(article: proto::ArticleForSearch) -> Self {
        Self {
            document_id: article.document_id,
            title_ru: article.title_ru,
            abstract_ru: article.abstract_ru,
            title_embedding: article.title_embedding,
            abstract_embedding: article.abstract_embedding,
        }
    }
}

impl From<proto::SemanticSearchRequest> for backend::SemanticSearchRequest {
    fn from(req: proto::SemanticSearchRequest) -> Self {
        Self {
            query_vector: req.query_vector,
            articles: req.articles.into_iter().map(Into::into).collect(),
            max_results: req.max_results,
        }
    }
}

impl From<backend::SearchResult> for proto::SearchResult {
    fn from(result: backend::SearchResult) -> Self {
        Self {
            document_id: result.document_id,
            relevance_score: result.relevance_score,
            matched_concepts: result.matched_concepts,
        }
    }
}

impl From<backend::SemanticSearchResponse> for proto::SemanticSearchResponse {
    fn from(resp: backend::SemanticSearchResponse) -> Self {
        Self {
            results: resp.results.into_iter().map(Into::into).collect(),
            total_found: resp.total_found,
        }
    }
}

impl From<proto::AuthorArticles> for backend::AuthorArticles {
    fn from(author: proto::AuthorArticles) -> Self {
        Self {
            author_id: author.author_id,
            article_ids: author.article_ids,
            article_topics: author.article_topics,
        }
    }
}

impl From<proto::ExpertAnalysisRequest> for backend::ExpertAnalysisRequest {
    fn from(req: proto::ExpertAnalysisRequest) -> Self {
        Self {
            topic: req.topic,
            authors: req.authors.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<backend::ExpertAnalysis> for proto::ExpertAnalysis {
    fn from(expert: backend::ExpertAnalysis) -> Self {
        Self {
            author_id: expert.author_id,
            expertise_score: expert.expertise_score,
            topic_article_count: expert.topic_article_count,
            total_citations: expert.total_citations,
            last_activity_year: expert.last_activity_year,
            related_topics: expert.related_topics,
        }
    }
}

impl From<backend::ExpertAnalysisResponse> for proto::ExpertAnalysisResponse {
    fn from(resp: backend::ExpertAnalysisResponse) -> Self {
        Self {
            experts: resp.experts.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<proto::DepartmentData> for backend::DepartmentData {
    fn from(dept: proto::DepartmentData) -> Self {
        Self {
            organization_id: dept.organization_id,
            author_ids: dept.author_ids,
            article_topics: dept.article_topics,
        }
    }
}

impl From<proto::DepartmentAnalysisRequest> for backend::DepartmentAnalysisRequest {
    fn from(req: proto::DepartmentAnalysisRequest) -> Self {
        Self {
            topic: req.topic,
            departments: req.departments.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<backend::DepartmentAnalysis> for proto::DepartmentAnalysis {
    fn from(dept: backend::DepartmentAnalysis) -> Self {
        Self {
            organization_id: dept.organization_id,
            strength_score: dept.strength_score,
            expert_count: dept.expert_count,
            total_articles: dept.total_articles,
            key_author_ids: dept.key_author_ids,
        }
    }
}

impl From<backend::DepartmentAnalysisResponse> for proto::DepartmentAnalysisResponse {
    fn from(resp: backend::DepartmentAnalysisResponse) -> Self {
        Self {
            departments: resp.departments.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_response_scenario() {
        let resp = backend::ArticleAnalysisResponse {
            topics: vec![backend::ArticleTopic {
                topic_name: "ml".into(),
                confidence: 0.9,
                topic_type: "primary".into(),
            }],
            title_embedding: vec![1, 2, 3],
            abstract_embedding: vec![],
        };

        let rpc = proto::ArticleAnalysisResponse::from(resp);
        assert_eq!(rpc.topics.len(), 1);
        assert_eq!(rpc.topics[0].topic_name, "ml");
        assert_eq!(rpc.topics[0].confidence, 0.9);
        assert_eq!(rpc.topics[0].topic_type, "primary");
        assert_eq!(rpc.title_embedding, vec![1, 2, 3]);
        assert!(rpc.abstract_embedding.is_empty());
    }

    #[test]
    fn test_search_request_keeps_article_order() {
        let articles: Vec<_> = (0..4)
            .map(|i| proto::ArticleForSearch {
                document_id: format!("doc{}", i),
                title_ru: format!("title {}", i),
                abstract_ru: format!("abstract {}", i),
                title_embedding: vec![i as u8; i],
                abstract_embedding: vec![255 - i as u8],
            })
            .collect();
        let req = proto::SemanticSearchRequest {
            query_vector: vec![9, 8, 7],
            articles: articles.clone(),
            max_results: 3,
        };

        let out = backend::SemanticSearchRequest::from(req);
        assert_eq!(out.query_vector, vec![9, 8, 7]);
        assert_eq!(out.max_results, 3);
        assert_eq!(out.articles.len(), articles.len());
        for (sent, original) in out.articles.iter().zip(&articles) {
            assert_eq!(sent.document_id, original.document_id);
            assert_eq!(sent.title_ru, original.title_ru);
            assert_eq!(sent.abstract_ru, original.abstract_ru);
            assert_eq!(sent.title_embedding, original.title_embedding);
            assert_eq!(sent.abstract_embedding, original.abstract_embedding);
        }
    }

    #[test]
    fn test_duplicates_are_not_collapsed() {
        let resp = backend::SemanticSearchResponse {
            results: vec![
                backend::SearchResult {
                    document_id: "b".into(),
                    relevance_score: 0.2,
                    matched_concepts: vec!["x".into(), "x".into()],
                },
                backend::SearchResult {
                    document_id: "a".into(),
                    relevance_score: 0.8,
                    matched_concepts: vec![],
                },
                backend::SearchResult {
                    document_id: "b".into(),
                    relevance_score: 0.2,
                    matched_concepts: vec!["x".into(), "x".into()],
                },
            ],
            total_found: 17,
        };

        let rpc = proto::SemanticSearchResponse::from(resp);
        let ids: Vec<_> = rpc.results.iter().map(|r| r.document_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "b"]);
        assert_eq!(rpc.results[0].matched_concepts, vec!["x", "x"]);
        assert!(rpc.results[1].matched_concepts.is_empty());
        assert_eq!(rpc.total_found, 17);
    }

    #[test]
    fn test_expert_and_department_round_trip() {
        let experts = backend::ExpertAnalysisResponse {
            experts: vec![backend::ExpertAnalysis {
                author_id: "expert_001".into(),
                expertise_score: 0.75,
                topic_article_count: 2,
                total_citations: 40,
                last_activity_year: 2024,
                related_topics: vec!["cv".into(), "nn".into()],
            }],
        };
        let rpc = proto::ExpertAnalysisResponse::from(experts);
        assert_eq!(rpc.experts[0].author_id, "expert_001");
        assert_eq!(rpc.experts[0].expertise_score, 0.75);
        assert_eq!(rpc.experts[0].topic_article_count, 2);
        assert_eq!(rpc.experts[0].total_citations, 40);
        assert_eq!(rpc.experts[0].last_activity_year, 2024);
        assert_eq!(rpc.experts[0].related_topics, vec!["cv", "nn"]);

        let departments = backend::DepartmentAnalysisResponse {
            departments: vec![backend::DepartmentAnalysis {
                organization_id: "dept_ai".into(),
                strength_score: 0.5,
                expert_count: 3,
                total_articles: 12,
                key_author_ids: vec!["a2".into(), "a1".into()],
            }],
        };
        let rpc = proto::DepartmentAnalysisResponse::from(departments);
        assert_eq!(rpc.departments[0].organization_id, "dept_ai");
        assert_eq!(rpc.departments[0].strength_score, 0.5);
        assert_eq!(rpc.departments[0].expert_count, 3);
        assert_eq!(rpc.departments[0].total_articles, 12);
        assert_eq!(rpc.departments[0].key_author_ids, vec!["a2", "a1"]);
    }

    #[test]
    fn test_empty_collections_stay_empty() {
        let rpc = proto::QueryAnalysisResponse::from(backend::QueryAnalysisResponse {
            interpreted_query: String::new(),
            key_concepts: vec![],
            query_vector: vec![],
            query_type: String::new(),
        });
        assert!(rpc.key_concepts.is_empty());
        assert!(rpc.query_vector.is_empty());

        let req = backend::ExpertAnalysisRequest::from(proto::ExpertAnalysisRequest {
            topic: "t".into(),
            authors: vec![],
        });
        assert!(req.authors.is_empty());

        let req = backend::DepartmentAnalysisRequest::from(proto::DepartmentAnalysisRequest {
            topic: "t".into(),
            departments: vec![proto::DepartmentData {
                organization_id: "o".into(),
                author_ids: vec![],
                article_topics: vec!["t".into()],
            }],
        });
        assert!(req.departments[0].author_ids.is_empty());
        assert_eq!(req.departments[0].article_topics, vec!["t"]);
    }
}
