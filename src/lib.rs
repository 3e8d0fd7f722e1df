//! Classifier agent: a gRPC gateway in front of an HTTP/JSON inference backend.
//!
//! Calls arrive on the `ai_agent.AIAnalysisService` RPC surface ([`server`]),
//! are translated and forwarded by the orchestration layer ([`service`]) and
//! reach the backend through a single pooled HTTP client ([`client`]).

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod proto;
pub mod server;
pub mod service;

// Re-export commonly used types
pub use client::{BackendClient, Operation};
pub use config::{BackendConfig, GatewayConfig};
pub use error::{BackendError, Error, Result};
pub use server::AnalysisHandler;
pub use service::{AnalysisService, CallContext};
