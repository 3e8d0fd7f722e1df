//! Common test utilities: a scripted inference backend and an in-process gateway.

#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    Router,
};
use classifier_agent_core::{
    proto::AIAnalysisServiceClient, server, AnalysisService, BackendClient, BackendConfig,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tonic::transport::Channel;

/// Canned answer for one backend path.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    pub fn json(body: Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// One request as the backend saw it.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    replies: Arc<HashMap<String, Reply>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// Scripted stand-in for the inference backend, served by axum on loopback.
pub struct MockBackend {
    pub url: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockBackend {
    pub async fn start(replies: Vec<(&str, Reply)>) -> Self {
        let state = MockState {
            replies: Arc::new(
                replies
                    .into_iter()
                    .map(|(path, reply)| (path.to_string(), reply))
                    .collect(),
            ),
            calls: Arc::new(Mutex::new(Vec::new())),
        };
        let calls = state.calls.clone();

        let app = Router::new().fallback(respond).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { url, calls }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.path == path)
            .collect()
    }

    pub fn client(&self) -> BackendClient {
        BackendClient::new(&BackendConfig::new(self.url.clone())).unwrap()
    }

    pub fn service(&self) -> AnalysisService {
        AnalysisService::new(self.client())
    }
}

async fn respond(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let path = uri.path().to_string();
    state.calls.lock().unwrap().push(RecordedCall {
        method: method.to_string(),
        path: path.clone(),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    let reply = state
        .replies
        .get(&path)
        .cloned()
        .unwrap_or_else(|| Reply::status(404, "{\"detail\":\"Not Found\"}"));

    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }

    (
        StatusCode::from_u16(reply.status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
}

/// A base URL nothing listens on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Serve the gateway in-process against `backend_url` and connect a client to it.
pub async fn start_gateway(backend_url: &str) -> AIAnalysisServiceClient<Channel> {
    start_gateway_with(BackendConfig::new(backend_url)).await
}

pub async fn start_gateway_with(config: BackendConfig) -> AIAnalysisServiceClient<Channel> {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let service = AnalysisService::new(BackendClient::new(&config).unwrap());

    tokio::spawn(server::serve_with_listener(
        listener,
        service,
        std::future::pending(),
    ));

    AIAnalysisServiceClient::connect(format!("http://{}", addr))
        .await
        .unwrap()
}
