//! In-process mock of the InfoFi backend.
//!
//! Every request is recorded and answered with the same canned reply.

#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use infofi_gateway::{GatewayClient, GatewayConfig};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
pub enum Reply {
    Json(StatusCode, Value),
    Text(StatusCode, &'static str),
    Empty(StatusCode),
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    reply: Reply,
}

pub struct MockBackend {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockBackend {
    pub async fn start(reply: Value) -> Self {
        Self::start_with_status(StatusCode::OK, reply).await
    }

    pub async fn start_with_status(status: StatusCode, reply: Value) -> Self {
        Self::start_with_reply(Reply::Json(status, reply)).await
    }

    pub async fn start_with_reply(reply: Reply) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            requests: requests.clone(),
            reply,
        };
        let app = Router::new().fallback(record).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend");
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> GatewayClient {
        client_for(&GatewayConfig::with_base_url(self.base_url()))
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request received so far.
    pub fn single(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected one request, got {:?}", requests);
        requests[0].clone()
    }

    pub fn clear(&self) {
        self.requests.lock().unwrap().clear();
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice(&body).ok()
    };
    state.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        body,
    });
    match state.reply {
        Reply::Json(status, body) => (status, Json(body)).into_response(),
        Reply::Text(status, body) => {
            (status, [(header::CONTENT_TYPE, "text/plain")], body).into_response()
        }
        Reply::Empty(status) => status.into_response(),
    }
}

/// Gateway client that talks to loopback directly, ignoring proxy settings.
pub fn client_for(config: &GatewayConfig) -> GatewayClient {
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("http client");
    GatewayClient::with_http(config, http).expect("client")
}

/// Address nothing listens on.
pub fn closed_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.local_addr().expect("address")
}
