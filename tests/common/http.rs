/// Mock Elasticsearch upstream for end to end tests
use anyhow::Result;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use url::Url;

/// What the mock answers on `GET /{indices}/_stats`
#[derive(Clone)]
pub enum MockReply {
    Json(serde_json::Value),
    Raw(&'static str),
    Status(StatusCode),
}

#[derive(Clone)]
struct MockState {
    reply: MockReply,
    requests: Arc<Mutex<Vec<String>>>,
}

pub struct MockUpstream {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockUpstream {
    /// Serve `reply` on an ephemeral loopback port
    pub async fn start(reply: MockReply) -> Result<Self> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            reply,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/{indices}/_stats", get(stats_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { addr, requests })
    }

    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}", self.addr)).expect("valid mock url")
    }

    /// Index patterns requested so far
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn stats_handler(State(state): State<MockState>, Path(indices): Path<String>) -> Response {
    state.requests.lock().unwrap().push(indices);
    match state.reply {
        MockReply::Json(body) => axum::Json(body).into_response(),
        MockReply::Raw(body) => (StatusCode::OK, body).into_response(),
        MockReply::Status(status) => (status, "upstream unavailable").into_response(),
    }
}
