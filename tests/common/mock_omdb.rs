//! Mock OMDb server answering by query parameter.

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub params: HashMap<String, String>,
}

impl CapturedRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// A mock response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"Response":"False","Error":"Internal error"}"#.to_string(),
            delay_ms: 0,
        }
    }

    /// `Response: "False"` payload, as OMDb sends for unknown titles.
    pub fn not_found() -> Self {
        Self::json(r#"{"Response":"False","Error":"Movie not found!"}"#)
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

/// Search payload for `(imdb_id, title, year)` rows.
pub fn search_body(movies: &[(&str, &str, &str)]) -> String {
    let rows: Vec<serde_json::Value> = movies
        .iter()
        .map(|(id, title, year)| {
            serde_json::json!({
                "Title": title,
                "Year": year,
                "imdbID": id,
                "Type": "movie",
                "Poster": format!("https://img.example/{id}.jpg"),
            })
        })
        .collect();
    serde_json::json!({
        "Search": rows,
        "totalResults": movies.len().to_string(),
        "Response": "True",
    })
    .to_string()
}

/// Detail payload with the fields the watched list needs.
pub fn detail_body(id: &str, title: &str, runtime: &str, rating: &str) -> String {
    serde_json::json!({
        "Title": title,
        "Year": "2013",
        "Rated": "R",
        "Released": "27 Sep 2013",
        "Runtime": runtime,
        "Genre": "Action, Biography, Drama",
        "Director": "Ron Howard",
        "Actors": "Daniel Brühl, Chris Hemsworth",
        "Plot": "The merciless 1970s rivalry between two Formula One drivers.",
        "Poster": format!("https://img.example/{id}.jpg"),
        "imdbRating": rating,
        "imdbID": id,
        "Response": "True",
    })
    .to_string()
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    /// Keyed by `s=<query>` or `i=<id>`.
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
}

/// Mock OMDb server for testing.
pub struct MockOmdb {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockOmdb {
    /// Start a new mock server on an ephemeral port.
    pub async fn start() -> Self {
        let state = MockState::default();
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/", get(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        tokio::time::sleep(Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Answer `s=<query>` with `resp`.
    pub fn on_search(&self, query: &str, resp: MockResponse) {
        self.state
            .responses
            .lock()
            .insert(format!("s={query}"), resp);
    }

    /// Answer `i=<id>` with `resp`.
    pub fn on_detail(&self, imdb_id: &str, resp: MockResponse) {
        self.state
            .responses
            .lock()
            .insert(format!("i={imdb_id}"), resp);
    }

    pub fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().clone()
    }

    /// Searches received so far, in arrival order.
    pub fn searched_queries(&self) -> Vec<String> {
        self.captured_requests()
            .iter()
            .filter_map(|req| req.param("s").map(str::to_string))
            .collect()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockOmdb {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.requests.lock().push(CapturedRequest {
        params: params.clone(),
    });

    if params.get("apikey").map_or(true, |key| key.is_empty()) {
        return (
            StatusCode::UNAUTHORIZED,
            r#"{"Response":"False","Error":"No API key provided."}"#,
        )
            .into_response();
    }

    let key = if let Some(query) = params.get("s") {
        format!("s={query}")
    } else if let Some(id) = params.get("i") {
        format!("i={id}")
    } else {
        String::new()
    };

    let mock_resp = state
        .responses
        .lock()
        .get(&key)
        .cloned()
        .unwrap_or_else(MockResponse::not_found);

    if mock_resp.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(mock_resp.delay_ms)).await;
    }

    let status = StatusCode::from_u16(mock_resp.status).unwrap();
    (
        status,
        [("content-type", "application/json")],
        mock_resp.body,
    )
        .into_response()
}
