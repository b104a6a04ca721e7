#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use shortener_form::prelude::*;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

pub const KNOWN_CODE: &str = "abc123";
pub const KNOWN_TARGET: &str = "https://example.com/long/page";
pub const TAKEN_ALIAS: &str = "taken";

/// One request seen by the stub shorten endpoint.
#[derive(Debug, Clone, Default)]
pub struct Recorded {
    pub query: HashMap<String, String>,
    pub raw_query: Option<String>,
    pub password: Option<String>,
    pub old_password: Option<String>,
}

#[derive(Clone, Default)]
pub struct StubState {
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl StubState {
    pub fn recorded(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn shorten(
    State(state): State<StubState>,
    Query(query): Query<HashMap<String, String>>,
    uri: axum::http::Uri,
    headers: HeaderMap,
) -> Response {
    state.requests.lock().unwrap().push(Recorded {
        query: query.clone(),
        raw_query: uri.query().map(str::to_string),
        password: header_string(&headers, "password"),
        old_password: header_string(&headers, "old_password"),
    });

    if !query.contains_key("url") {
        return (StatusCode::BAD_REQUEST, "No url provided in user request").into_response();
    }

    match query.get("alias").map(String::as_str) {
        Some(TAKEN_ALIAS) => (
            StatusCode::FORBIDDEN,
            "Requested alias is already taken and your password doesn't grant you a permission to change it",
        )
            .into_response(),
        Some(alias) => (StatusCode::OK, alias.to_string()).into_response(),
        None => (StatusCode::OK, KNOWN_CODE).into_response(),
    }
}

async fn fetch(Query(query): Query<HashMap<String, String>>) -> Response {
    match query.get("s").map(String::as_str) {
        Some(KNOWN_CODE) => (
            StatusCode::FOUND,
            [(header::LOCATION, KNOWN_TARGET)],
            KNOWN_TARGET,
        )
            .into_response(),
        Some(_) => (StatusCode::NOT_FOUND, "Key not found").into_response(),
        None => (StatusCode::BAD_REQUEST, "No key provided in user request").into_response(),
    }
}

/// Starts a local stand-in for the shorten and fetch endpoints.
pub async fn spawn_stub() -> (SocketAddr, StubState) {
    let state = StubState::default();
    let app = Router::new()
        .route("/shorten", get(shorten))
        .route("/fetch", get(fetch))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, state)
}

/// Address on which nothing is listening.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

pub fn test_config(addr: SocketAddr) -> ClientConfig {
    ClientConfig {
        app_url: format!("http://{addr}/shorten"),
        fetch_prefix: format!("http://{addr}/fetch?s="),
        timeout_secs: 5,
        log_level: "warn".to_string(),
        log_format: "text".to_string(),
    }
}

/// Clipboard that records writes, or refuses them.
#[derive(Default)]
pub struct RecordingClipboard {
    pub fail: bool,
    pub writes: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClientError> {
        if self.fail {
            return Err(ClientError::Clipboard("permission denied".to_string()));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Notifier that records every alert.
#[derive(Default)]
pub struct RecordingNotifier {
    pub alerts: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

pub type TestController =
    FormController<ReqwestShortenerApi, RecordingClipboard, RecordingNotifier>;

pub fn create_test_controller(
    config: &ClientConfig,
    clipboard: RecordingClipboard,
) -> (TestController, Arc<RecordingClipboard>, Arc<RecordingNotifier>) {
    let api = Arc::new(ReqwestShortenerApi::new(config).unwrap());
    let clipboard = Arc::new(clipboard);
    let notifier = Arc::new(RecordingNotifier::default());
    let controller = FormController::new(config, api, clipboard.clone(), notifier.clone());
    (controller, clipboard, notifier)
}
