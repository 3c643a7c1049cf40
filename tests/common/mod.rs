// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use pet_rescue_client::{ApiClient, ClientConfig, MemoryStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A request as seen by the fake backend.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub method: String,
    /// Path and query, relative to `/api`
    pub path: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

#[allow(dead_code)]
impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// A scripted response.
#[derive(Debug, Clone)]
pub struct Reply {
    status: u16,
    content_type: &'static str,
    body: String,
}

#[allow(dead_code)]
impl Reply {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/html",
            body: body.to_string(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: String::new(),
        }
    }
}

#[derive(Default)]
struct BackendState {
    replies: Mutex<HashMap<(String, String), Reply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// In-process stand-in for the pet-rescue API, served by axum on an
/// ephemeral port. Unscripted routes answer 404 `{"detail": "Not found."}`.
pub struct FakeBackend {
    pub base_url: String,
    state: Arc<BackendState>,
}

#[allow(dead_code)]
impl FakeBackend {
    pub async fn start() -> Self {
        let state = Arc::new(BackendState::default());
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("listener has an address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake backend failed");
        });

        Self {
            base_url: format!("http://{}/api", addr),
            state,
        }
    }

    /// Script the reply for `method` + `path` (path relative to `/api`,
    /// including any query string).
    pub fn reply(&self, method: &str, path: &str, reply: Reply) {
        self.state
            .replies
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), reply);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("fake backend received no requests")
    }
}

async fn handle(State(state): State<Arc<BackendState>>, request: Request<Body>) -> Response {
    let (parts, body) = request.into_parts();
    let body = to_bytes(body, usize::MAX)
        .await
        .map(|b| b.to_vec())
        .unwrap_or_default();

    let full_path = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_default();
    let path = full_path
        .strip_prefix("/api")
        .unwrap_or(&full_path)
        .to_string();
    let method = parts.method.to_string();

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        headers: parts.headers,
        body,
    });

    let reply = state
        .replies
        .lock()
        .unwrap()
        .get(&(method, path))
        .cloned()
        .unwrap_or_else(|| Reply::json(404, serde_json::json!({"detail": "Not found."})));

    (
        StatusCode::from_u16(reply.status).unwrap(),
        [(header::CONTENT_TYPE, reply.content_type)],
        reply.body,
    )
        .into_response()
}

/// Paths the client asked to navigate to.
pub type Navigations = Arc<Mutex<Vec<String>>>;

/// Client against `backend` with an in-memory store and a navigator that
/// records where it was sent.
#[allow(dead_code)]
pub fn test_client(backend: &FakeBackend) -> (ApiClient, Arc<MemoryStore>, Navigations) {
    test_client_with(backend, ClientConfig::test_default(&backend.base_url))
}

#[allow(dead_code)]
pub fn test_client_with(
    backend: &FakeBackend,
    config: ClientConfig,
) -> (ApiClient, Arc<MemoryStore>, Navigations) {
    assert_eq!(config.api_base_url, backend.base_url);

    let store = Arc::new(MemoryStore::new());
    let navigations: Navigations = Arc::new(Mutex::new(Vec::new()));
    let seen = navigations.clone();

    let client = ApiClient::new(&config, store.clone())
        .expect("Failed to build client")
        .with_navigator(move |path: &str| seen.lock().unwrap().push(path.to_string()));

    (client, store, navigations)
}

/// Login body in the backend's SimpleJWT shape.
#[allow(dead_code)]
pub fn login_reply(user_id: u64, username: &str, is_superuser: bool) -> Reply {
    Reply::json(
        200,
        serde_json::json!({
            "access": format!("access-{}", user_id),
            "refresh": format!("refresh-{}", user_id),
            "user": {
                "id": user_id,
                "username": username,
                "email": format!("{}@example.org", username),
                "is_superuser": is_superuser,
            }
        }),
    )
}
