//! In-process stub backend for integration tests.
//!
//! A minimal axum server implementing the `tasks` REST contract against an
//! in-memory table, bound to `127.0.0.1:0` (OS-assigned port). Tests can
//! seed records (including malformed ones), force failure statuses, and
//! make the next single-record response malformed.

#![allow(clippy::expect_used, clippy::unwrap_used, dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use tokio::sync::RwLock;

use taskpad_api::task::RawTask;
use taskpad_api::wire::{Envelope, ListEnvelope};

/// Shared state of the stub backend.
#[derive(Default)]
struct BackendState {
    /// Stored records, in insertion order. Raw so tests can seed malformed
    /// entries.
    tasks: RwLock<Vec<RawTask>>,
    /// When set, every request answers 500.
    fail_requests: AtomicBool,
    /// When set, the next create/update response carries an empty record.
    malformed_next: AtomicBool,
}

/// Handle to a running stub backend.
pub struct StubBackend {
    state: Arc<BackendState>,
    addr: SocketAddr,
    handle: tokio::task::JoinHandle<()>,
}

impl StubBackend {
    /// Starts the stub backend on an OS-assigned port.
    pub async fn spawn() -> Self {
        let state = Arc::new(BackendState::default());

        let app = Router::new()
            .route("/api/tasks", routing::get(list).post(create))
            .route("/api/tasks/{id}", routing::put(update).delete(delete))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind stub backend");
        let addr = listener.local_addr().expect("no local addr");

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            state,
            addr,
            handle,
        }
    }

    /// Base URL for a client pointed at this backend.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Replaces the stored records.
    pub async fn seed(&self, records: Vec<RawTask>) {
        *self.state.tasks.write().await = records;
    }

    /// Returns a snapshot of the stored records.
    pub async fn records(&self) -> Vec<RawTask> {
        self.state.tasks.read().await.clone()
    }

    /// Makes every request answer 500 while `fail` is set.
    pub fn set_fail_requests(&self, fail: bool) {
        self.state.fail_requests.store(fail, Ordering::SeqCst);
    }

    /// Makes the next create/update response return an empty record.
    pub fn set_malformed_next(&self) {
        self.state.malformed_next.store(true, Ordering::SeqCst);
    }

    /// Stops the server task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

/// A well-formed seed record.
pub fn record(id: &str, title: &str, is_complete: bool) -> RawTask {
    RawTask {
        id: Some(id.to_string()),
        title: Some(title.to_string()),
        is_complete: Some(is_complete),
    }
}

#[derive(serde::Deserialize)]
struct CreateBody {
    title: String,
}

#[derive(serde::Deserialize)]
struct UpdateBody {
    title: String,
    #[serde(rename = "isComplete", default)]
    is_complete: bool,
}

fn failing(state: &BackendState) -> bool {
    state.fail_requests.load(Ordering::SeqCst)
}

async fn list(State(state): State<Arc<BackendState>>) -> Response {
    if failing(&state) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let data = state
        .tasks
        .read()
        .await
        .iter()
        .cloned()
        .map(Some)
        .collect();
    Json(ListEnvelope { data }).into_response()
}

async fn create(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<CreateBody>,
) -> Response {
    if failing(&state) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if state.malformed_next.swap(false, Ordering::SeqCst) {
        return Json(Envelope {
            data: RawTask::default(),
        })
        .into_response();
    }
    let task = RawTask {
        id: Some(uuid::Uuid::now_v7().to_string()),
        title: Some(body.title),
        is_complete: Some(false),
    };
    state.tasks.write().await.push(task.clone());
    (StatusCode::CREATED, Json(Envelope { data: task })).into_response()
}

async fn update(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateBody>,
) -> Response {
    if failing(&state) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if state.malformed_next.swap(false, Ordering::SeqCst) {
        return Json(Envelope {
            data: RawTask::default(),
        })
        .into_response();
    }
    let mut tasks = state.tasks.write().await;
    let Some(slot) = tasks.iter_mut().find(|t| t.id.as_deref() == Some(id.as_str())) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    slot.title = Some(body.title);
    slot.is_complete = Some(body.is_complete);
    let updated = slot.clone();
    Json(Envelope { data: updated }).into_response()
}

async fn delete(State(state): State<Arc<BackendState>>, Path(id): Path<String>) -> Response {
    if failing(&state) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let mut tasks = state.tasks.write().await;
    let before = tasks.len();
    tasks.retain(|t| t.id.as_deref() != Some(id.as_str()));
    if tasks.len() == before {
        StatusCode::NOT_FOUND.into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}
