//! HTTP client for the `tasks` resource.
//!
//! [`TaskApi`] wraps a [`reqwest::Client`] and implements the four REST
//! calls the backend exposes. Responses are validated before they reach the
//! rest of the client: a non-2xx status, an unparseable body, or a record
//! failing well-formedness all surface as distinct [`ApiError`] variants.
//! The UI flattens them to a single message line, but logs and tests can
//! still tell the causes apart.

use std::time::Duration;

use taskpad_api::task::{RawTask, Task, TaskId, filter_well_formed};
use taskpad_api::wire::{Envelope, ListEnvelope, NewTask, UpdateTask};

/// Errors from a single request/response cycle against the backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, DNS, ...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("server returned status {0}")]
    Status(u16),

    /// The response body was not the expected shape, or the record in it
    /// was missing a non-empty `id` or `title`.
    #[error("malformed response payload")]
    MalformedPayload,

    /// The configured base URL does not parse.
    #[error("invalid API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// REST client for the task collection.
#[derive(Debug, Clone)]
pub struct TaskApi {
    client: reqwest::Client,
    base_url: String,
}

impl TaskApi {
    /// Creates a client for the given base URL (e.g.
    /// `http://localhost:3000/api`), with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BaseUrl`] if the URL does not parse, or
    /// [`ApiError::Network`] if the underlying client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        url::Url::parse(base_url)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Builds the URL for the task collection or a single task.
    fn endpoint(&self, id: Option<&TaskId>) -> String {
        match id {
            Some(id) => format!("{}/tasks/{id}", self.base_url),
            None => format!("{}/tasks", self.base_url),
        }
    }

    /// `GET /tasks` — fetches the full collection, dropping malformed
    /// records (order preserved).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// unparseable body. Individual malformed records are not an error;
    /// they are filtered out and logged.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let body = self.request_body(self.client.get(self.endpoint(None))).await?;
        let envelope: ListEnvelope =
            serde_json::from_str(&body).map_err(|_| ApiError::MalformedPayload)?;

        let total = envelope.data.len();
        let tasks = filter_well_formed(envelope.data.into_iter().flatten());
        if tasks.len() < total {
            tracing::warn!(
                dropped = total - tasks.len(),
                kept = tasks.len(),
                "dropped malformed task records from list response"
            );
        }
        Ok(tasks)
    }

    /// `POST /tasks` — creates a task; the server assigns the id and
    /// defaults the completion flag.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MalformedPayload`] if the created record comes
    /// back without a non-empty id and title.
    pub async fn create_task(&self, title: &str) -> Result<Task, ApiError> {
        let request = self
            .client
            .post(self.endpoint(None))
            .json(&NewTask { title });
        self.single_task(request).await
    }

    /// `PUT /tasks/{id}` — replaces the whole record; used to flip the
    /// completion flag while carrying the unchanged title.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MalformedPayload`] if the updated record comes
    /// back without a non-empty id and title.
    pub async fn update_task(
        &self,
        id: &TaskId,
        title: &str,
        is_complete: bool,
    ) -> Result<Task, ApiError> {
        let request = self
            .client
            .put(self.endpoint(Some(id)))
            .json(&UpdateTask { title, is_complete });
        self.single_task(request).await
    }

    /// `DELETE /tasks/{id}` — deletes a task; the response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-success status.
    pub async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError> {
        let response = self.client.delete(self.endpoint(Some(id))).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(status.as_u16()))
        }
    }

    /// Sends a request expecting a `{ data: Task }` envelope and validates
    /// the record inside it.
    async fn single_task(&self, request: reqwest::RequestBuilder) -> Result<Task, ApiError> {
        let body = self.request_body(request).await?;
        let envelope: Envelope<RawTask> =
            serde_json::from_str(&body).map_err(|_| ApiError::MalformedPayload)?;
        envelope.data.into_task().ok_or(ApiError::MalformedPayload)
    }

    /// Sends a request, maps non-success statuses to [`ApiError::Status`],
    /// and returns the response body text.
    async fn request_body(&self, request: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "request failed");
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}
