//! Request and response body shapes for the `tasks` resource.
//!
//! The backend wraps every response payload in a `{ "data": ... }` envelope:
//!
//! - `GET    /tasks`      -> `{ "data": [Task, ...] }`
//! - `POST   /tasks`      -> `{ "data": Task }` (body: [`NewTask`])
//! - `PUT    /tasks/{id}` -> `{ "data": Task }` (body: [`UpdateTask`])
//! - `DELETE /tasks/{id}` -> success status, body ignored

use serde::{Deserialize, Serialize};

use crate::task::RawTask;

/// The `{ "data": ... }` envelope around a single-record response.
///
/// A response without a `data` key fails to deserialize, which callers
/// treat as a malformed payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped payload.
    pub data: T,
}

/// The `{ "data": [...] }` envelope around the task collection.
///
/// A missing `data` key is treated as an empty collection, and `null`
/// entries in the array deserialize to `None` so a single bad element
/// cannot poison the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEnvelope {
    /// The task records, unvalidated.
    #[serde(default)]
    pub data: Vec<Option<RawTask>>,
}

/// Request body for `POST /tasks`.
#[derive(Debug, Clone, Serialize)]
pub struct NewTask<'a> {
    /// Title for the task to create; the backend assigns the id and
    /// defaults the completion flag to false.
    pub title: &'a str,
}

/// Request body for `PUT /tasks/{id}`.
///
/// The backend expects the whole record, so a completion toggle carries
/// the unchanged title alongside the flipped flag.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask<'a> {
    /// Current title (unchanged by a toggle).
    pub title: &'a str,
    /// Desired completion state.
    pub is_complete: bool,
}
