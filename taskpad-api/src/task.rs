//! Task model and well-formedness validation.
//!
//! The backend assigns task identifiers and owns the canonical record shape.
//! The client never trusts payload shape implicitly: records arrive as
//! [`RawTask`] (every field optional) and only become [`Task`] after
//! validation. A record lacking a non-empty `id` or `title` is malformed.

use serde::{Deserialize, Serialize};

/// Unique identifier for a task, assigned by the backend.
///
/// Opaque to the client: compared for equality and echoed back in
/// `PUT`/`DELETE` request paths, never parsed or generated locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a `TaskId` from a backend-supplied identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated to-do item.
///
/// Invariant: `id` and `title` are non-empty. Construction from server
/// payloads goes through [`RawTask::into_task`], which enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Backend-assigned identifier, immutable once created.
    pub id: TaskId,
    /// Non-empty text label.
    pub title: String,
    /// Completion flag.
    pub is_complete: bool,
}

/// A task record as it appears on the wire, before validation.
///
/// Every field is optional so that one malformed record can be dropped
/// without failing deserialization of the whole response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTask {
    /// Backend identifier, possibly missing or empty.
    pub id: Option<String>,
    /// Title, possibly missing or empty.
    pub title: Option<String>,
    /// Completion flag; absent means incomplete.
    pub is_complete: Option<bool>,
}

impl RawTask {
    /// Validates this record into a [`Task`].
    ///
    /// Returns `None` if `id` or `title` is missing or empty. An absent
    /// `isComplete` defaults to `false`.
    #[must_use]
    pub fn into_task(self) -> Option<Task> {
        let id = self.id.filter(|id| !id.is_empty())?;
        let title = self.title.filter(|t| !t.is_empty())?;
        Some(Task {
            id: TaskId::new(id),
            title,
            is_complete: self.is_complete.unwrap_or(false),
        })
    }
}

impl From<Task> for RawTask {
    fn from(task: Task) -> Self {
        Self {
            id: Some(task.id.0),
            title: Some(task.title),
            is_complete: Some(task.is_complete),
        }
    }
}

/// Validates a sequence of wire records, silently dropping malformed ones.
///
/// Order of the surviving records is preserved.
pub fn filter_well_formed(records: impl IntoIterator<Item = RawTask>) -> Vec<Task> {
    records
        .into_iter()
        .filter_map(RawTask::into_task)
        .collect()
}
