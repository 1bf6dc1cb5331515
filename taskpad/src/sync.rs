//! Bridge between the synchronous TUI loop and the async HTTP client.
//!
//! The main thread sends [`SyncCommand`]s and drains [`SyncEvent`]s on each
//! tick of the poll-based event loop:
//!
//! ```text
//! TUI (main thread)  ←── SyncEvent ───  tokio background task
//!                     ─── SyncCommand →
//! ```
//!
//! A single background task owns the [`TaskApi`] and processes commands
//! strictly in submission order, so two operations on the same task can
//! never interleave their requests — overlapping toggles serialize instead
//! of racing.

use tokio::sync::mpsc;

use taskpad_api::task::{Task, TaskId};

use crate::remote::{ApiError, TaskApi};

/// Commands sent from the TUI main loop to the sync background task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncCommand {
    /// Fetch the full task collection and replace local state.
    LoadAll,
    /// Create a task with the given (already trimmed, non-empty) title.
    AddTask {
        /// Title for the new task.
        title: String,
    },
    /// Flip the completion flag of an existing task. Carries the current
    /// title and flag because the backend expects the whole record.
    ToggleTask {
        /// Task to update.
        id: TaskId,
        /// Current title, sent back unchanged.
        title: String,
        /// Current completion flag; the request sends its negation.
        is_complete: bool,
    },
    /// Delete a task.
    DeleteTask {
        /// Task to delete.
        id: TaskId,
    },
    /// Gracefully shut down the sync task.
    Shutdown,
}

/// Events sent from the sync background task to the TUI main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// Full fetch succeeded; malformed records already filtered out.
    Loaded {
        /// The validated collection, in server order.
        tasks: Vec<Task>,
    },
    /// Full fetch failed.
    LoadFailed {
        /// Flattened display message.
        message: String,
    },
    /// Create succeeded; the record goes to the end of the list.
    Added {
        /// The created task as the server stored it.
        task: Task,
    },
    /// Update succeeded; the record replaces its entry in place.
    Updated {
        /// The updated task as the server stored it.
        task: Task,
    },
    /// Delete succeeded.
    Deleted {
        /// Id of the removed task.
        id: TaskId,
    },
    /// An add/toggle/delete failed; local state must stay unchanged.
    Failed {
        /// Flattened display message.
        message: String,
    },
}

/// Configuration for the sync layer.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Base URL of the task API (e.g. `http://localhost:3000/api`).
    pub base_url: String,
    /// Per-request timeout.
    pub request_timeout: std::time::Duration,
    /// Capacity of the command/event mpsc channels.
    pub channel_capacity: usize,
}

/// Spawns the sync background task and returns the channel handles.
///
/// # Errors
///
/// Returns [`ApiError`] if the base URL is invalid or the HTTP client
/// cannot be built. Request failures are not errors here; they arrive
/// later as [`SyncEvent::LoadFailed`] / [`SyncEvent::Failed`].
pub fn spawn_sync(
    config: &SyncConfig,
) -> Result<(mpsc::Sender<SyncCommand>, mpsc::Receiver<SyncEvent>), ApiError> {
    let api = TaskApi::new(&config.base_url, config.request_timeout)?;

    let (cmd_tx, cmd_rx) = mpsc::channel::<SyncCommand>(config.channel_capacity);
    let (evt_tx, evt_rx) = mpsc::channel::<SyncEvent>(config.channel_capacity);

    tokio::spawn(async move {
        command_handler(api, cmd_rx, evt_tx).await;
    });

    Ok((cmd_tx, evt_rx))
}

/// Background task: execute commands one at a time against the API.
async fn command_handler(
    api: TaskApi,
    mut cmd_rx: mpsc::Receiver<SyncCommand>,
    evt_tx: mpsc::Sender<SyncEvent>,
) {
    while let Some(cmd) = cmd_rx.recv().await {
        let event = match cmd {
            SyncCommand::LoadAll => match api.list_tasks().await {
                Ok(tasks) => {
                    tracing::debug!(count = tasks.len(), "loaded task collection");
                    SyncEvent::Loaded { tasks }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "load failed");
                    SyncEvent::LoadFailed {
                        message: format!("Failed to load tasks: {e}"),
                    }
                }
            },
            SyncCommand::AddTask { title } => {
                if title.trim().is_empty() {
                    // The UI never submits these; skip without a request.
                    continue;
                }
                match api.create_task(title.trim()).await {
                    Ok(task) => {
                        tracing::debug!(id = %task.id, "task created");
                        SyncEvent::Added { task }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "create failed");
                        SyncEvent::Failed {
                            message: format!("Failed to add task: {e}"),
                        }
                    }
                }
            }
            SyncCommand::ToggleTask {
                id,
                title,
                is_complete,
            } => match api.update_task(&id, &title, !is_complete).await {
                Ok(task) => {
                    tracing::debug!(id = %task.id, is_complete = task.is_complete, "task updated");
                    SyncEvent::Updated { task }
                }
                Err(e) => {
                    tracing::warn!(id = %id, error = %e, "update failed");
                    SyncEvent::Failed {
                        message: format!("Failed to update task: {e}"),
                    }
                }
            },
            SyncCommand::DeleteTask { id } => match api.delete_task(&id).await {
                Ok(()) => {
                    tracing::debug!(id = %id, "task deleted");
                    SyncEvent::Deleted { id }
                }
                Err(e) => {
                    tracing::warn!(id = %id, error = %e, "delete failed");
                    SyncEvent::Failed {
                        message: format!("Failed to delete task: {e}"),
                    }
                }
            },
            SyncCommand::Shutdown => {
                tracing::info!("sync task shutting down");
                break;
            }
        };

        if evt_tx.send(event).await.is_err() {
            // TUI dropped; exit.
            break;
        }
    }
}
