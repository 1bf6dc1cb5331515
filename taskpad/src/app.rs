//! Application state and event handling.
//!
//! [`App`] owns the task list, the input buffer, and the panel focus. Key
//! events map to at most one [`SyncCommand`] for the sync background task;
//! [`SyncEvent`]s coming back are applied as local patches via
//! [`App::apply_sync_event`]. The app itself never touches the network.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::store::TaskList;
use crate::sync::{SyncCommand, SyncEvent};

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// New-task input box is focused (default).
    Input,
    /// Task list is focused.
    List,
}

/// Main application state.
pub struct App {
    /// Current text input for a new task.
    pub input: String,
    /// Cursor position in the input (character index).
    pub cursor_position: usize,
    /// The synchronized task list.
    pub tasks: TaskList,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected task index in the list panel.
    pub selected: usize,
    /// Transient status note (e.g. "network busy"), shown until the next
    /// sync event.
    pub notice: Option<String>,
    /// Wall-clock time of the last successful sync, formatted "HH:MM".
    pub last_synced: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Maximum task title length, in characters.
    max_title_len: usize,
}

impl App {
    /// Creates an empty application.
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor_position: 0,
            tasks: TaskList::new(),
            focus: PanelFocus::Input,
            selected: 0,
            notice: None,
            last_synced: None,
            should_quit: false,
            max_title_len: 256,
        }
    }

    /// Sets the maximum task title length, in characters.
    #[must_use]
    pub const fn with_max_title_len(mut self, len: usize) -> Self {
        self.max_title_len = len;
        self
    }

    /// Marks the initial full fetch as started and returns the command to
    /// dispatch for it.
    pub fn start_load(&mut self) -> SyncCommand {
        self.tasks.load_started();
        SyncCommand::LoadAll
    }

    /// Handle a key event, returning a command for the sync task when the
    /// action requires a network request.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<SyncCommand> {
        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.should_quit = true;
                return None;
            }
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.toggle_focus();
                return None;
            }
            _ => {}
        }

        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::List => self.handle_list_key(key),
        }
    }

    /// Applies a sync event as a local patch.
    pub fn apply_sync_event(&mut self, event: SyncEvent) {
        self.notice = None;
        match event {
            SyncEvent::Loaded { tasks } => {
                self.tasks.loaded(tasks);
                self.clamp_selection();
                self.mark_synced();
            }
            SyncEvent::LoadFailed { message } => {
                self.tasks.load_failed(message);
            }
            SyncEvent::Added { task } => {
                self.tasks.task_added(task);
                // The submitted title is confirmed; clear the input buffer.
                self.input.clear();
                self.cursor_position = 0;
                self.mark_synced();
            }
            SyncEvent::Updated { task } => {
                self.tasks.task_updated(task);
                self.mark_synced();
            }
            SyncEvent::Deleted { id } => {
                self.tasks.task_deleted(&id);
                self.clamp_selection();
                self.mark_synced();
            }
            SyncEvent::Failed { message } => {
                self.tasks.operation_failed(message);
            }
        }
    }

    /// Sets a transient status note (cleared by the next sync event).
    pub fn set_notice(&mut self, note: impl Into<String>) {
        self.notice = Some(note.into());
    }

    /// Records that a command could not be dispatched and was discarded.
    ///
    /// The user must repeat the action; the notice says so rather than
    /// implying the request is still pending.
    pub fn command_dropped(&mut self) {
        self.set_notice("Network busy — action not sent, try again");
    }

    /// Handle key event when the input box is focused.
    fn handle_input_key(&mut self, key: KeyEvent) -> Option<SyncCommand> {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Char(c) => {
                self.enter_char(c);
                None
            }
            KeyCode::Backspace => {
                self.delete_char();
                None
            }
            KeyCode::Left => {
                self.move_cursor_left();
                None
            }
            KeyCode::Right => {
                self.move_cursor_right();
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.input.chars().count();
                None
            }
            _ => None,
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_list_key(&mut self, key: KeyEvent) -> Option<SyncCommand> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Delete | KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('r') => Some(self.start_load()),
            _ => None,
        }
    }

    /// Submit the current input as a new task.
    ///
    /// Whitespace-only input is a no-op: no request is issued and the
    /// buffer is left as-is.
    fn submit_input(&mut self) -> Option<SyncCommand> {
        let title = self.input.trim();
        if title.is_empty() {
            return None;
        }
        Some(SyncCommand::AddTask {
            title: title.to_string(),
        })
    }

    /// Build a toggle command for the selected task.
    ///
    /// The backend expects the whole record on update, so the command
    /// carries the current title alongside the flag to flip.
    fn toggle_selected(&self) -> Option<SyncCommand> {
        let task = self.tasks.tasks().get(self.selected)?;
        Some(SyncCommand::ToggleTask {
            id: task.id.clone(),
            title: task.title.clone(),
            is_complete: task.is_complete,
        })
    }

    /// Build a delete command for the selected task.
    fn delete_selected(&self) -> Option<SyncCommand> {
        let task = self.tasks.tasks().get(self.selected)?;
        Some(SyncCommand::DeleteTask {
            id: task.id.clone(),
        })
    }

    /// Switch focus between the input box and the task list.
    pub const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::List,
            PanelFocus::List => PanelFocus::Input,
        };
    }

    /// Select the previous task.
    const fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Select the next task.
    fn select_next(&mut self) {
        if self.selected + 1 < self.tasks.len() {
            self.selected += 1;
        }
    }

    /// Keep the selection within bounds after the list shrank.
    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.tasks.len().saturating_sub(1));
    }

    /// Record the current wall-clock time as the last successful sync.
    fn mark_synced(&mut self) {
        self.last_synced = Some(chrono::Local::now().format("%H:%M").to_string());
    }

    /// Insert a character at the cursor position.
    ///
    /// Input past the title length cap is ignored (counted in characters,
    /// not bytes).
    fn enter_char(&mut self, c: char) {
        if self.input.chars().count() >= self.max_title_len {
            return;
        }
        let idx = self.byte_index(self.cursor_position);
        self.input.insert(idx, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor.
    fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let idx = self.byte_index(self.cursor_position - 1);
            self.input.remove(idx);
            self.cursor_position -= 1;
        }
    }

    /// Move cursor left.
    const fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    /// Move cursor right.
    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Convert a character index into a byte offset into the input buffer.
    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map_or(self.input.len(), |(i, _)| i)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
