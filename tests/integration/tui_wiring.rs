//! TUI wiring tests: key events produce the right sync commands and sync
//! events patch the rendered state, without a live backend.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use taskpad::app::{App, PanelFocus};
use taskpad::sync::{SyncCommand, SyncEvent};
use taskpad_api::task::{Task, TaskId};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn task(id: &str, title: &str, is_complete: bool) -> Task {
    Task {
        id: TaskId::new(id),
        title: title.to_string(),
        is_complete,
    }
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

#[test]
fn fresh_app_starts_empty_with_input_focus() {
    let app = App::new();
    assert!(app.tasks.is_empty());
    assert!(!app.tasks.is_loading());
    assert_eq!(app.focus, PanelFocus::Input);
    assert!(app.notice.is_none());
    assert!(app.last_synced.is_none());
}

#[test]
fn add_round_trip_through_events() {
    let mut app = App::new();

    // User types a title and presses Enter.
    type_str(&mut app, "Water the plants");
    let cmd = app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(
        cmd,
        Some(SyncCommand::AddTask {
            title: "Water the plants".to_string()
        })
    );

    // Server confirms; the task appears and the input clears.
    app.apply_sync_event(SyncEvent::Added {
        task: task("42", "Water the plants", false),
    });
    assert_eq!(app.tasks.len(), 1);
    assert!(app.input.is_empty());
}

#[test]
fn empty_and_whitespace_submissions_produce_no_command() {
    let mut app = App::new();
    assert_eq!(app.handle_key_event(key(KeyCode::Enter)), None);

    type_str(&mut app, "   ");
    assert_eq!(app.handle_key_event(key(KeyCode::Enter)), None);
    // The buffer is untouched by the refused submit.
    assert_eq!(app.input, "   ");
}

#[test]
fn navigation_keys_do_not_reach_the_network() {
    let mut app = App::new();
    app.apply_sync_event(SyncEvent::Loaded {
        tasks: vec![task("1", "A", false), task("2", "B", false)],
    });
    app.handle_key_event(key(KeyCode::Tab));

    assert_eq!(app.handle_key_event(key(KeyCode::Down)), None);
    assert_eq!(app.handle_key_event(key(KeyCode::Up)), None);
    assert_eq!(app.handle_key_event(key(KeyCode::Char('k'))), None);
    assert_eq!(app.handle_key_event(key(KeyCode::Char('j'))), None);
}

#[test]
fn toggle_targets_the_selected_row() {
    let mut app = App::new();
    app.apply_sync_event(SyncEvent::Loaded {
        tasks: vec![task("1", "A", false), task("2", "B", true)],
    });
    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Down));

    let cmd = app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(
        cmd,
        Some(SyncCommand::ToggleTask {
            id: TaskId::new("2"),
            title: "B".to_string(),
            is_complete: true,
        })
    );

    // Server echoes the flipped record; only that row changes.
    app.apply_sync_event(SyncEvent::Updated {
        task: task("2", "B", false),
    });
    assert!(!app.tasks.get(&TaskId::new("2")).unwrap().is_complete);
    assert!(!app.tasks.get(&TaskId::new("1")).unwrap().is_complete);
}

#[test]
fn delete_keeps_selection_in_bounds() {
    let mut app = App::new();
    app.apply_sync_event(SyncEvent::Loaded {
        tasks: vec![task("1", "A", false), task("2", "B", false)],
    });
    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Down));

    let cmd = app.handle_key_event(key(KeyCode::Char('d')));
    assert_eq!(
        cmd,
        Some(SyncCommand::DeleteTask {
            id: TaskId::new("2")
        })
    );
    app.apply_sync_event(SyncEvent::Deleted {
        id: TaskId::new("2"),
    });
    assert_eq!(app.selected, 0);
}

#[test]
fn failure_message_is_shown_until_next_success() {
    let mut app = App::new();
    app.apply_sync_event(SyncEvent::Loaded {
        tasks: vec![task("1", "A", false)],
    });

    app.apply_sync_event(SyncEvent::Failed {
        message: "Failed to update task: server returned status 500".to_string(),
    });
    assert!(
        app.tasks
            .error()
            .is_some_and(|e| e.contains("status 500"))
    );

    app.apply_sync_event(SyncEvent::Updated {
        task: task("1", "A", true),
    });
    assert!(app.tasks.error().is_none());
}

#[test]
fn load_failure_leaves_empty_list_renderable() {
    let mut app = App::new();
    let cmd = app.start_load();
    assert_eq!(cmd, SyncCommand::LoadAll);
    app.apply_sync_event(SyncEvent::LoadFailed {
        message: "Failed to load tasks: network error".to_string(),
    });

    // UI stays interactive: not loading, no tasks, error visible.
    assert!(!app.tasks.is_loading());
    assert!(app.tasks.is_empty());
    assert!(app.tasks.error().is_some());
    assert!(!app.should_quit);
}
