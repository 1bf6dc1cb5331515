//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the status bar at the bottom of the screen.
///
/// Shows, in order of priority: the current error, a transient notice, or
/// the task count with the last sync time. Key help is appended for the
/// focused panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = match app.focus {
        PanelFocus::Input => "Enter: add | Tab: list | Esc: quit",
        PanelFocus::List => "Space: toggle | d: delete | r: reload | Tab: input | Esc: quit",
    };

    let mut spans = vec![
        Span::styled("Taskpad", theme::bold()),
        Span::raw(" | "),
    ];

    if let Some(error) = app.tasks.error() {
        spans.push(Span::styled("✗ ", theme::error()));
        spans.push(Span::styled(error, theme::error()));
    } else if let Some(notice) = &app.notice {
        spans.push(Span::styled(notice.as_str(), theme::dimmed()));
    } else {
        let done = app
            .tasks
            .tasks()
            .iter()
            .filter(|t| t.is_complete)
            .count();
        spans.push(Span::styled("●", theme::normal().fg(theme::SUCCESS)));
        spans.push(Span::raw(format!(" {done}/{} done", app.tasks.len())));
        if let Some(at) = &app.last_synced {
            spans.push(Span::styled(format!(" (synced {at})"), theme::dimmed()));
        }
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(help_text, theme::dimmed()));

    let paragraph = Paragraph::new(Line::from(spans)).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
