//! Task list panel rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the task list panel with checkboxes and completion strikethrough.
///
/// While the initial fetch is in flight a loading line is shown instead of
/// the list; an empty list gets an empty-state hint.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::List;

    let block = Block::default()
        .title(Span::styled("Tasks", theme::panel_title(theme::TASKS_TITLE)))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    if app.tasks.is_loading() {
        let paragraph =
            Paragraph::new(Span::styled("Loading tasks…", theme::dimmed())).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    if app.tasks.is_empty() {
        let paragraph = Paragraph::new(Span::styled(
            "No tasks yet — type one above and press Enter",
            theme::dimmed(),
        ))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .tasks
        .tasks()
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let is_selected = is_focused && idx == app.selected;

            let checkbox = if task.is_complete { "[x]" } else { "[ ]" };
            let title_style = if task.is_complete {
                theme::completed()
            } else {
                theme::normal()
            };

            let line = Line::from(vec![
                Span::styled(checkbox, theme::normal()),
                Span::raw(" "),
                Span::styled(task.title.as_str(), title_style),
            ]);

            let item = ListItem::new(line);
            if is_selected {
                item.style(theme::selected())
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
