//! Chat list. Conversations are demo data; search and selection are live.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::state::App;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SECONDARY_COLOR, SELECTED_STYLE, SUCCESS_COLOR};
use crate::ui::helpers::create_border_block;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let cursor = if app.chat.search_focused { "_" } else { "" };
    let search = Paragraph::new(format!("{}{cursor}", app.chat.search))
        .block(create_border_block("Search (/)", app.chat.search_focused));
    frame.render_widget(search, rows[0]);

    let filtered = app.chat.filtered();
    let block = create_border_block("Conversations", !app.chat.search_focused);

    if filtered.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No conversations match.",
            Style::new().fg(MUTED_COLOR),
        ))
        .block(block);
        frame.render_widget(empty, rows[1]);
        return;
    }

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|chat| {
            let presence = if chat.online {
                Span::styled("\u{25cf} ", Style::new().fg(SUCCESS_COLOR))
            } else if chat.group {
                Span::styled("\u{25cb} ", Style::new().fg(SECONDARY_COLOR))
            } else {
                Span::raw("  ")
            };
            let unread = if chat.unread > 0 {
                Span::styled(
                    format!(" ({})", chat.unread),
                    Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw("")
            };
            ListItem::new(vec![
                Line::from(vec![
                    presence,
                    Span::styled(
                        chat.name.clone(),
                        Style::new().add_modifier(Modifier::BOLD),
                    ),
                    unread,
                    Span::styled(
                        format!("  {}", chat.time),
                        Style::new().fg(MUTED_COLOR),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", chat.last_message),
                    Style::new().fg(MUTED_COLOR),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(SELECTED_STYLE)
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(app.chat.selected.min(filtered.len() - 1)));
    frame.render_stateful_widget(list, rows[1], &mut state);
}
