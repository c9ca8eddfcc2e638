//! Signed-in Home page and the coming-soon tabs.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{App, Tab};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::{centered_fixed_rect, create_border_block};

/// Home tab once signed in.
pub fn render_home(frame: &mut Frame, area: Rect, app: &App) {
    let block = create_border_block("", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let name = app
        .session
        .session()
        .map_or_else(|| "there".to_string(), |s| s.display_name().to_string());
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Welcome, {name}"),
            Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Your money, chats, gigs, and learning in one place."),
        Line::from(""),
        Line::from(Span::styled(
            "2 Wallet | 3 Chat | 4 Works | 5 Learn | 6 Community",
            Style::new().fg(MUTED_COLOR),
        )),
    ];
    let body = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(body, inner);
}

/// Works, Learn, and Community tabs are not built yet.
pub fn render_coming_soon(frame: &mut Frame, area: Rect, tab: Tab) {
    let block = create_border_block("", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let popup = centered_fixed_rect(40, 5, inner);
    let lines = vec![
        Line::from(Span::styled(
            tab.title(),
            Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Coming soon", Style::new().fg(MUTED_COLOR))),
    ];
    let body = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(body, popup);
}
