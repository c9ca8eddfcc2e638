//! Bottom tab bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Tabs,
};

use crate::state::{App, NavigationState};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::create_border_block;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let authenticated = app.is_authenticated();
    let tabs = NavigationState::visible_tabs(authenticated);

    let titles: Vec<Line> = tabs
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.label())))
        .collect();
    let selected = tabs
        .iter()
        .position(|&t| t == app.nav.active())
        .unwrap_or(0);

    let widget = Tabs::new(titles)
        .block(create_border_block("", false))
        .style(Style::new().fg(MUTED_COLOR))
        .highlight_style(Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD))
        .select(selected)
        .divider("|");
    frame.render_widget(widget, area);
}
