//! Header bar: active-tab title on the left, session greeting on the
//! right.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::create_border_block;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = create_border_block("", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Paragraph::new(Line::from(Span::styled(
        app.nav.active().title(),
        Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, inner);

    let greeting = match app.session.session() {
        Some(session) => format!("Hi, {}", session.display_name()),
        None => "Signed out".to_string(),
    };
    let right = Paragraph::new(Line::from(Span::styled(
        greeting,
        Style::new().fg(MUTED_COLOR),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(right, inner);
}
