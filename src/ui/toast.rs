//! Toast notification overlay in the bottom-right corner.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::BORDER_STYLE;

const MIN_TOAST_WIDTH: u16 = 20;
const TOAST_HEIGHT: u16 = 3;
const PADDING_RIGHT: u16 = 2;
const PADDING_BOTTOM: u16 = 2;
/// Borders plus a space on each side of the message.
const WIDTH_PADDING: u16 = 4;

/// Renders a non-blocking toast on top of everything else.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let width = (message.chars().count() as u16 + WIDTH_PADDING)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let toast_area = Rect {
        x: area.right().saturating_sub(width + PADDING_RIGHT),
        y: area.bottom().saturating_sub(TOAST_HEIGHT + PADDING_BOTTOM),
        width,
        height: TOAST_HEIGHT.min(area.height),
    };

    frame.render_widget(Clear, toast_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE);
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    let text = Paragraph::new(message)
        .style(Style::default())
        .alignment(Alignment::Center);
    frame.render_widget(text, inner);
}
