//! UI rendering for the CarloSphere TUI.
//!
//! The main entry point lays out header, content, and tab bar, then draws
//! any modal overlay and finally the toast on top.

pub mod auth_view;
pub mod chat;
pub mod dashboard;
pub mod header;
pub mod helpers;
pub mod placeholder;
pub mod tab_bar;
pub mod toast;
pub mod wizard_popup;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::constants::{HEADER_HEIGHT, TAB_BAR_HEIGHT};
use crate::state::{App, Modal, Tab};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Orchestrates all UI rendering for one frame.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(TAB_BAR_HEIGHT),
        ])
        .split(size);

    header::render(frame, chunks[0], app);
    render_content(app, frame, chunks[1]);
    tab_bar::render(frame, chunks[2], app);

    if let Some(wizard) = app.wizard() {
        wizard_popup::render_wizard(frame, size, wizard);
    } else if let Some(Modal::TopUp { amount }) = &app.modal {
        wizard_popup::render_top_up(frame, size, amount);
    }

    if let Some(toast) = &app.toast {
        toast::render(frame, size, &toast.text);
    }
}

/// Dispatches the content area to the active tab's screen.
fn render_content(app: &App, frame: &mut Frame, area: Rect) {
    match app.nav.active() {
        Tab::Home if !app.is_authenticated() => auth_view::render(frame, area, app),
        Tab::Home => placeholder::render_home(frame, area, app),
        Tab::Wallet => dashboard::render(frame, area, app),
        Tab::Chat => chat::render(frame, area, app),
        tab @ (Tab::Works | Tab::Learn | Tab::Community) => {
            placeholder::render_coming_soon(frame, area, tab);
        }
    }
}
