//! Login/signup form on the Home tab.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{App, AuthView, NoticeKind};
use crate::theme::{ERROR_COLOR, MUTED_COLOR, SUCCESS_COLOR, WARNING_COLOR};
use crate::ui::helpers::{centered_fixed_rect, create_border_block, create_popup_block};

/// One labeled input row needs a bordered line plus its label.
const FIELD_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let auth = &app.auth;
    let (title, fields) = match auth.view {
        AuthView::Login => (
            "Welcome back",
            vec![
                ("Email", auth.email.as_str(), false),
                ("Password", auth.password.as_str(), true),
            ],
        ),
        AuthView::Signup => (
            "Create your account",
            vec![
                ("Full name", auth.full_name.as_str(), false),
                ("National ID", auth.national_id.as_str(), false),
                ("Email", auth.email.as_str(), false),
                ("Password", auth.password.as_str(), true),
                ("Confirm password", auth.confirm_password.as_str(), true),
            ],
        ),
    };

    let height = fields.len() as u16 * FIELD_HEIGHT + 6;
    let form_area = centered_fixed_rect(54, height, area);
    let block = create_popup_block(title);
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(1)); // notice
    constraints.push(Constraint::Min(1)); // hints
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, (label, value, is_password)) in fields.iter().enumerate() {
        render_field(
            frame,
            rows[i],
            label,
            value,
            *is_password && !auth.show_password,
            auth.focus == i,
        );
    }

    let notice_row = rows[fields.len()];
    if let Some(notice) = &auth.notice {
        let color = match notice.kind {
            NoticeKind::Success => SUCCESS_COLOR,
            NoticeKind::Error => ERROR_COLOR,
            NoticeKind::Warning => WARNING_COLOR,
        };
        let line = Paragraph::new(Span::styled(
            notice.text.as_str(),
            Style::new().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(line, notice_row);
    } else if auth.submitting {
        let line = Paragraph::new(Span::styled("Submitting...", Style::new().fg(MUTED_COLOR)))
            .alignment(Alignment::Center);
        frame.render_widget(line, notice_row);
    }

    let switch_hint = match auth.view {
        AuthView::Login => "Ctrl+S sign up",
        AuthView::Signup => "Ctrl+S log in",
    };
    let hints = Paragraph::new(Line::from(Span::styled(
        format!("Enter submit | Tab next field | {switch_hint} | Ctrl+P show password"),
        Style::new().fg(MUTED_COLOR),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hints, rows[fields.len() + 1]);
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    masked: bool,
    focused: bool,
) {
    let display = if masked {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let cursor = if focused { "_" } else { "" };
    let widget = Paragraph::new(format!("{display}{cursor}"))
        .block(create_border_block(label, focused));
    frame.render_widget(widget, area);
}
