//! Send/request wizard and top-up modal overlays.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
};

use crate::state::{SendMethod, ServiceKind, TransferWizard, WizardFlow, WizardStep};
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, SELECTED_STYLE};
use crate::ui::helpers::{centered_fixed_rect, create_border_block, create_popup_block};

const POPUP_WIDTH: u16 = 48;

pub fn render_wizard(frame: &mut Frame, area: Rect, wizard: &TransferWizard) {
    let base = match wizard.flow() {
        WizardFlow::Send => "Send Money",
        WizardFlow::Request => "Request Money",
    };
    let title = match wizard.service() {
        Some(service) => format!("{base}: {}", service.menu_label()),
        None => base.to_string(),
    };
    let title = title.as_str();

    match wizard.step() {
        WizardStep::Options => {
            let labels: Vec<&str> = SendMethod::ALL.iter().map(|m| m.menu_label()).collect();
            render_menu(frame, area, title, &labels, wizard.menu_selected);
        }
        WizardStep::ServiceSelect => {
            let labels: Vec<&str> = ServiceKind::ALL.iter().map(|s| s.menu_label()).collect();
            render_menu(frame, area, title, &labels, wizard.menu_selected);
        }
        WizardStep::FieldEntry => render_fields(frame, area, title, wizard),
        WizardStep::Pin => render_pin(frame, area, title, wizard),
    }
}

fn render_menu(frame: &mut Frame, area: Rect, title: &str, labels: &[&str], selected: usize) {
    let height = labels.len() as u16 + 4;
    let popup = centered_fixed_rect(POPUP_WIDTH, height, area);
    frame.render_widget(Clear, popup);
    let block = create_popup_block(title);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let items: Vec<ListItem> = labels.iter().map(|&l| ListItem::new(l)).collect();
    let list = List::new(items)
        .highlight_style(SELECTED_STYLE)
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, rows[0], &mut state);

    render_hint(frame, rows[1], "Enter select | Esc cancel");
}

fn render_fields(frame: &mut Frame, area: Rect, title: &str, wizard: &TransferWizard) {
    let fields = wizard.fields();
    let height = fields.len() as u16 * 3 + 5;
    let popup = centered_fixed_rect(POPUP_WIDTH, height, area);
    frame.render_widget(Clear, popup);
    let block = create_popup_block(title);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut constraints: Vec<Constraint> =
        fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(1)); // error
    constraints.push(Constraint::Length(1)); // hints
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in fields.iter().enumerate() {
        let focused = wizard.focus == i;
        let cursor = if focused { "_" } else { "" };
        let widget = Paragraph::new(format!("{}{cursor}", field.value))
            .block(create_border_block(field.label, focused));
        frame.render_widget(widget, rows[i]);
    }

    render_error(frame, rows[fields.len()], wizard);
    render_hint(
        frame,
        rows[fields.len() + 1],
        "Enter continue | Tab next field | Esc cancel",
    );
}

fn render_pin(frame: &mut Frame, area: Rect, title: &str, wizard: &TransferWizard) {
    let popup = centered_fixed_rect(POPUP_WIDTH, 8, area);
    frame.render_widget(Clear, popup);
    let block = create_popup_block(title);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let prompt = Paragraph::new(Span::styled(
        "Confirm with your PIN",
        Style::new().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(prompt, rows[0]);

    let dots = "\u{2022} ".repeat(wizard.pin_len());
    let status = if wizard.verifying {
        Span::styled("  verifying...", Style::new().fg(MUTED_COLOR))
    } else {
        Span::raw("")
    };
    let pin_line = Paragraph::new(Line::from(vec![
        Span::styled(dots, Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD)),
        status,
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(pin_line, rows[1]);

    render_error(frame, rows[2], wizard);
    render_hint(frame, rows[3], "Enter confirm | Esc cancel");
}

pub fn render_top_up(frame: &mut Frame, area: Rect, amount: &str) {
    let popup = centered_fixed_rect(POPUP_WIDTH, 7, area);
    frame.render_widget(Clear, popup);
    let block = create_popup_block("Top Up");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let input = Paragraph::new(format!("{amount}_")).block(create_border_block("Amount", true));
    frame.render_widget(input, rows[0]);
    render_hint(frame, rows[2], "Enter deposit | Esc cancel");
}

fn render_error(frame: &mut Frame, area: Rect, wizard: &TransferWizard) {
    if let Some(error) = &wizard.error {
        let line = Paragraph::new(Span::styled(
            error.as_str(),
            Style::new().fg(ERROR_COLOR).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(line, area);
    }
}

fn render_hint(frame: &mut Frame, area: Rect, text: &str) {
    let hint = Paragraph::new(Span::styled(text, Style::new().fg(MUTED_COLOR)))
        .alignment(Alignment::Center);
    frame.render_widget(hint, area);
}
