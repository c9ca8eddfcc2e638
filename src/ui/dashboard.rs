//! Wallet dashboard: balance card, action row, and the filtered
//! transaction list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::state::App;
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, SELECTED_STYLE, SUCCESS_COLOR, WARNING_COLOR};
use crate::ui::helpers::create_border_block;

const BALANCE_CARD_HEIGHT: u16 = 5;
const SEARCH_ROW_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BALANCE_CARD_HEIGHT),
            Constraint::Length(SEARCH_ROW_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_balance_card(frame, rows[0], app);
    render_search_row(frame, rows[1], app);
    render_transactions(frame, rows[2], app);
    render_hints(frame, rows[3]);
}

fn render_balance_card(frame: &mut Frame, area: Rect, app: &App) {
    let block = create_border_block("Balance", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let account = app
        .wallet
        .snapshot()
        .map_or_else(|| "\u{2022}\u{2022}\u{2022}\u{2022} ----".to_string(), |s| s.masked_account());
    let status = if app.wallet.is_refreshing() {
        Span::styled("refreshing...", Style::new().fg(MUTED_COLOR))
    } else if app.wallet.submitting_action {
        Span::styled("submitting...", Style::new().fg(WARNING_COLOR))
    } else {
        Span::raw("")
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                app.wallet.balance_display(),
                Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            status,
        ]),
        Line::from(Span::styled(
            format!("Account {account}"),
            Style::new().fg(MUTED_COLOR),
        )),
        Line::from(Span::styled(
            "s Send | i Request | t Top up | v Show/hide | y Copy account",
            Style::new().fg(MUTED_COLOR),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_search_row(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(18)])
        .split(area);

    let cursor = if app.wallet.search_focused { "_" } else { "" };
    let search = Paragraph::new(format!("{}{cursor}", app.wallet.search))
        .block(create_border_block("Search", app.wallet.search_focused));
    frame.render_widget(search, cols[0]);

    let filter = Paragraph::new(Span::styled(
        app.wallet.kind_filter.label(),
        Style::new().fg(PRIMARY_COLOR),
    ))
    .alignment(Alignment::Center)
    .block(create_border_block("Filter (f)", false));
    frame.render_widget(filter, cols[1]);
}

fn render_transactions(frame: &mut Frame, area: Rect, app: &App) {
    let filtered = app.wallet.filtered();
    let block = create_border_block("Transactions", !app.wallet.search_focused);

    if filtered.is_empty() {
        let text = if app.wallet.snapshot().is_none() {
            "No data yet. Press r to refresh."
        } else {
            "No transactions match."
        };
        let empty = Paragraph::new(Span::styled(text, Style::new().fg(MUTED_COLOR)))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|txn| {
            let amount_color = if txn.kind.is_inflow() {
                SUCCESS_COLOR
            } else {
                ERROR_COLOR
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<12}", txn.date), Style::new().fg(MUTED_COLOR)),
                Span::raw(format!("{:<10}", txn.kind.label())),
                Span::styled(
                    format!("{:>16}", txn.signed_amount()),
                    Style::new().fg(amount_color),
                ),
                Span::styled(
                    format!("  {:<10}", txn.status.label()),
                    Style::new().fg(MUTED_COLOR),
                ),
                Span::raw(txn.counterpart.clone()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(SELECTED_STYLE)
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(app.wallet.selected.min(filtered.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(Span::styled(
        "r Refresh | / Search | e Export statement | o Open statement | l Sign out | q Quit",
        Style::new().fg(MUTED_COLOR),
    ));
    frame.render_widget(hints, area);
}
