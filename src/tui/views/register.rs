//! Transaction register view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::{format_date, format_signed_amount};
use crate::storage::kv::KeyValueStore;
use crate::tui::app::App;

/// Render the transaction list
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let transactions = app.store.transactions();
    let block = Block::default()
        .title(format!(" Transactions ({}) ", transactions.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if transactions.is_empty() {
        let text = Paragraph::new("No transactions yet. Press 'a' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let symbol = app.store.selected_currency_symbol();
    let date_format = app.settings.date_format.as_str();
    let amount_width = 14usize;
    let description_width = (area.width as usize).saturating_sub(amount_width + 20);

    let items: Vec<ListItem> = transactions
        .iter()
        .map(|txn| {
            let color = if txn.is_expense() {
                Color::Red
            } else {
                Color::Green
            };
            let description: String = txn.description.chars().take(description_width).collect();

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<14}", format_date(txn.date, date_format)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!("{:<width$}", description, width = description_width)),
                Span::styled(
                    format!(
                        "{:>width$}",
                        format_signed_amount(symbol, txn.amount),
                        width = amount_width
                    ),
                    Style::default().fg(color),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}
