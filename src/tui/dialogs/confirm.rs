//! Clear-all confirmation dialog
//!
//! Spells out what will be erased before `y` wipes the budget.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::{format_money, Summary};
use crate::storage::kv::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// What a confirmed clear will erase
pub fn clear_all_message(summary: &Summary, transaction_count: usize) -> String {
    let noun = if transaction_count == 1 {
        "transaction"
    } else {
        "transactions"
    };

    format!(
        "Erase the {} monthly income and {} {}? The currency goes back to the default. This cannot be undone.",
        format_money(&summary.currency_symbol, summary.income),
        transaction_count,
        noun
    )
}

/// Render the clear-all confirmation
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let area = centered_rect_fixed(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Clear All Data ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let message = clear_all_message(
        &app.store.compute_summary(),
        app.store.transactions().len(),
    );

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(Color::Red)),
            Span::raw(" Erase everything  "),
            Span::styled("[n/Esc]", Style::default().fg(Color::Green)),
            Span::raw(" Keep my data"),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;
    use chrono::NaiveDate;

    #[test]
    fn test_message_names_income_and_count() {
        let txn = Transaction::new("Rent", -700.0, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        let summary = Summary::compute(1000.0, &[txn], "$");

        let message = clear_all_message(&summary, 1);
        assert!(message.contains("$1000.00 monthly income"));
        assert!(message.contains("1 transaction?"));
    }

    #[test]
    fn test_message_pluralizes() {
        let summary = Summary::compute(0.0, &[], "₹");
        assert!(clear_all_message(&summary, 0).contains("0 transactions?"));
    }
}
