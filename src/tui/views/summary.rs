//! Summary panel view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::format_money;
use crate::storage::kv::KeyValueStore;
use crate::tui::app::App;

/// Render the summary panel
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let summary = app.store.compute_summary();
    let symbol = summary.currency_symbol.as_str();

    let row = |label: &'static str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("{:<26}", label), Style::default().fg(Color::White)),
            Span::styled(value, Style::default().fg(color)),
        ])
    };

    let savings_color = if summary.is_deficit() {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        row("Set Monthly Income:", format_money(symbol, summary.income), Color::White),
        row(
            "Income from Transactions:",
            format_money(symbol, summary.total_income_from_transactions),
            Color::Green,
        ),
        row(
            "Total Expenses:",
            format_money(symbol, summary.total_spent()),
            Color::Red,
        ),
        Line::from("─".repeat(area.width.saturating_sub(2) as usize)),
        Line::from(vec![
            Span::styled(
                format!("{:<26}", "Projected Savings:"),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format_money(symbol, summary.projected_savings),
                Style::default()
                    .fg(savings_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
