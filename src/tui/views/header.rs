//! Header view
//!
//! Shows the monthly income and the selected display currency.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_income_line;
use crate::storage::kv::KeyValueStore;
use crate::tui::app::App;

/// Render the header
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let summary = app.store.compute_summary();

    let currency = match app
        .catalog
        .as_ref()
        .and_then(|c| c.find_symbol(&summary.currency_symbol))
    {
        Some(currency) => currency.to_string(),
        None => summary.currency_symbol.clone(),
    };

    let line = Line::from(vec![
        Span::styled(
            format_income_line(&summary),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  "),
        Span::styled(format!("Currency: {}", currency), Style::default().fg(Color::Cyan)),
    ]);

    let block = Block::default()
        .title(" Pocket Budget ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    frame.render_widget(Paragraph::new(line).block(block), area);
}
