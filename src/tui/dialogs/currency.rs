//! Currency picker dialog
//!
//! Lists the loaded catalog. While the background fetch is still running
//! the picker only shows a loading message.

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::storage::kv::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the currency picker
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let height = app
        .catalog
        .as_ref()
        .map_or(5, |c| (c.currencies.len() as u16 + 2).min(16));
    let area = centered_rect_fixed(44, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Display Currency ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(catalog) = &app.catalog else {
        frame.render_widget(
            Paragraph::new("Loading currencies…")
                .style(Style::default().fg(Color::Yellow))
                .block(block),
            area,
        );
        return;
    };

    let selected_symbol = app.store.selected_currency_symbol();
    let items: Vec<ListItem> = catalog
        .currencies
        .iter()
        .map(|currency| {
            let style = if currency.symbol == selected_symbol {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(currency.to_string()).style(style)
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
    state.select(Some(app.currency_index));
    frame.render_stateful_widget(list, area, &mut state);
}
