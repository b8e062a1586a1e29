//! Income dialog

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::format_money;
use crate::storage::kv::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the income dialog
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let area = centered_rect_fixed(50, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Set Monthly Income ")
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let current = format!(
        "Current: {}",
        format_money(app.store.selected_currency_symbol(), app.store.income())
    );
    frame.render_widget(
        Paragraph::new(current).style(Style::default().fg(Color::White)),
        rows[0],
    );

    let input = app.income_input.clone().focused(true);
    frame.render_widget(&input, rows[2]);

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), rows[3]);
}
