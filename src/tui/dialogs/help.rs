//! Help dialog

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

const KEYS: &[(&str, &str)] = &[
    ("i", "Set monthly income"),
    ("a", "Add transaction"),
    ("d / Del", "Delete selected transaction"),
    ("c", "Choose display currency"),
    ("X", "Clear all data"),
    ("j / k", "Move selection"),
    ("g / G", "First / last transaction"),
    ("?", "This help"),
    ("q", "Quit"),
];

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect_fixed(46, KEYS.len() as u16 + 4, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Keys ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line> = KEYS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{:>9}  ", key), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
