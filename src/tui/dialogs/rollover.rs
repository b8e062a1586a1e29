//! Monthly rollover notice

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::display::format_rollover;
use crate::models::MonthlyRollover;
use crate::tui::layout::centered_rect_fixed;

/// Render the previous month's summary
pub fn render(frame: &mut Frame, rollover: &MonthlyRollover) {
    let area = centered_rect_fixed(52, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Previous Month's Summary ")
        .title_style(
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    let mut lines: Vec<Line> = format_rollover(rollover)
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" OK"),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
