//! Status bar view
//!
//! Shows the month being tracked and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::summary::month_name;
use crate::storage::kv::KeyValueStore;
use crate::tui::app::App;

/// Render the status bar
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let mut spans = vec![];

    if let Some(month) = app.store.last_reset_month() {
        spans.push(Span::styled(
            format!(" {} ", month_name(month)),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw("│"));
    }

    if app.catalog.is_none() {
        spans.push(Span::styled(
            " Loading currencies… ",
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw("│"));
    }

    let hints = " i:Income  a:Add  d:Delete  c:Currency  X:Clear  ?:Help  q:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
