//! Toast notification widget
//!
//! Draws the current notification; once its display time is over it is
//! drawn dimmed until it expires.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::models::{Notification, NotificationKind};

/// Border color for a notification kind
pub fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Info => Color::Blue,
        NotificationKind::Success => Color::Green,
        NotificationKind::Warning => Color::Yellow,
        NotificationKind::Error => Color::Red,
    }
}

/// Title for a notification kind
pub fn kind_title(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => " i Info ",
        NotificationKind::Success => " + Success ",
        NotificationKind::Warning => " ! Warning ",
        NotificationKind::Error => " x Error ",
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = kind_color(self.notification.kind);
        let mut border_style = Style::default().fg(color);
        let mut text_style = Style::default().fg(Color::White);
        if self.notification.is_fading() {
            border_style = border_style.add_modifier(Modifier::DIM);
            text_style = text_style.add_modifier(Modifier::DIM);
        }

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(kind_title(self.notification.kind))
            .title_style(border_style.add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(text_style)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_colors() {
        assert_eq!(kind_color(NotificationKind::Info), Color::Blue);
        assert_eq!(kind_color(NotificationKind::Success), Color::Green);
        assert_eq!(kind_color(NotificationKind::Warning), Color::Yellow);
        assert_eq!(kind_color(NotificationKind::Error), Color::Red);
    }

    #[test]
    fn test_renders_message() {
        let notification = Notification::success("Income updated successfully!");
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);

        NotificationWidget::new(&notification).render(area, &mut buf);

        let row: String = (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(row.contains("Income updated"));
    }
}
