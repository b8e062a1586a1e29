//! Layout definitions for the TUI
//!
//! Header on top, register and summary side by side, status bar at the
//! bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Income and currency header
    pub header: Rect,
    /// Transaction register
    pub register: Rect,
    /// Summary panel
    pub summary: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(40),    // Register
                Constraint::Length(40), // Summary
            ])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            register: horizontal[0],
            summary: horizontal[1],
            status_bar: vertical[2],
        }
    }
}

/// Area for a toast in the top-right corner
pub fn toast_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_partitions_area() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.summary.width, 40);
        assert_eq!(layout.register.width, 80);
    }

    #[test]
    fn test_centered_rect_fits_small_area() {
        let rect = centered_rect_fixed(60, 11, Rect::new(0, 0, 40, 8));
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 8);
    }

    #[test]
    fn test_toast_in_top_right() {
        let rect = toast_rect(30, 3, Rect::new(0, 0, 100, 20));
        assert_eq!((rect.x, rect.y, rect.width), (70, 0, 30));
    }
}
