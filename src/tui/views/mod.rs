//! TUI Views module
//!
//! Draws the main screen, then the active dialog and the current toast on
//! top of it.

pub mod header;
pub mod register;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;
use crate::storage::kv::KeyValueStore;

/// Render the entire application
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);
    register::render(frame, app, layout.register);
    summary::render(frame, app, layout.summary);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    if let Some(notification) = app.notifications.current() {
        let area = toast_rect(44, 4, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

/// Render active dialog
fn render_dialog<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    match &app.active_dialog {
        ActiveDialog::SetIncome => dialogs::income::render(frame, app),
        ActiveDialog::AddTransaction => dialogs::transaction::render(frame, app),
        ActiveDialog::CurrencyPicker => dialogs::currency::render(frame, app),
        ActiveDialog::ConfirmClear => dialogs::confirm::render(frame, app),
        ActiveDialog::Rollover(rollover) => dialogs::rollover::render(frame, rollover),
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}
