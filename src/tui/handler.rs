//! Event handler for the TUI
//!
//! Routes keyboard events to the main screen or to the open dialog.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::event::Event;
use crate::storage::kv::KeyValueStore;

/// Handle an incoming event
pub fn handle_event<S: KeyValueStore>(app: &mut App<S>, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    handle_normal_key(app, key)
}

/// Handle keys on the main screen
fn handle_normal_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('i') => app.open_dialog(ActiveDialog::SetIncome),
        KeyCode::Char('a') => app.open_dialog(ActiveDialog::AddTransaction),
        KeyCode::Char('c') => app.open_dialog(ActiveDialog::CurrencyPicker),
        KeyCode::Char('X') => app.open_dialog(ActiveDialog::ConfirmClear),

        KeyCode::Char('d') | KeyCode::Delete => {
            if !app.store.transactions().is_empty() {
                app.delete_selected();
            }
        }

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Home | KeyCode::Char('g') => app.selected_index = 0,
        KeyCode::End | KeyCode::Char('G') => {
            app.selected_index = app.store.transactions().len().saturating_sub(1);
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::SetIncome => handle_income_key(app, key),
        ActiveDialog::AddTransaction => handle_transaction_key(app, key),
        ActiveDialog::CurrencyPicker => handle_currency_key(app, key),
        ActiveDialog::ConfirmClear => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_clear(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::Rollover(_) | ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::None => {}
    }

    Ok(())
}

fn handle_income_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => app.submit_income(),
        KeyCode::Char(c) => app.income_input.insert(c),
        KeyCode::Backspace => app.income_input.backspace(),
        KeyCode::Delete => app.income_input.delete(),
        KeyCode::Left => app.income_input.move_left(),
        KeyCode::Right => app.income_input.move_right(),
        KeyCode::Home => app.income_input.move_start(),
        KeyCode::End => app.income_input.move_end(),
        _ => {}
    }
}

fn handle_transaction_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => app.submit_transaction(),
        KeyCode::Tab | KeyCode::Down => app.transaction_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.transaction_form.prev_field(),
        KeyCode::Char(c) => app.transaction_form.insert_char(c),
        KeyCode::Backspace => app.transaction_form.backspace(),
        KeyCode::Delete => app.transaction_form.focused_input().delete(),
        KeyCode::Left => app.transaction_form.focused_input().move_left(),
        KeyCode::Right => app.transaction_form.focused_input().move_right(),
        _ => {}
    }
}

fn handle_currency_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => app.apply_selected_currency(),
        KeyCode::Char('j') | KeyCode::Down => app.currency_down(),
        KeyCode::Char('k') | KeyCode::Up => app.currency_up(),
        _ => {}
    }
}
