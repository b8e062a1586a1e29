//! Add-transaction dialog
//!
//! Description, signed amount and date fields. Validation happens in the
//! budget store when the form is submitted.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::storage::kv::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is focused in the transaction dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Description,
    Amount,
    Date,
}

impl TransactionField {
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Description,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::Date,
            Self::Amount => Self::Description,
            Self::Date => Self::Amount,
        }
    }
}

/// State for the transaction form
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    pub focused_field: TransactionField,
    pub description: TextInput,
    pub amount: TextInput,
    pub date: TextInput,
    pub error_message: Option<String>,
}

impl Default for TransactionFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionFormState {
    /// Empty form with today's date filled in
    pub fn new() -> Self {
        Self {
            focused_field: TransactionField::Description,
            description: TextInput::new()
                .label("Description")
                .placeholder("e.g. Groceries"),
            amount: TextInput::new()
                .label("Amount")
                .placeholder("negative for expenses"),
            date: TextInput::new()
                .label("Date")
                .content(Local::now().date_naive().format("%Y-%m-%d").to_string()),
            error_message: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// The input that currently receives keystrokes
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            TransactionField::Description => &mut self.description,
            TransactionField::Amount => &mut self.amount,
            TransactionField::Date => &mut self.date,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.error_message = None;
        self.focused_input().insert(c);
    }

    pub fn backspace(&mut self) {
        self.error_message = None;
        self.focused_input().backspace();
    }
}

/// Render the transaction dialog
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let area = centered_rect_fixed(60, 11, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Transaction ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.transaction_form;
    let fields = [
        (&form.description, TransactionField::Description, rows[0]),
        (&form.amount, TransactionField::Amount, rows[2]),
        (&form.date, TransactionField::Date, rows[4]),
    ];
    for (input, field, row) in fields {
        let input = input.clone().focused(form.focused_field == field);
        frame.render_widget(&input, row);
    }

    if let Some(error) = &form.error_message {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            rows[5],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next field  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), rows[6]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle() {
        let mut form = TransactionFormState::new();
        assert_eq!(form.focused_field, TransactionField::Description);
        form.next_field();
        form.next_field();
        assert_eq!(form.focused_field, TransactionField::Date);
        form.next_field();
        assert_eq!(form.focused_field, TransactionField::Description);
        form.prev_field();
        assert_eq!(form.focused_field, TransactionField::Date);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = TransactionFormState::new();
        form.insert_char('A');
        form.next_field();
        form.insert_char('-');
        form.insert_char('5');

        assert_eq!(form.description.value(), "A");
        assert_eq!(form.amount.value(), "-5");
    }

    #[test]
    fn test_new_form_has_today() {
        let form = TransactionFormState::new();
        assert_eq!(
            form.date.value(),
            Local::now().date_naive().format("%Y-%m-%d").to_string()
        );
    }
}
