//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::settings::Settings;
use crate::services::budget::{current_month, BudgetStore};
use crate::services::catalog::{spawn_catalog_fetch, CatalogSource};
use crate::storage::kv::KeyValueStore;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// The catalog is fetched in the background; everything else is ready
/// before the first frame is drawn.
pub fn run_tui<S: KeyValueStore>(
    store: BudgetStore<S>,
    settings: &Settings,
    catalog_source: CatalogSource,
) -> Result<()> {
    let catalog_receiver = spawn_catalog_fetch(catalog_source);

    let mut app = App::new(store, settings, Some(catalog_receiver));
    app.check_monthly_reset(current_month());

    let mut terminal = init_terminal()?;
    let events = EventHandler::default();

    let result = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| {
                super::views::render(frame, &app);
            })?;

            match events.next()? {
                Event::Key(key) => handle_event(&mut app, Event::Key(key))?,
                Event::Tick => app.tick(),
                Event::Resize(_, _) => {}
            }

            if app.should_quit {
                return Ok(());
            }
        }
    })();

    restore_terminal()?;
    result
}
