use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pocket_budget::cli::{
    handle_clear, handle_config, handle_currency_command, handle_income_command, handle_init,
    handle_summary, handle_transaction_command, print_rollover, CurrencyCommands, IncomeCommands,
    TransactionCommands,
};
use pocket_budget::config::{paths::PocketPaths, settings::Settings};
use pocket_budget::display::format_notification;
use pocket_budget::logging;
use pocket_budget::models::Notification;
use pocket_budget::services::budget::{current_month, BudgetStore};
use pocket_budget::storage::{open_file_store, JsonFileStore};
use pocket_budget::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "pocket",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based monthly budget tracker",
    long_about = "Pocket Budget tracks a monthly income and the transactions made \
                  against it, and projects what will be left at the end of the month. \
                  Transactions are cleared automatically when a new month begins."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    /// Create the data directory, settings and currency catalog
    Init,

    /// Monthly income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Currency commands
    #[command(subcommand)]
    Currency(CurrencyCommands),

    /// Show income, expenses and projected savings
    Summary,

    /// Delete all data
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long, alias = "yes")]
        force: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format_notification(&Notification::error(format!("{:#}", e))));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = PocketPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let command = cli.command.unwrap_or(Commands::Tui);

    if let Commands::Init = command {
        logging::init_stderr_logging();
        handle_init(&paths, &settings)?;
        return Ok(());
    }
    if let Commands::Config = command {
        logging::init_stderr_logging();
        handle_config(&paths, &settings)?;
        return Ok(());
    }

    let mut store = open_store(&paths, &command)?;

    match command {
        Commands::Tui => {
            let catalog_source = settings.catalog_source(&paths);
            run_tui(store, &settings, catalog_source)?;
        }
        Commands::Income(cmd) => handle_income_command(&mut store, cmd)?,
        Commands::Transaction(cmd) => handle_transaction_command(&mut store, &settings, cmd)?,
        Commands::Currency(cmd) => handle_currency_command(&mut store, &settings, &paths, cmd)?,
        Commands::Summary => handle_summary(&store)?,
        Commands::Clear { force } => {
            let stdin = io::stdin();
            handle_clear(&mut store, force, &mut stdin.lock(), &mut io::stdout())?;
        }
        Commands::Init | Commands::Config => {}
    }

    Ok(())
}

/// Set up logging for the command, open the store and run the monthly check
///
/// The TUI runs its own check so the notice can be shown as a dialog.
fn open_store(paths: &PocketPaths, command: &Commands) -> Result<BudgetStore<JsonFileStore>> {
    paths.ensure_directories()?;

    let is_tui = matches!(command, Commands::Tui);
    if is_tui {
        logging::init_file_logging(&paths.log_file())?;
    } else {
        logging::init_stderr_logging();
    }

    let mut store = BudgetStore::open(open_file_store(paths)?)?;

    if !is_tui {
        if let Some(rollover) = store.check_monthly_reset(current_month())? {
            print_rollover(&rollover);
            println!();
        }
    }

    Ok(store)
}
