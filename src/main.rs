use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use fintrack::cli::{handle_category_command, handle_report_command, handle_transaction_command};
use fintrack::config::{BackendKind, Settings, StoreSecrets, TrackerPaths};
use fintrack::store::{initialize_storage, open_store};

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker for income and expenses",
    long_about = "fintrack records income and expense transactions against \
                  categories, lists them newest first and summarizes any month \
                  with totals, net savings and a breakdown by category."
)]
struct Cli {
    /// Storage backend for this run (overrides the setting)
    #[arg(long, global = true, value_enum, env = "FINTRACK_BACKEND")]
    backend: Option<BackendKind>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Create directories and settings, and seed local categories
    Init,

    /// Show current configuration and paths
    Config,

    /// Record and list transactions
    #[command(subcommand, alias = "txn")]
    Transaction(fintrack::cli::TransactionCommands),

    /// List categories
    #[command(subcommand)]
    Category(fintrack::cli::CategoryCommands),

    /// Monthly summaries
    #[command(subcommand)]
    Report(fintrack::cli::ReportCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let _log_guard = fintrack::logging::init(&paths);

    let backend = cli.backend.unwrap_or(settings.backend);

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing fintrack at: {}", paths.base_dir().display());
            let outcome = initialize_storage(&paths)?;
            if outcome.created_settings {
                println!("Created {}", paths.settings_file().display());
            }
            if outcome.seeded_categories > 0 {
                println!(
                    "Seeded {} default categories for the local store.",
                    outcome.seeded_categories
                );
            }
            println!("Initialization complete!");
            println!();
            println!("Run 'fintrack category list --backend local' to see the categories.");
        }
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Secrets file:   {}", paths.secrets_file().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Log directory:  {}", paths.log_dir().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Backend:         {}", settings.backend);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  History limit:   {}", settings.history_limit);
            println!();
            match StoreSecrets::load(&paths) {
                Ok(secrets) => println!("Store URL: {} (key set)", secrets.url),
                Err(e) => println!("Store credentials: {}", e),
            }
        }
        Some(command) => {
            // Missing credentials for the hosted store stop the program here
            let store = open_store(backend, &paths)?;
            info!(%backend, "store opened");

            match command {
                Commands::Tui => fintrack::tui::run_tui(store.as_ref(), &settings)?,
                Commands::Transaction(cmd) => {
                    handle_transaction_command(store.as_ref(), &settings, cmd)?
                }
                Commands::Category(cmd) => handle_category_command(store.as_ref(), cmd)?,
                Commands::Report(cmd) => handle_report_command(store.as_ref(), &settings, cmd)?,
                Commands::Init | Commands::Config => {}
            }
        }
        None => {
            println!("fintrack - Personal income and expense tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
