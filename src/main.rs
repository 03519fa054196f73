use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

use fintrack::cli::{
    handle_add_command, handle_export_command, handle_list_command, handle_summary_command,
    AddArgs, ExportArgs, ListArgs, SummaryArgs,
};
use fintrack::config::{resolve_db_path, Settings, TrackerPaths};
use fintrack::logging::init_logging;
use fintrack::storage::TransactionRepository;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Simple command-line personal finance tracker",
    long_about = "fintrack logs income and expense transactions to a local SQLite \
                  file and prints filtered listings and period summaries."
)]
struct Cli {
    /// Path to the data file (default: ./finance.db)
    #[arg(long, global = true, env = "FINTRACK_DB")]
    db: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an income or expense
    Add(AddArgs),

    /// List transactions
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show income, expenses and balance for a period
    Summary(SummaryArgs),

    /// Export transactions as CSV, JSON or YAML
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;
    let db_path = resolve_db_path(cli.db, &settings);
    debug!(db = %db_path.display(), "resolved data file");

    if let Commands::Config = cli.command {
        println!("fintrack configuration");
        println!("======================");
        println!("Data file:     {}", db_path.display());
        println!("Settings file: {}", paths.settings_file().display());
        println!();
        println!("Settings:");
        println!("  Currency symbol: {}", settings.currency_symbol);
        println!("  Date format:     {}", settings.date_format);
        return Ok(());
    }

    let repo = TransactionRepository::open(db_path)?;

    match cli.command {
        Commands::Add(args) => handle_add_command(&repo, &settings, args)?,
        Commands::List(args) => handle_list_command(&repo, &settings, args)?,
        Commands::Summary(args) => handle_summary_command(&repo, &settings, args)?,
        Commands::Export(args) => handle_export_command(&repo, args)?,
        Commands::Config => {}
    }

    Ok(())
}
