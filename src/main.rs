use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ledger_trends::cli::{
    handle_account_command, handle_import_command, handle_transaction_command,
    handle_trend_command, AccountCommands, ImportArgs, TransactionCommands, TrendArgs,
};
use ledger_trends::config::{paths::TrendsPaths, settings::Settings};
use ledger_trends::models::parse_ledger_date;
use ledger_trends::storage::Storage;

#[derive(Parser)]
#[command(
    name = "trends",
    author = "Kaylee Beyene",
    version,
    about = "Month-by-month account balance and budget trends",
    long_about = "ledger-trends rebuilds what each of your accounts held at the end \
                  of every month of a year from today's balances and your transaction \
                  ledger, and totals income and expenses per month."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, env = "LEDGER_TRENDS_TODAY")]
    today: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a year of balances or income and expenses
    Trend(TrendArgs),

    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Import transactions from CSV
    Import(ImportArgs),

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_today(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(raw) => parse_ledger_date(raw).with_context(|| format!("Invalid --today '{}'", raw)),
        None => Ok(Local::now().date_naive()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let today = resolve_today(cli.today.as_deref())?;

    let paths = TrendsPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Trend(args)) => {
            handle_trend_command(&storage, &settings, args, today)?;
        }
        Some(Commands::Account(cmd)) => {
            handle_account_command(&storage, &settings, cmd, today)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd, today)?;
        }
        Some(Commands::Import(args)) => {
            handle_import_command(&storage, &settings, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing ledger-trends at: {}", paths.base_dir().display());
            storage.save_all()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  trends account create \"Checking\" --balance 1000");
            println!("  trends import ledger.csv");
            println!("  trends trend");
        }
        Some(Commands::Config) => {
            println!("ledger-trends Configuration");
            println!("===========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "Yes" } else { "No" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Default trend kind: {}", settings.default_kind);
            println!("  Chart width:        {}", settings.chart_width);
            println!("  Import date format: {}", settings.import_date_format);
        }
        None => {
            handle_trend_command(&storage, &settings, TrendArgs::default(), today)?;
        }
    }

    Ok(())
}
