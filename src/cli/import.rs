//! Import CLI command

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::TrendsResult;
use crate::services::ImportService;
use crate::storage::Storage;

/// Arguments of `trends import`
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// CSV file with columns date,amount,kind[,account][,budget][,memo]
    pub file: PathBuf,

    /// strftime date format (default from settings)
    #[arg(long)]
    pub date_format: Option<String>,
}

/// Handle the import command
pub fn handle_import_command(
    storage: &Storage,
    settings: &Settings,
    args: ImportArgs,
) -> TrendsResult<()> {
    let date_format = args
        .date_format
        .as_deref()
        .unwrap_or(settings.import_date_format.as_str());

    let result = ImportService::new(storage).import_file(&args.file, date_format)?;

    println!("Imported {} transaction(s)", result.imported);
    if result.unresolved_accounts > 0 {
        println!(
            "  {} row(s) named an unknown account and were imported without one",
            result.unresolved_accounts
        );
    }
    if result.skipped > 0 {
        println!("  Skipped {} row(s):", result.skipped);
        for (row, message) in &result.errors {
            println!("    row {}: {}", row, message);
        }
    }

    Ok(())
}
