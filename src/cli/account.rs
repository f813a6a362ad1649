//! Account CLI commands
//!
//! Implements CLI commands for account management.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::account::{format_account_details, format_account_list};
use crate::error::{TrendsError, TrendsResult};
use crate::models::{AccountType, Money};
use crate::services::AccountService;
use crate::storage::Storage;

/// Account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Create a new account
    Create {
        /// Account name
        name: String,
        /// Account type (checking, savings, cash, investment, credit, loan, line_of_credit, other)
        #[arg(short = 't', long, default_value = "checking")]
        account_type: String,
        /// Current balance; for credit cards and loans, the amount owed
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        balance: String,
    },
    /// List all accounts
    List,
    /// Show account details and balance history
    Show {
        /// Account name or ID
        account: String,
    },
    /// Record a new current balance
    SetBalance {
        /// Account name or ID
        account: String,
        /// New balance
        #[arg(allow_negative_numbers = true)]
        balance: String,
    },
    /// Delete an account (its transactions stay in the ledger)
    Delete {
        /// Account name or ID
        account: String,
    },
}

fn parse_balance(input: &str) -> TrendsResult<Money> {
    Money::parse(input).map_err(|e| {
        TrendsError::Validation(format!(
            "Invalid balance '{}'. Use a format like '1000.00' or '1000'. Error: {}",
            input, e
        ))
    })
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AccountCommands,
    today: NaiveDate,
) -> TrendsResult<()> {
    let service = AccountService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        AccountCommands::Create {
            name,
            account_type,
            balance,
        } => {
            let account_type = AccountType::parse(&account_type).ok_or_else(|| {
                TrendsError::Validation(format!(
                    "Invalid account type: '{}'. Valid types: checking, savings, cash, investment, credit, loan, line_of_credit, other",
                    account_type
                ))
            })?;
            let balance = parse_balance(&balance)?;

            let account = service.create(&name, account_type, balance, today)?;

            println!("Created account: {}", account.name);
            println!("  Type:    {}", account.account_type);
            println!("  Balance: {}", account.balance.format_with_symbol(symbol));
            println!("  ID:      {}", account.id.short());
        }

        AccountCommands::List => {
            let accounts = service.list()?;
            println!("{}", format_account_list(&accounts, symbol));
        }

        AccountCommands::Show { account } => {
            let found = service.resolve(&account)?;
            print!("{}", format_account_details(&found, symbol));
        }

        AccountCommands::SetBalance { account, balance } => {
            let found = service.resolve(&account)?;
            let balance = parse_balance(&balance)?;
            let updated = service.set_balance(found.id, balance, today)?;
            println!(
                "{}: {} -> {}",
                updated.name,
                found.balance.format_with_symbol(symbol),
                updated.balance.format_with_symbol(symbol)
            );
        }

        AccountCommands::Delete { account } => {
            let found = service.resolve(&account)?;
            let deleted = service.delete(found.id)?;
            println!("Deleted account: {}", deleted.name);
        }
    }

    Ok(())
}
