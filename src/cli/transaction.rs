//! Transaction CLI commands
//!
//! Add, list and delete ledger entries.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_transaction_register;
use crate::error::{TrendsError, TrendsResult};
use crate::models::{parse_ledger_date, BudgetId, Money, Transaction, TransactionKind};
use crate::services::{AccountService, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount (sign is ignored when --kind is given)
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// income or expenses; inferred from the amount's sign when omitted
        #[arg(short, long)]
        kind: Option<String>,
        /// Account name or ID
        #[arg(short, long)]
        account: Option<String>,
        /// Transaction date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Budget category ID
        #[arg(short, long)]
        budget: Option<String>,
        /// Memo
        #[arg(short, long)]
        memo: Option<String>,
    },
    /// List transactions
    List {
        /// Only show one calendar year
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (full or short form)
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
    today: NaiveDate,
) -> TrendsResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            amount,
            kind,
            account,
            date,
            budget,
            memo,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                TrendsError::Validation(format!("Invalid amount '{}': {}", amount, e))
            })?;

            let kind = match kind {
                Some(raw) => TransactionKind::parse(&raw).ok_or_else(|| {
                    TrendsError::Validation(format!(
                        "Invalid kind '{}'. Use income or expenses",
                        raw
                    ))
                })?,
                None => TransactionKind::from_sign(amount),
            };

            let date = match date {
                Some(raw) => {
                    parse_ledger_date(&raw).map_err(|e| TrendsError::Validation(e.to_string()))?
                }
                None => today,
            };

            let mut txn = Transaction::new(kind, amount, date);

            if let Some(account) = account {
                let found = AccountService::new(storage).resolve(&account)?;
                txn = txn.with_account(found.id);
            }

            if let Some(budget) = budget {
                let budget = budget.parse::<BudgetId>().map_err(|_| {
                    TrendsError::Validation(format!("Invalid budget id '{}'", budget))
                })?;
                txn = txn.with_budget(budget);
            }

            if let Some(memo) = memo {
                txn = txn.with_memo(memo);
            }

            let txn = service.add(txn)?;
            println!(
                "Added {} {} on {} ({})",
                txn.kind,
                txn.amount.format_with_symbol(symbol),
                txn.date,
                txn.id.short()
            );
        }

        TransactionCommands::List { year } => {
            let transactions = service.list(year)?;
            let accounts = storage.accounts.get_all()?;
            print!(
                "{}",
                format_transaction_register(&transactions, &accounts, symbol)
            );
        }

        TransactionCommands::Delete { id } => {
            let found = service
                .find(&id)?
                .ok_or_else(|| TrendsError::transaction_not_found(&id))?;
            let deleted = service.delete(found.id)?;
            println!(
                "Deleted transaction {} ({} on {})",
                deleted.id.short(),
                deleted.amount.format_with_symbol(symbol),
                deleted.date
            );
        }
    }

    Ok(())
}
