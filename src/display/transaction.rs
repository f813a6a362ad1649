//! Transaction display formatting
//!
//! Register view of the ledger, one row per transaction.

use std::collections::HashMap;

use crate::models::{Account, AccountId, Transaction};

use super::report::truncate;

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, account_name: &str, symbol: &str) -> String {
    format!(
        "{:<12} {} {:<8} {:<18} {:>12}  {}",
        txn.id.short(),
        txn.date.format("%Y-%m-%d"),
        txn.kind,
        truncate(account_name, 18),
        txn.amount.format_with_symbol(symbol),
        txn.memo
    )
    .trim_end()
    .to_string()
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[Transaction],
    accounts: &[Account],
    symbol: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let names: HashMap<AccountId, &str> = accounts
        .iter()
        .map(|a| (a.id, a.name.as_str()))
        .collect();

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<10} {:<8} {:<18} {:>12}  {}\n",
        "ID", "Date", "Kind", "Account", "Amount", "Memo"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for txn in transactions {
        let account_name = match txn.account_id {
            Some(id) => names.get(&id).copied().unwrap_or("(deleted)"),
            None => "",
        };
        output.push_str(&format_transaction_row(txn, account_name, symbol));
        output.push('\n');
    }

    output
}
