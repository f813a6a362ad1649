//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::{Account, Money};

/// Format a list of accounts as a table with a signed net worth total
pub fn format_account_list(accounts: &[Account], symbol: &str) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(9);

    let type_width = accounts
        .iter()
        .map(|a| a.account_type.to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<type_width$}  {:>14}\n",
        "ID",
        "Name",
        "Type",
        "Balance",
        name_width = name_width,
        type_width = type_width,
    ));

    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<type_width$}  {:->14}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        type_width = type_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:<type_width$}  {:>14}\n",
            account.id.short(),
            account.name,
            account.account_type,
            account.balance.format_with_symbol(symbol),
            name_width = name_width,
            type_width = type_width,
        ));
    }

    let net_worth: Money = accounts
        .iter()
        .map(|a| Money::from_cents(a.balance.cents().saturating_mul(a.account_type.net_worth_sign())))
        .sum();

    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<type_width$}  {:>14}\n",
        "",
        "NET WORTH",
        "",
        net_worth.format_with_symbol(symbol),
        name_width = name_width,
        type_width = type_width,
    ));

    output
}

/// Format a single account's details with its balance history
pub fn format_account_details(account: &Account, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  Type:      {}\n", account.account_type));
    output.push_str(&format!("  ID:        {}\n", account.id));
    output.push_str(&format!(
        "  Liability: {}\n",
        if account.is_liability() { "Yes" } else { "No" }
    ));
    output.push_str(&format!(
        "  Balance:   {}\n",
        account.balance.format_with_symbol(symbol)
    ));

    if !account.history.is_empty() {
        output.push_str("\n  Balance history:\n");
        for snapshot in account.history.iter().rev() {
            output.push_str(&format!(
                "    {}  {:>14}\n",
                snapshot.effective_date,
                snapshot.balance.format_with_symbol(symbol)
            ));
        }
    }

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        account.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        account.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountType;
    use chrono::NaiveDate;

    #[test]
    fn test_format_account_list() {
        let accounts = vec![
            Account::with_balance("Checking", AccountType::Checking, Money::from_units(200)),
            Account::with_balance("Visa", AccountType::Credit, Money::from_units(300)),
        ];

        let output = format_account_list(&accounts, "$");
        assert!(output.contains("Checking"));
        assert!(output.contains("Credit Card"));
        assert!(output.contains("-$100.00"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_account_list(&[], "$"), "No accounts found.");
    }

    #[test]
    fn test_format_account_details_lists_history_newest_first() {
        let mut account = Account::new("Savings", AccountType::Savings);
        account.set_balance(Money::from_units(100), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        account.set_balance(Money::from_units(250), NaiveDate::from_ymd_opt(2026, 6, 1).unwrap());

        let output = format_account_details(&account, "$");
        let june = output.find("2026-06-01").unwrap();
        let january = output.find("2026-01-01").unwrap();
        assert!(june < january);
        assert!(output.contains("Liability: No"));
    }
}
