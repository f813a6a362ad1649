//! CSV Import service
//!
//! Imports ledger rows of the form `date,amount,kind[,account][,budget][,memo]`.
//! Columns are located by header name. Rows that cannot be parsed are skipped
//! and reported, never half-imported.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{info, warn};

use crate::error::{TrendsError, TrendsResult};
use crate::models::date::parse_with_format;
use crate::models::{Account, BudgetId, Money, Transaction, TransactionKind};
use crate::storage::Storage;

/// Header positions of the recognised columns
#[derive(Debug, Clone, Copy)]
struct Columns {
    date: usize,
    amount: usize,
    kind: Option<usize>,
    account: Option<usize>,
    budget: Option<usize>,
    memo: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> TrendsResult<Self> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.contains(&h.trim().to_lowercase().as_str()))
        };

        let date = find(&["date"])
            .ok_or_else(|| TrendsError::Import("CSV is missing a 'date' column".into()))?;
        let amount = find(&["amount"])
            .ok_or_else(|| TrendsError::Import("CSV is missing an 'amount' column".into()))?;

        Ok(Self {
            date,
            amount,
            kind: find(&["kind", "type"]),
            account: find(&["account"]),
            budget: find(&["budget", "budget_id"]),
            memo: find(&["memo", "description", "notes"]),
        })
    }
}

/// Outcome of one import run
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Number of transactions imported
    pub imported: usize,
    /// Rows skipped because they could not be parsed
    pub skipped: usize,
    /// Imported rows whose account reference matched nothing
    pub unresolved_accounts: usize,
    /// Error messages by 1-based data row
    pub errors: Vec<(usize, String)>,
}

/// Service for CSV import
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Import a CSV file from disk
    pub fn import_file(&self, path: &Path, date_format: &str) -> TrendsResult<ImportResult> {
        let file = File::open(path)
            .map_err(|e| TrendsError::Import(format!("Cannot open {}: {}", path.display(), e)))?;
        self.import_from_reader(file, date_format)
    }

    /// Import CSV rows from any reader
    pub fn import_from_reader<R: Read>(
        &self,
        reader: R,
        date_format: &str,
    ) -> TrendsResult<ImportResult> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| TrendsError::Import(format!("Cannot read CSV header: {}", e)))?
            .clone();
        let columns = Columns::from_headers(&headers)?;

        let accounts = self.storage.accounts.get_all()?;
        let by_name: HashMap<String, &Account> = accounts
            .iter()
            .map(|a| (a.name.to_lowercase(), a))
            .collect();

        let mut result = ImportResult::default();
        let mut parsed = Vec::new();

        for (idx, record) in reader.records().enumerate() {
            let row = idx + 1;
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    result.skip(row, format!("Unreadable row: {}", e));
                    continue;
                }
            };

            match parse_row(&record, columns, date_format) {
                Ok(mut row_data) => {
                    if let Some(reference) = row_data.account.take() {
                        let account = by_name
                            .get(&reference.to_lowercase())
                            .copied()
                            .or_else(|| accounts.iter().find(|a| a.id.matches(&reference)));
                        match account {
                            Some(account) => {
                                row_data.txn = row_data.txn.with_account(account.id);
                            }
                            None => {
                                warn!(row, account = %reference, "unknown account, importing without one");
                                result.unresolved_accounts += 1;
                            }
                        }
                    }
                    parsed.push(row_data.txn);
                }
                Err(message) => result.skip(row, message),
            }
        }

        result.imported = parsed.len();
        if !parsed.is_empty() {
            self.storage.transactions.insert_batch(parsed)?;
            self.storage.transactions.save()?;
            self.storage.trend_cache.clear()?;
        }

        info!(
            imported = result.imported,
            skipped = result.skipped,
            "import finished"
        );
        Ok(result)
    }
}

impl ImportResult {
    fn skip(&mut self, row: usize, message: String) {
        warn!(row, %message, "skipping CSV row");
        self.skipped += 1;
        self.errors.push((row, message));
    }
}

struct ParsedRow {
    txn: Transaction,
    account: Option<String>,
}

fn parse_row(record: &StringRecord, columns: Columns, date_format: &str) -> Result<ParsedRow, String> {
    let field = |col: Option<usize>| {
        col.and_then(|c| record.get(c))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    };

    let date_str = field(Some(columns.date)).ok_or("Missing date")?;
    let date = parse_with_format(date_str, date_format).map_err(|e| e.to_string())?;

    let amount_str = field(Some(columns.amount)).ok_or("Missing amount")?;
    let amount = Money::parse(amount_str).map_err(|e| e.to_string())?;
    if amount.is_zero() {
        return Err("Amount is zero".into());
    }

    let kind = match field(columns.kind) {
        Some(raw) => TransactionKind::parse(raw)
            .ok_or_else(|| format!("Unknown kind '{}'. Use income or expenses", raw))?,
        None => TransactionKind::from_sign(amount),
    };

    let mut txn = Transaction::new(kind, amount, date);

    if let Some(raw) = field(columns.budget) {
        let budget = raw
            .parse::<BudgetId>()
            .map_err(|_| format!("Invalid budget id '{}'", raw))?;
        txn = txn.with_budget(budget);
    }

    if let Some(memo) = field(columns.memo) {
        txn = txn.with_memo(memo);
    }

    Ok(ParsedRow {
        txn,
        account: field(columns.account).map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrendsPaths;
    use crate::models::AccountType;
    use crate::services::AccountService;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrendsPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_import_resolves_accounts_and_infers_kind() {
        let (_temp_dir, storage) = create_test_storage();
        let checking = AccountService::new(&storage)
            .create(
                "Checking",
                AccountType::Checking,
                Money::from_units(500),
                NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            )
            .unwrap();

        let csv = "\
date,amount,kind,account,memo
2026-03-10,-100.00,expenses,checking,groceries
2026-04-01T09:30:00Z,2500,,Checking,pay
2026-05-01,-20,,Nowhere,
";
        let result = ImportService::new(&storage)
            .import_from_reader(csv.as_bytes(), "%Y-%m-%d")
            .unwrap();

        assert_eq!(result.imported, 3);
        assert_eq!(result.skipped, 0);
        assert_eq!(result.unresolved_accounts, 1);

        let ledger = storage.transactions.get_all().unwrap();
        assert_eq!(ledger[0].account_id, Some(checking.id));
        assert_eq!(ledger[0].memo, "groceries");
        assert_eq!(ledger[1].kind, TransactionKind::Income);
        assert_eq!(ledger[1].date, NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());
        assert_eq!(ledger[2].kind, TransactionKind::Expenses);
        assert_eq!(ledger[2].account_id, None);
    }

    #[test]
    fn test_bad_rows_are_skipped_and_counted() {
        let (_temp_dir, storage) = create_test_storage();
        let csv = "\
date,amount,kind
not-a-date,10,income
2026-01-05,abc,income
2026-01-06,10,transfer
2026-01-07,0,income
2026-01-08,10,income
";
        let result = ImportService::new(&storage)
            .import_from_reader(csv.as_bytes(), "%Y-%m-%d")
            .unwrap();

        assert_eq!(result.imported, 1);
        assert_eq!(result.skipped, 4);
        let rows: Vec<_> = result.errors.iter().map(|(row, _)| *row).collect();
        assert_eq!(rows, vec![1, 2, 3, 4]);
        assert_eq!(storage.transactions.count().unwrap(), 1);
    }

    #[test]
    fn test_custom_date_format_and_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let budget = BudgetId::new();
        let csv = format!("Date,Amount,Type,Budget\n03/15/2026,-42.50,expense,{}\n", budget);

        let result = ImportService::new(&storage)
            .import_from_reader(csv.as_bytes(), "%m/%d/%Y")
            .unwrap();

        assert_eq!(result.imported, 1);
        let txn = &storage.transactions.get_all().unwrap()[0];
        assert_eq!(txn.budget_id, Some(budget));
        assert_eq!(txn.amount, Money::from_cents(-4250));
    }

    #[test]
    fn test_missing_required_column() {
        let (_temp_dir, storage) = create_test_storage();
        let err = ImportService::new(&storage)
            .import_from_reader("when,amount\n2026-01-01,5\n".as_bytes(), "%Y-%m-%d")
            .unwrap_err();
        assert!(matches!(err, TrendsError::Import(_)));
    }
}
