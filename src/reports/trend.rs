//! Trend Report
//!
//! Turns accounts and a transaction ledger into twelve-month series for one
//! calendar year.
//!
//! - `accounts` trends rebuild each account's historical balance by walking
//!   the ledger backward from the live balance, undoing every transaction.
//! - `budgets` trends accumulate absolute Income and Expenses totals per month.
//!
//! Aggregation is pure: the reference date is injected through
//! [`TrendQuery::today`] and the same inputs always produce the same report.
//! It never fails. Transactions that cannot be placed are skipped.

use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::models::{
    Account, AccountId, BudgetId, Money, MonthSeries, Transaction, TransactionKind, MONTHS,
};

/// Which family of series to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendKind {
    /// Reconstructed balance per account
    #[default]
    Accounts,
    /// Income and Expenses totals per month
    Budgets,
}

impl TrendKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "accounts" | "account" | "balances" => Some(Self::Accounts),
            "budgets" | "budget" | "cashflow" => Some(Self::Budgets),
            _ => None,
        }
    }
}

impl fmt::Display for TrendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accounts => f.pad("accounts"),
            Self::Budgets => f.pad("budgets"),
        }
    }
}

/// Stable identifier of one series, used for legends and colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKey {
    Account(AccountId),
    Income,
    Expenses,
}

impl From<TransactionKind> for SeriesKey {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => Self::Income,
            TransactionKind::Expenses => Self::Expenses,
        }
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account(id) => write!(f, "{}", id),
            Self::Income => f.write_str("Income"),
            Self::Expenses => f.write_str("Expenses"),
        }
    }
}

impl Serialize for SeriesKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// What the caller should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendStatus {
    /// Series are present (possibly all zero)
    Ready,
    /// Accounts trend requested but the user has no accounts
    NoAccounts,
    /// Budgets trend requested but the ledger is empty
    NoTransactions,
}

/// Parameters of one aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrendQuery {
    /// Calendar year being viewed
    pub year: i32,
    pub kind: TrendKind,
    /// Restrict a budgets trend to one budget category
    pub budget: Option<BudgetId>,
    /// Reference date standing in for "now"
    pub today: NaiveDate,
}

impl TrendQuery {
    pub fn new(year: i32, kind: TrendKind, today: NaiveDate) -> Self {
        Self {
            year,
            kind,
            budget: None,
            today,
        }
    }

    pub fn with_budget(mut self, budget: BudgetId) -> Self {
        self.budget = Some(budget);
        self
    }

    fn is_current_year(&self) -> bool {
        self.year == self.today.year()
    }

    fn current_month(&self) -> usize {
        self.today.month0() as usize
    }
}

/// One chart series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendSeries {
    pub key: SeriesKey,
    /// Legend label: account name, or "Income" / "Expenses"
    pub label: String,
    /// Liability accounts are drawn differently and count negatively in net worth
    pub liability: bool,
    pub points: MonthSeries,
}

/// Output of the aggregator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendReport {
    pub year: i32,
    pub kind: TrendKind,
    pub status: TrendStatus,
    /// Month index the net worth is read at (accounts trends only)
    pub reference_month: Option<usize>,
    /// Signed net worth at the reference month (accounts trends only)
    pub net_worth: Option<Money>,
    pub series: Vec<TrendSeries>,
}

impl TrendReport {
    fn empty(query: &TrendQuery, status: TrendStatus) -> Self {
        let accounts = query.kind == TrendKind::Accounts;
        Self {
            year: query.year,
            kind: query.kind,
            status,
            reference_month: accounts.then(|| reference_month(query)),
            net_worth: accounts.then(Money::zero),
            series: Vec::new(),
        }
    }

    /// Nothing to display (distinct from a series of zeros)
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn series_for(&self, key: SeriesKey) -> Option<&TrendSeries> {
        self.series.iter().find(|s| s.key == key)
    }

    /// Per-month combined value: signed net worth for accounts trends,
    /// income minus expenses for budgets trends. A month where every series
    /// is a gap stays a gap.
    pub fn monthly_net(&self) -> MonthSeries {
        let mut net = MonthSeries::empty();
        for series in &self.series {
            let negate = match series.key {
                SeriesKey::Account(_) => series.liability,
                SeriesKey::Expenses => true,
                SeriesKey::Income => false,
            };
            for (month, value) in series.points.iter().enumerate() {
                if let Some(value) = value {
                    net.accumulate(month, if negate { -value } else { value });
                }
            }
        }
        net
    }
}

/// Builds [`TrendReport`]s from a snapshot of accounts and transactions
#[derive(Debug, Clone, Copy)]
pub struct TrendAggregator<'a> {
    accounts: &'a [Account],
    transactions: &'a [Transaction],
}

impl<'a> TrendAggregator<'a> {
    pub fn new(accounts: &'a [Account], transactions: &'a [Transaction]) -> Self {
        Self {
            accounts,
            transactions,
        }
    }

    /// Aggregate for the given query
    pub fn aggregate(&self, query: &TrendQuery) -> TrendReport {
        match query.kind {
            TrendKind::Accounts => self.account_trends(query),
            TrendKind::Budgets => self.budget_trends(query),
        }
    }

    /// Rolling-balance reconstruction.
    ///
    /// Each month holds the live balance minus the effect of every
    /// transaction dated after that month, up to `today`.
    fn account_trends(&self, query: &TrendQuery) -> TrendReport {
        if self.accounts.is_empty() {
            return TrendReport::empty(query, TrendStatus::NoAccounts);
        }

        let slots: HashMap<AccountId, usize> = self
            .accounts
            .iter()
            .enumerate()
            .map(|(slot, account)| (account.id, slot))
            .collect();

        let mut ledger: Vec<(usize, &Transaction)> = Vec::with_capacity(self.transactions.len());
        for txn in self.transactions {
            let Some(&slot) = txn.account_id.and_then(|id| slots.get(&id)) else {
                debug!(transaction = %txn.id, "skipping transaction without a known account");
                continue;
            };
            if txn.date > query.today {
                debug!(transaction = %txn.id, date = %txn.date, "skipping future-dated transaction");
                continue;
            }
            ledger.push((slot, txn));
        }

        // Newest first. Every transaction in a month is undone before any
        // earlier month is written, so order within a month is irrelevant.
        ledger.sort_by(|a, b| b.1.date.cmp(&a.1.date));

        let mut running: Vec<Money> = self.accounts.iter().map(|a| a.balance).collect();
        let mut pending = ledger.iter().peekable();

        while let Some((slot, txn)) = pending.next_if(|(_, t)| t.year() > query.year) {
            running[*slot] -= txn.balance_effect();
        }

        let has_activity = pending.peek().is_some_and(|(_, t)| t.year() == query.year);
        let last_month = if query.is_current_year() && has_activity {
            query.current_month()
        } else {
            MONTHS - 1
        };

        let mut points: Vec<MonthSeries> = running
            .iter()
            .map(|balance| {
                let mut series = MonthSeries::empty();
                series.fill_range(0, last_month, *balance);
                series
            })
            .collect();

        while let Some((slot, txn)) = pending.next_if(|(_, t)| t.year() == query.year) {
            running[*slot] -= txn.balance_effect();
            points[*slot].fill_before(txn.month_index(), running[*slot]);
        }

        let reference = reference_month(query);
        let mut net_worth = Money::zero();
        let series: Vec<TrendSeries> = self
            .accounts
            .iter()
            .zip(points)
            .map(|(account, points)| {
                let value = points.get(reference).unwrap_or_default();
                if account.is_liability() {
                    net_worth -= value;
                } else {
                    net_worth += value;
                }
                TrendSeries {
                    key: SeriesKey::Account(account.id),
                    label: account.name.clone(),
                    liability: account.is_liability(),
                    points,
                }
            })
            .collect();

        debug!(
            year = query.year,
            accounts = series.len(),
            transactions = ledger.len(),
            %net_worth,
            "built accounts trend"
        );

        TrendReport {
            year: query.year,
            kind: TrendKind::Accounts,
            status: TrendStatus::Ready,
            reference_month: Some(reference),
            net_worth: Some(net_worth),
            series,
        }
    }

    /// Forward accumulation of absolute amounts per kind and month
    fn budget_trends(&self, query: &TrendQuery) -> TrendReport {
        let in_budget = |txn: &&Transaction| query.budget.is_none() || txn.budget_id == query.budget;

        if !self.transactions.iter().any(|t| in_budget(&t)) {
            return TrendReport::empty(query, TrendStatus::NoTransactions);
        }

        let mut income = MonthSeries::zeros();
        let mut expenses = MonthSeries::zeros();

        for txn in self
            .transactions
            .iter()
            .filter(in_budget)
            .filter(|t| t.year() == query.year)
        {
            let target = match txn.kind {
                TransactionKind::Income => &mut income,
                TransactionKind::Expenses => &mut expenses,
            };
            target.accumulate(txn.month_index(), txn.amount.abs());
        }

        let series = [
            (TransactionKind::Income, income),
            (TransactionKind::Expenses, expenses),
        ]
        .into_iter()
        .map(|(kind, points)| TrendSeries {
            key: kind.into(),
            label: kind.label().to_string(),
            liability: false,
            points,
        })
        .collect();

        TrendReport {
            year: query.year,
            kind: TrendKind::Budgets,
            status: TrendStatus::Ready,
            reference_month: None,
            net_worth: None,
            series,
        }
    }
}

/// Month the net worth is read at: the current month for the current year,
/// December otherwise
fn reference_month(query: &TrendQuery) -> usize {
    if query.is_current_year() {
        query.current_month()
    } else {
        MONTHS - 1
    }
}
