use std::{fmt, str::FromStr};

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use crate::{AggregatorError, Transaction, TypeFilter, YearMonth};

/// Time window applied before aggregating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Period {
    /// Same calendar day as the reference.
    Daily,
    /// The 7 days leading up to the reference.
    Weekly,
    /// Same calendar month as the reference.
    Monthly,
    #[default]
    All,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "day",
            Self::Weekly => "week",
            Self::Monthly => "month",
            Self::All => "all",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = AggregatorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "day" | "daily" => Ok(Self::Daily),
            "week" | "weekly" => Ok(Self::Weekly),
            "month" | "monthly" => Ok(Self::Monthly),
            "all" => Ok(Self::All),
            other => Err(AggregatorError::InvalidPeriod(other.to_string())),
        }
    }
}

/// Keeps the transactions that fall in `period` relative to `reference`.
///
/// Calendar comparisons (day, month) happen in the reference's timezone.
/// Undated transactions only survive [`Period::All`].
pub fn filter_by_period<'a, Tz: TimeZone>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    period: Period,
    reference: &DateTime<Tz>,
) -> Vec<&'a Transaction> {
    let tz = reference.timezone();
    let kept: Vec<&Transaction> = match period {
        Period::All => transactions.into_iter().collect(),
        Period::Daily => {
            let today = reference.date_naive();
            transactions
                .into_iter()
                .filter(|tx| {
                    tx.created_at
                        .is_some_and(|at| at.with_timezone(&tz).date_naive() == today)
                })
                .collect()
        }
        Period::Weekly => {
            let cutoff = (reference.clone() - TimeDelta::days(7)).with_timezone(&Utc);
            transactions
                .into_iter()
                .filter(|tx| tx.created_at.is_some_and(|at| at >= cutoff))
                .collect()
        }
        Period::Monthly => {
            filter_by_month(transactions, YearMonth::of(reference.date_naive()), &tz)
        }
    };
    tracing::debug!(%period, kept = kept.len(), "filtered transactions by period");
    kept
}

/// Keeps the transactions created during `month`, as seen from `tz`.
pub fn filter_by_month<'a, Tz: TimeZone>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    month: YearMonth,
    tz: &Tz,
) -> Vec<&'a Transaction> {
    transactions
        .into_iter()
        .filter(|tx| {
            tx.created_at
                .is_some_and(|at| month.contains(at.with_timezone(tz).date_naive()))
        })
        .collect()
}

/// Keeps the transactions whose stored month label is `month`.
///
/// This is how the backend files records; prefer [`filter_by_month`], which
/// looks at the actual creation date.
pub fn filter_by_month_label<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    month: YearMonth,
) -> Vec<&'a Transaction> {
    transactions
        .into_iter()
        .filter(|tx| tx.month == Some(month))
        .collect()
}

/// Keeps the transactions matching `filter`; [`TypeFilter::All`] is a
/// pass-through.
pub fn filter_by_type<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    filter: TypeFilter,
) -> Vec<&'a Transaction> {
    transactions
        .into_iter()
        .filter(|tx| filter.matches(tx.kind))
        .collect()
}

/// The `limit` newest transactions, newest first. Undated ones sort last.
pub fn recent<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    limit: usize,
) -> Vec<&'a Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.into_iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}
