//! Normalization of backend records into strict domain types.
//!
//! This is the single place where loose JSON meets the typed model:
//!
//! - an unknown transaction type, target category or status rejects the record;
//! - a malformed, negative or implausibly large amount is coerced to 0;
//! - a malformed timestamp becomes `None`, which keeps the record out of
//!   period-filtered views.

use api_types::{target::TargetRecord, transaction::TransactionRecord};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use unicode_normalization::UnicodeNormalization;

use crate::{
    AggregatorError, BudgetTarget, Currency, Money, ResultAggregator, TargetStatus, Transaction,
    TransactionKind, YearMonth,
};

/// Largest amount accepted from the backend: one lakh crore rupees.
const MAX_AMOUNT: Money = Money::new(100_000_000_000_000);

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Converts one backend transaction into a [`Transaction`].
pub fn normalize_transaction(record: TransactionRecord) -> ResultAggregator<Transaction> {
    let kind: TransactionKind = record
        .kind
        .as_deref()
        .ok_or_else(|| AggregatorError::InvalidKind("missing transaction type".to_string()))?
        .parse()?;

    let created_at = record.created_at.as_deref().and_then(parse_timestamp);
    let month = record
        .month
        .as_deref()
        .and_then(|label| label.parse::<YearMonth>().ok())
        .or_else(|| created_at.map(YearMonth::of));

    Ok(Transaction {
        id: record.id.unwrap_or_default(),
        kind,
        title: record.title.unwrap_or_default(),
        amount: coerce_amount(record.amount.as_ref(), "amount"),
        tag: record.tag.as_deref().and_then(normalize_label),
        payment_method: record
            .payment_method
            .as_deref()
            .and_then(|method| method.parse().ok()),
        description: record.description.filter(|text| !text.trim().is_empty()),
        created_at,
        month,
    })
}

/// Normalizes every record, dropping (and logging) the rejected ones.
pub fn normalize_transactions(
    records: impl IntoIterator<Item = TransactionRecord>,
) -> Vec<Transaction> {
    records
        .into_iter()
        .filter_map(|record| {
            let id = record.id.clone().unwrap_or_default();
            match normalize_transaction(record) {
                Ok(tx) => Some(tx),
                Err(err) => {
                    tracing::warn!(%id, "skipping transaction: {err}");
                    None
                }
            }
        })
        .collect()
}

/// Decodes a backend payload into transactions.
///
/// A payload that is valid JSON but not an array (for instance an error
/// object) yields no transactions.
pub fn parse_transactions(json: &str) -> ResultAggregator<Vec<Transaction>> {
    let value: Value = serde_json::from_str(json)?;
    Ok(transactions_from_value(value))
}

/// Same as [`parse_transactions`] for an already decoded payload.
pub fn transactions_from_value(value: Value) -> Vec<Transaction> {
    normalize_transactions(records_from_value::<TransactionRecord>(value, "transaction"))
}

/// Converts one backend target into a [`BudgetTarget`].
pub fn normalize_target(record: TargetRecord) -> ResultAggregator<BudgetTarget> {
    let category: TransactionKind = record
        .category
        .as_deref()
        .ok_or_else(|| AggregatorError::InvalidKind("missing target category".to_string()))?
        .parse()?;
    let status: TargetStatus = record
        .status
        .as_deref()
        .ok_or_else(|| AggregatorError::InvalidStatus("missing target status".to_string()))?
        .parse()?;
    let period = match (record.year, record.month) {
        (Some(year), Some(month)) => YearMonth::new(year, month)?,
        _ => {
            return Err(AggregatorError::InvalidMonth(
                "target without month/year".to_string(),
            ));
        }
    };

    let target_amount = coerce_amount(record.target_amount.as_ref(), "targetAmount");
    let current_amount = coerce_amount(record.current_amount.as_ref(), "currentAmount");
    let progress = record
        .progress
        .filter(|progress| progress.is_finite())
        .unwrap_or_else(|| current_amount.ratio_percent(target_amount));

    Ok(BudgetTarget {
        id: record.id.unwrap_or_default(),
        title: record.title.unwrap_or_default(),
        category,
        target_amount,
        period,
        color: record.color.filter(|color| !color.trim().is_empty()),
        current_amount,
        progress,
        status,
    })
}

/// Normalizes every target, dropping (and logging) the rejected ones.
pub fn normalize_targets(records: impl IntoIterator<Item = TargetRecord>) -> Vec<BudgetTarget> {
    records
        .into_iter()
        .filter_map(|record| {
            let id = record.id.clone().unwrap_or_default();
            match normalize_target(record) {
                Ok(target) => Some(target),
                Err(err) => {
                    tracing::warn!(%id, "skipping target: {err}");
                    None
                }
            }
        })
        .collect()
}

/// Decodes a backend payload into targets; non-array payloads yield none.
pub fn parse_targets(json: &str) -> ResultAggregator<Vec<BudgetTarget>> {
    let value: Value = serde_json::from_str(json)?;
    Ok(targets_from_value(value))
}

/// Same as [`parse_targets`] for an already decoded payload.
pub fn targets_from_value(value: Value) -> Vec<BudgetTarget> {
    normalize_targets(records_from_value::<TargetRecord>(value, "target"))
}

fn records_from_value<T: serde::de::DeserializeOwned>(value: Value, label: &str) -> Vec<T> {
    let Value::Array(items) = value else {
        tracing::warn!("expected a {label} array, got something else");
        return Vec::new();
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value::<T>(item) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(idx, "skipping malformed {label}: {err}");
                None
            }
        })
        .collect()
}

/// Reads a backend amount. Anything that is not a number (or numeric string)
/// in `0..=MAX_AMOUNT` becomes 0.
fn coerce_amount(value: Option<&Value>, field: &str) -> Money {
    let currency = Currency::default();
    let parsed = match value {
        None | Some(Value::Null) => return Money::ZERO,
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or_else(|| AggregatorError::InvalidAmount(number.to_string()))
            .and_then(|major| Money::from_major_f64(major, currency)),
        Some(Value::String(text)) => Money::parse_major(text, currency).or_else(|_| {
            text.trim()
                .parse::<f64>()
                .map_err(|_| AggregatorError::InvalidAmount(text.clone()))
                .and_then(|major| Money::from_major_f64(major, currency))
        }),
        Some(other) => Err(AggregatorError::InvalidAmount(other.to_string())),
    };

    match parsed {
        Ok(amount) if amount.is_negative() => {
            tracing::warn!(field, %amount, "negative amount coerced to 0");
            Money::ZERO
        }
        Ok(amount) if amount > MAX_AMOUNT => {
            tracing::warn!(field, %amount, "amount out of range coerced to 0");
            Money::ZERO
        }
        Ok(amount) => amount,
        Err(err) => {
            tracing::warn!(field, "{err}, coerced to 0");
            Money::ZERO
        }
    }
}

/// Parses RFC 3339, a naive ISO datetime (taken as UTC) or a bare date.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|midnight| midnight.and_utc());
    }
    tracing::debug!(raw, "unparseable timestamp");
    None
}

/// Trims and NFC-normalizes a user label; blank labels become `None`.
fn normalize_label(raw: &str) -> Option<String> {
    let label: String = raw.trim().nfc().collect();
    (!label.is_empty()).then_some(label)
}
