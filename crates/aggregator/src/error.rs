//! The module contains the errors the aggregator can return.
//!
//! Aggregation itself never fails: malformed values are coerced at the
//! boundary. Errors only surface while normalizing backend records:
//!
//! - [`InvalidKind`] when a transaction or target carries an unknown type.
//! - [`InvalidStatus`] when a target carries an unknown status.
//! - [`Json`] when a payload is not valid JSON at all.
//!
//!  [`InvalidKind`]: AggregatorError::InvalidKind
//!  [`InvalidStatus`]: AggregatorError::InvalidStatus
//!  [`Json`]: AggregatorError::Json
use thiserror::Error;

/// Aggregator custom errors.
#[derive(Error, Debug)]
pub enum AggregatorError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid transaction type: {0}")]
    InvalidKind(String),
    #[error("Invalid target status: {0}")]
    InvalidStatus(String),
    #[error("Invalid month: {0}")]
    InvalidMonth(String),
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
    #[error("Invalid payment method: {0}")]
    InvalidPaymentMethod(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PartialEq for AggregatorError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidKind(a), Self::InvalidKind(b)) => a == b,
            (Self::InvalidStatus(a), Self::InvalidStatus(b)) => a == b,
            (Self::InvalidMonth(a), Self::InvalidMonth(b)) => a == b,
            (Self::InvalidPeriod(a), Self::InvalidPeriod(b)) => a == b,
            (Self::InvalidPaymentMethod(a), Self::InvalidPaymentMethod(b)) => a == b,
            (Self::Json(a), Self::Json(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
