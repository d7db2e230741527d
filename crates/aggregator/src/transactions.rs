//! Transaction primitives.
//!
//! A `Transaction` is a single recorded money movement. Records are created
//! by the backend; here they are read-only snapshots.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AggregatorError, Money, YearMonth};

/// Label used for transactions that carry no tag.
pub const OTHER_TAG: &str = "Other";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
    Investment,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 3] = [Self::Income, Self::Expense, Self::Investment];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::Investment => "Investment",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = AggregatorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "investment" => Ok(Self::Investment),
            other => Err(AggregatorError::InvalidKind(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    #[serde(rename = "UPI")]
    Upi,
    Bank,
    Card,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Upi => "UPI",
            Self::Bank => "Bank",
            Self::Card => "Card",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = AggregatorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(Self::Cash),
            "upi" => Ok(Self::Upi),
            "bank" => Ok(Self::Bank),
            "card" => Ok(Self::Card),
            other => Err(AggregatorError::InvalidPaymentMethod(other.to_string())),
        }
    }
}

/// Type selector used by list and report filters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypeFilter {
    #[default]
    All,
    Only(TransactionKind),
}

impl TypeFilter {
    #[must_use]
    pub fn matches(self, kind: TransactionKind) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == kind,
        }
    }
}

impl From<TransactionKind> for TypeFilter {
    fn from(kind: TransactionKind) -> Self {
        Self::Only(kind)
    }
}

impl FromStr for TypeFilter {
    type Err = AggregatorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub title: String,
    /// Never negative.
    pub amount: Money,
    pub tag: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub description: Option<String>,
    /// `None` when the backend sent no date or an unparseable one.
    pub created_at: Option<DateTime<Utc>>,
    pub month: Option<YearMonth>,
}

impl Transaction {
    /// Creates a minimal transaction; the remaining fields are filled in with
    /// the builder-style setters below.
    #[must_use]
    pub fn new(kind: TransactionKind, amount: Money) -> Self {
        Self {
            id: String::new(),
            kind,
            title: String::new(),
            amount: amount.max(Money::ZERO),
            tag: None,
            payment_method: None,
            description: None,
            created_at: None,
            month: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self.month = Some(YearMonth::of(created_at));
        self
    }

    /// Tag used for grouping: the tag itself, or [`OTHER_TAG`] when missing
    /// or blank.
    #[must_use]
    pub fn tag_label(&self) -> &str {
        match self.tag.as_deref().map(str::trim) {
            Some(tag) if !tag.is_empty() => tag,
            _ => OTHER_TAG,
        }
    }
}
