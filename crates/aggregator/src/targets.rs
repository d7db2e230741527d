//! Monthly budget targets.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    AggregatorError, BudgetProgress, Money, TransactionKind, YearMonth,
    budget::compute_budget_progress,
};

/// Lifecycle state the backend assigns to a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TargetStatus {
    Completed,
    Process,
    Failed,
}

impl TargetStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "COMPLETED",
            Self::Process => "PROCESS",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for TargetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetStatus {
    type Err = AggregatorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "COMPLETED" => Ok(Self::Completed),
            "PROCESS" => Ok(Self::Process),
            "FAILED" => Ok(Self::Failed),
            other => Err(AggregatorError::InvalidStatus(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TargetStatus),
}

impl From<TargetStatus> for StatusFilter {
    fn from(status: TargetStatus) -> Self {
        Self::Only(status)
    }
}

impl FromStr for StatusFilter {
    type Err = AggregatorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetTarget {
    pub id: String,
    pub title: String,
    pub category: TransactionKind,
    pub target_amount: Money,
    pub period: YearMonth,
    pub color: Option<String>,
    /// Spend accumulated by the backend so far.
    pub current_amount: Money,
    /// Backend progress percentage, may exceed 100.
    pub progress: f64,
    pub status: TargetStatus,
}

impl BudgetTarget {
    /// `current / target * 100`, recomputed from the amounts. 0 when the
    /// target amount is not positive.
    #[must_use]
    pub fn usage_percent(&self) -> f64 {
        self.current_amount.ratio_percent(self.target_amount)
    }

    #[must_use]
    pub fn budget_progress(&self) -> BudgetProgress {
        compute_budget_progress(self.current_amount, Some(self.target_amount))
    }
}

/// Keeps targets with the requested status; `All` is a pass-through.
pub fn filter_targets_by_status<'a>(
    targets: impl IntoIterator<Item = &'a BudgetTarget>,
    filter: StatusFilter,
) -> Vec<&'a BudgetTarget> {
    targets
        .into_iter()
        .filter(|target| match filter {
            StatusFilter::All => true,
            StatusFilter::Only(status) => target.status == status,
        })
        .collect()
}

/// Keeps targets set for `month`.
pub fn targets_for_month<'a>(
    targets: impl IntoIterator<Item = &'a BudgetTarget>,
    month: YearMonth,
) -> Vec<&'a BudgetTarget> {
    targets
        .into_iter()
        .filter(|target| target.period == month)
        .collect()
}
