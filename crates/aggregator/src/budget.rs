//! Budget progress and the three display bands.
//!
//! The progress bar is capped at 100%, the band is not: an overspent budget
//! shows a full bar and the `Exceeded` band.

use serde::{Deserialize, Serialize};

use crate::Money;

/// Usage at or above this percentage is a warning.
pub const WARNING_THRESHOLD: f64 = 80.0;
/// Usage above this percentage exceeds the budget.
pub const LIMIT_THRESHOLD: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    Normal,
    Warning,
    Exceeded,
}

impl BudgetStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Exceeded => "exceeded",
        }
    }
}

/// Classifies an uncapped usage percentage.
///
/// `> 100` is exceeded, `80..=100` is a warning, anything lower is normal.
#[must_use]
pub fn budget_status(percentage_uncapped: f64) -> BudgetStatus {
    if percentage_uncapped > LIMIT_THRESHOLD {
        BudgetStatus::Exceeded
    } else if percentage_uncapped >= WARNING_THRESHOLD {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Normal
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetProgress {
    pub used: Money,
    pub budget: Money,
    /// `budget - used`, negative once overspent.
    pub remaining: Money,
    /// Usage percentage clamped to `0..=100` for the progress bar.
    pub percentage: f64,
    /// Raw usage percentage, `None` when there is no positive budget.
    pub usage: Option<f64>,
    pub status: BudgetStatus,
}

impl BudgetProgress {
    #[must_use]
    pub fn is_exceeded(&self) -> bool {
        self.status == BudgetStatus::Exceeded
    }
}

/// Computes progress of `used` against an optional `budget`.
///
/// A missing or non-positive budget has no meaningful percentage: the bar
/// stays at 0 and the status is `Exceeded` as soon as anything was spent.
#[must_use]
pub fn compute_budget_progress(used: Money, budget: Option<Money>) -> BudgetProgress {
    let budget = budget.unwrap_or(Money::ZERO);
    let remaining = budget - used;

    if !budget.is_positive() {
        let status = if used.is_positive() {
            BudgetStatus::Exceeded
        } else {
            BudgetStatus::Normal
        };
        return BudgetProgress {
            used,
            budget,
            remaining,
            percentage: 0.0,
            usage: None,
            status,
        };
    }

    let usage = used.ratio_percent(budget);
    BudgetProgress {
        used,
        budget,
        remaining,
        percentage: usage.clamp(0.0, LIMIT_THRESHOLD),
        usage: Some(usage),
        status: budget_status(usage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rupees(value: i64) -> Money {
        Money::new(value * 100)
    }

    #[test]
    fn ninety_percent_is_a_warning() {
        let progress = compute_budget_progress(rupees(9000), Some(rupees(10000)));
        assert_eq!(progress.remaining, rupees(1000));
        assert_eq!(progress.percentage, 90.0);
        assert_eq!(progress.status, BudgetStatus::Warning);
    }

    #[test]
    fn overspending_caps_the_bar_but_not_the_remaining() {
        let progress = compute_budget_progress(rupees(12000), Some(rupees(10000)));
        assert_eq!(progress.remaining, rupees(-2000));
        assert_eq!(progress.percentage, 100.0);
        assert_eq!(progress.usage, Some(120.0));
        assert!(progress.is_exceeded());
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(budget_status(79.99), BudgetStatus::Normal);
        assert_eq!(budget_status(80.0), BudgetStatus::Warning);
        assert_eq!(budget_status(100.0), BudgetStatus::Warning);
        assert_eq!(budget_status(100.01), BudgetStatus::Exceeded);
        assert_eq!(budget_status(0.0), BudgetStatus::Normal);
    }

    #[test]
    fn zero_or_missing_budget() {
        let spent = compute_budget_progress(rupees(50), None);
        assert_eq!(spent.percentage, 0.0);
        assert_eq!(spent.usage, None);
        assert_eq!(spent.remaining, rupees(-50));
        assert_eq!(spent.status, BudgetStatus::Exceeded);

        let idle = compute_budget_progress(Money::ZERO, Some(Money::ZERO));
        assert_eq!(idle.status, BudgetStatus::Normal);
        assert_eq!(idle.remaining, Money::ZERO);
    }
}
