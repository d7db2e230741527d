use serde::{Deserialize, Serialize};

use crate::{Money, Transaction, TransactionKind};

/// Per-type totals shown on the dashboard cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub income: Money,
    pub expense: Money,
    pub investment: Money,
    /// `income - expense - investment`.
    pub balance: Money,
}

impl Summary {
    #[must_use]
    pub fn total_for(&self, kind: TransactionKind) -> Money {
        match kind {
            TransactionKind::Income => self.income,
            TransactionKind::Expense => self.expense,
            TransactionKind::Investment => self.investment,
        }
    }
}

/// Sums amounts per transaction type.
///
/// Accumulation is integer arithmetic on minor units, so the totals are exact.
pub fn summarize<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Summary {
    let (income, expense, investment) = transactions.into_iter().fold(
        (Money::ZERO, Money::ZERO, Money::ZERO),
        |(income, expense, investment), tx| match tx.kind {
            TransactionKind::Income => (income + tx.amount, expense, investment),
            TransactionKind::Expense => (income, expense + tx.amount, investment),
            TransactionKind::Investment => (income, expense, investment + tx.amount),
        },
    );

    Summary {
        income,
        expense,
        investment,
        balance: income - expense - investment,
    }
}
