use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Money, Transaction, format::format_percentage};

/// One tag's slice of a breakdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagShare {
    pub tag: String,
    pub amount: Money,
    /// Share of the breakdown total, full precision. 0 when the total is 0.
    pub percentage: f64,
}

impl TagShare {
    /// Percentage rounded to one decimal digit, e.g. `"50.0"`.
    #[must_use]
    pub fn percentage_label(&self) -> String {
        format_percentage(self.percentage)
    }
}

/// Amounts grouped by tag, in order of each tag's first appearance.
///
/// Charts colour slices by position, so the order is part of the contract.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TagBreakdown {
    shares: Vec<TagShare>,
    total: Money,
}

impl TagBreakdown {
    #[must_use]
    pub fn shares(&self) -> &[TagShare] {
        &self.shares
    }

    #[must_use]
    pub fn total(&self) -> Money {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    /// Amount accumulated under `tag`.
    #[must_use]
    pub fn amount(&self, tag: &str) -> Option<Money> {
        self.shares
            .iter()
            .find(|share| share.tag == tag)
            .map(|share| share.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagShare> {
        self.shares.iter()
    }
}

impl<'a> IntoIterator for &'a TagBreakdown {
    type Item = &'a TagShare;
    type IntoIter = std::slice::Iter<'a, TagShare>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.iter()
    }
}

/// Groups amounts by tag; untagged transactions land under `"Other"`.
///
/// Usually called on a single-type selection (see `filter_by_type`).
pub fn group_by_tag<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> TagBreakdown {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(&str, Money)> = Vec::new();
    let mut total = Money::ZERO;

    for tx in transactions {
        let tag = tx.tag_label();
        total += tx.amount;
        match index.get(tag) {
            Some(&pos) => totals[pos].1 += tx.amount,
            None => {
                index.insert(tag, totals.len());
                totals.push((tag, tx.amount));
            }
        }
    }

    let shares = totals
        .into_iter()
        .map(|(tag, amount)| TagShare {
            tag: tag.to_string(),
            amount,
            percentage: amount.ratio_percent(total),
        })
        .collect::<Vec<_>>();
    tracing::debug!(tags = shares.len(), total = %total, "grouped transactions by tag");

    TagBreakdown { shares, total }
}
