//! Calendar months and the `"MonthName Year"` labels the backend files
//! transactions under.

use std::{fmt, str::FromStr};

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::{AggregatorError, ResultAggregator};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month of a given year.
///
/// Ordering is chronological. Serialized as `{"year": 2026, "month": 3}`;
/// deserialization goes through [`YearMonth::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawYearMonth", into = "RawYearMonth")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawYearMonth {
    year: i32,
    month: u32,
}

impl TryFrom<RawYearMonth> for YearMonth {
    type Error = AggregatorError;

    fn try_from(raw: RawYearMonth) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month)
    }
}

impl From<YearMonth> for RawYearMonth {
    fn from(value: YearMonth) -> Self {
        Self {
            year: value.year,
            month: value.month,
        }
    }
}

impl YearMonth {
    /// Builds a month, `month` being 1-based.
    pub fn new(year: i32, month: u32) -> ResultAggregator<Self> {
        if !(1..=12).contains(&month) {
            return Err(AggregatorError::InvalidMonth(format!(
                "month must be in 1..=12, got {month}"
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    #[must_use]
    pub fn of(date: impl Datelike) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// 1-based month number.
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// English month name, e.g. `"March"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Returns `true` if `date` falls in this month.
    #[must_use]
    pub fn contains(self, date: impl Datelike) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    #[must_use]
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

impl FromStr for YearMonth {
    type Err = AggregatorError;

    /// Parses `"March 2026"`, `"mar 2026"` or `"2026-03"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AggregatorError::InvalidMonth(format!("unrecognized month: {s}"));
        let trimmed = s.trim();

        if let Some((year, month)) = trimmed.split_once('-') {
            let year: i32 = year.trim().parse().map_err(|_| invalid())?;
            let month: u32 = month.trim().parse().map_err(|_| invalid())?;
            return Self::new(year, month);
        }

        let mut parts = trimmed.split_whitespace();
        let name = parts.next().ok_or_else(invalid)?;
        let year = parts.next().ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        let name = name.to_ascii_lowercase();
        let position = MONTH_NAMES
            .iter()
            .position(|candidate| {
                let candidate = candidate.to_ascii_lowercase();
                candidate == name || (name.len() == 3 && candidate.starts_with(&name))
            })
            .ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;

        Self::new(year, position as u32 + 1)
    }
}

/// The last `count` months ending with the month of `reference`, oldest first.
#[must_use]
pub fn recent_months(reference: impl Datelike, count: usize) -> Vec<YearMonth> {
    let mut months = Vec::with_capacity(count);
    let mut current = YearMonth::of(reference);
    for _ in 0..count {
        months.push(current);
        current = current.previous();
    }
    months.reverse();
    months
}
