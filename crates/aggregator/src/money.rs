use std::{
    fmt,
    ops::{Add, AddAssign, Neg, Sub},
};

use serde::{Deserialize, Serialize};

use crate::{AggregatorError, Currency, ResultAggregator};

/// Signed money amount represented as **integer minor units** (paise).
///
/// Use this type for **all** monetary values in the aggregator (transaction
/// amounts, totals, budgets) so that sums never drift the way floats do.
///
/// The value is signed: transaction amounts are never negative, but derived
/// values such as a balance or a remaining budget can be. Arithmetic
/// saturates at the `i64` bounds instead of overflowing.
///
/// # Examples
///
/// ```rust
/// use aggregator::{Currency, Money};
///
/// let amount = Money::new(12_34);
/// assert_eq!(amount.minor(), 1234);
/// assert_eq!(amount.format(Currency::Inr), "₹12.34");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects
/// more fraction digits than the currency has):
///
/// ```rust
/// use aggregator::{Currency, Money};
///
/// assert_eq!(Money::parse_major("10", Currency::Inr).unwrap().minor(), 1000);
/// assert_eq!(Money::parse_major("10,5", Currency::Inr).unwrap().minor(), 1050);
/// assert!(Money::parse_major("12.345", Currency::Inr).is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from minor units.
    #[must_use]
    pub const fn new(minor: i64) -> Self {
        Self(minor)
    }

    /// Returns the raw value in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Value in major units, for ratios and display only.
    #[must_use]
    pub fn to_major_f64(self, currency: Currency) -> f64 {
        self.0 as f64 / currency.scale() as f64
    }

    /// `self / whole * 100`, or 0 when `whole` is not positive.
    ///
    /// The result is not clamped.
    #[must_use]
    pub fn ratio_percent(self, whole: Money) -> f64 {
        if whole.0 <= 0 {
            return 0.0;
        }
        self.0 as f64 / whole.0 as f64 * 100.0
    }

    /// Converts a float coming from JSON into minor units, rounding to the
    /// nearest minor unit.
    pub fn from_major_f64(value: f64, currency: Currency) -> ResultAggregator<Self> {
        if !value.is_finite() {
            return Err(AggregatorError::InvalidAmount(format!(
                "non-finite amount: {value}"
            )));
        }
        let scaled = (value * currency.scale() as f64).round();
        if scaled.abs() >= i64::MAX as f64 {
            return Err(AggregatorError::InvalidAmount(
                "amount too large".to_string(),
            ));
        }
        Ok(Money(scaled as i64))
    }

    /// Parses a decimal string expressed in major units.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading `+`/`-`.
    ///
    /// Validation rules:
    /// - at most `currency.minor_units()` fractional digits
    /// - rejects empty/invalid strings
    pub fn parse_major(input: &str, currency: Currency) -> ResultAggregator<Self> {
        let empty = || AggregatorError::InvalidAmount("empty amount".to_string());
        let invalid = || AggregatorError::InvalidAmount(format!("invalid amount: {input}"));
        let overflow = || AggregatorError::InvalidAmount("amount too large".to_string());

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.trim().replace(',', ".");
        if rest.is_empty() {
            return Err(empty());
        }

        let mut parts = rest.split('.');
        let major_str = parts.next().ok_or_else(invalid)?;
        let fraction_str = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }

        if major_str.is_empty() || !major_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let major: i64 = major_str.parse().map_err(|_| overflow())?;

        let digits = usize::from(currency.minor_units());
        let fraction: i64 = match fraction_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                if frac.len() > digits {
                    return Err(AggregatorError::InvalidAmount(
                        "too many decimals".to_string(),
                    ));
                }
                let padded = format!("{frac:0<digits$}");
                padded.parse().map_err(|_| invalid())?
            }
        };

        let total = major
            .checked_mul(currency.scale())
            .and_then(|v| v.checked_add(fraction))
            .ok_or_else(overflow)?;

        let signed = if negative {
            total.checked_neg().ok_or_else(overflow)?
        } else {
            total
        };

        Ok(Money(signed))
    }

    /// Formats the amount as `₹1,234.50`.
    #[must_use]
    pub fn format(self, currency: Currency) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = currency.scale().unsigned_abs();
        let major = group_thousands(abs / scale);
        let fraction = abs % scale;
        let digits = usize::from(currency.minor_units());
        format!(
            "{sign}{symbol}{major}.{fraction:0digits$}",
            symbol = currency.symbol()
        )
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Currency::default()))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(self.0.saturating_neg())
    }
}
