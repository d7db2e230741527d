//! Display helpers for amounts and percentages.

use crate::{Currency, Money};

const CRORE: i64 = 10_000_000;
const LAKH: i64 = 100_000;
const THOUSAND: i64 = 1_000;

/// Short amount for cards and chart legends: `"1.5K"`, `"2L"`, `"1.2Cr"`.
///
/// Values below a thousand are printed in full without trailing zero
/// decimals (`"12.5"`, `"999"`).
#[must_use]
pub fn format_compact(amount: Money, currency: Currency) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let abs = Money::new(amount.minor().saturating_abs());
    let scale = currency.scale();

    let units = [(CRORE, "Cr"), (LAKH, "L"), (THOUSAND, "K")];
    for (unit, suffix) in units {
        if abs.minor() >= unit * scale {
            let scaled = abs.to_major_f64(currency) / unit as f64;
            let rendered = format!("{scaled:.1}");
            let rendered = rendered.strip_suffix(".0").unwrap_or(&rendered);
            return format!("{sign}{rendered}{suffix}");
        }
    }

    format!("{sign}{}", plain_major(abs, currency))
}

/// Percentage with one decimal digit, without the `%` sign.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return "0.0".to_string();
    }
    format!("{value:.1}")
}

fn plain_major(amount: Money, currency: Currency) -> String {
    let scale = currency.scale();
    let major = amount.minor() / scale;
    let fraction = amount.minor() % scale;
    if fraction == 0 {
        return major.to_string();
    }
    let digits = usize::from(currency.minor_units());
    let fraction = format!("{fraction:0digits$}");
    format!("{major}.{}", fraction.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact(rupees: f64) -> String {
        let amount = Money::from_major_f64(rupees, Currency::Inr).unwrap();
        format_compact(amount, Currency::Inr)
    }

    #[test]
    fn compact_uses_indian_units() {
        assert_eq!(compact(0.0), "0");
        assert_eq!(compact(12.5), "12.5");
        assert_eq!(compact(999.0), "999");
        assert_eq!(compact(1000.0), "1K");
        assert_eq!(compact(1500.0), "1.5K");
        assert_eq!(compact(99_999.0), "100K");
        assert_eq!(compact(250_000.0), "2.5L");
        assert_eq!(compact(10_000_000.0), "1Cr");
        assert_eq!(compact(-1500.0), "-1.5K");
    }

    #[test]
    fn percentage_has_one_decimal() {
        assert_eq!(format_percentage(50.0), "50.0");
        assert_eq!(format_percentage(33.333), "33.3");
        assert_eq!(format_percentage(f64::NAN), "0.0");
    }
}
