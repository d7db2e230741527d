use serde::{Deserialize, Serialize};

/// Currency code used to format and parse money values.
///
/// The backend only ever deals in rupees, but currency is modelled explicitly
/// so that formatting knows its symbol and fraction digits.
///
/// ## Minor units
///
/// Amounts are stored as an `i64` number of **minor units** (see `Money`).
/// `minor_units()` returns how many decimal digits are used when converting between:
/// - major units (backend/user values, e.g. `10.50`)
/// - minor units (stored integers, e.g. `1050` paise)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Inr,
}

impl Currency {
    /// Symbol printed in front of formatted amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Inr => "₹",
        }
    }

    /// Number of fraction digits used when formatting/parsing amounts.
    #[must_use]
    pub const fn minor_units(self) -> u8 {
        match self {
            Currency::Inr => 2,
        }
    }

    /// `10^minor_units`, the number of minor units in one major unit.
    #[must_use]
    pub const fn scale(self) -> i64 {
        10i64.pow(self.minor_units() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inr_is_the_default() {
        assert_eq!(Currency::default(), Currency::Inr);
        assert_eq!(Currency::Inr.symbol(), "₹");
    }

    #[test]
    fn scale_matches_minor_units() {
        assert_eq!(Currency::Inr.scale(), 100);
    }
}
