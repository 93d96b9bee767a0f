//! Fixed-point token amounts used for balances, earnings and payouts.

use std::{
    fmt,
    iter::Sum,
    str::FromStr,
};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimal token amount. Serialized as a decimal string such as `"10.0"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Builds an amount from an integer mantissa and a decimal scale, e.g. `(25, 1)` is `2.5`.
    pub fn new(mantissa: i64, scale: u32) -> Self {
        Self(Decimal::new(mantissa, scale))
    }

    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// `None` when the sum leaves the representable range.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// `None` when the difference leaves the representable range.
    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    /// Rounds to one decimal place, the precision totals are reported in.
    pub fn to_tenths(&self) -> Amount {
        Amount(
            self.0
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Divides by a record count, returning zero when `count` is zero.
    pub fn per(&self, count: usize) -> Amount {
        if count == 0 {
            return Amount::ZERO;
        }
        Amount(self.0 / Decimal::from(count))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.scale() == 0 {
            write!(f, "{}.0", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AmountParseError::Empty);
        }
        Decimal::from_str(trimmed)
            .map(Amount)
            .map_err(|_| AmountParseError::Invalid(trimmed.to_string()))
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

/// Totals saturate at the bounds of the decimal range instead of overflowing.
impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, |acc, value| Amount(acc.0.saturating_add(value.0)))
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Amount {
        iter.copied().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors raised when a string cannot be read as an [`Amount`].
pub enum AmountParseError {
    Empty,
    Invalid(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => f.write_str("amount is empty"),
            AmountParseError::Invalid(raw) => write!(f, "`{raw}` is not a valid amount"),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(raw: &str) -> Amount {
        raw.parse().expect("valid amount")
    }

    #[test]
    fn repeated_tenths_do_not_drift() {
        let mut balance = amount("10.0");
        for _ in 0..100 {
            balance = balance.checked_sub(amount("0.1")).unwrap();
        }
        assert_eq!(balance, Amount::ZERO);
    }

    #[test]
    fn display_keeps_one_decimal_for_whole_values() {
        assert_eq!(amount("10").to_string(), "10.0");
        assert_eq!(amount("10.0").to_string(), "10.0");
        assert_eq!(
            amount("10.0").checked_sub(amount("0.1")).unwrap().to_string(),
            "9.9"
        );
        assert_eq!(amount("15.25").to_string(), "15.25");
    }

    #[test]
    fn parse_rejects_blank_and_garbage() {
        assert_eq!("  ".parse::<Amount>(), Err(AmountParseError::Empty));
        assert!(matches!(
            "ten".parse::<Amount>(),
            Err(AmountParseError::Invalid(raw)) if raw == "ten"
        ));
    }

    #[test]
    fn sign_helpers_treat_zero_as_neither() {
        assert!(!Amount::ZERO.is_positive());
        assert!(!Amount::ZERO.is_negative());
        assert!(amount("-0.1").is_negative());
        assert!(amount("0.1").is_positive());
    }

    #[test]
    fn serializes_as_decimal_string() {
        let json = serde_json::to_string(&amount("4.5")).expect("serialize");
        assert_eq!(json, "\"4.5\"");
        let parsed: Amount = serde_json::from_str("\"8.5\"").expect("deserialize");
        assert_eq!(parsed, amount("8.5"));
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        let max = amount("79228162514264337593543950335");
        assert_eq!(max.checked_add(amount("1")), None);
        assert_eq!(max.checked_sub(amount("1")), Some(amount("79228162514264337593543950334")));
        let min = amount("-79228162514264337593543950335");
        assert_eq!(min.checked_sub(amount("1")), None);
    }

    #[test]
    fn sums_saturate_instead_of_panicking() {
        let max = amount("79228162514264337593543950335");
        let total: Amount = [max, amount("5")].into_iter().sum();
        assert_eq!(total, max);
    }

    #[test]
    fn tenths_round_half_away_from_zero() {
        assert_eq!(amount("0.25").to_tenths().to_string(), "0.3");
        assert_eq!(amount("4.6").to_tenths().to_string(), "4.6");
    }

    #[test]
    fn per_handles_empty_counts() {
        assert_eq!(amount("1.0").per(0), Amount::ZERO);
        assert_eq!(amount("0.3").per(3), amount("0.1"));
    }
}
