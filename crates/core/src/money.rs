//! Monetary amounts.

use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Non-negative amount in the smallest currency unit (cents).
///
/// Displays and serializes as a decimal string with two fractional digits
/// (`"1299.99"`). Deserializes from that string form or from a JSON number.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// `self × quantity`, saturating at `u64::MAX` cents.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn saturating_add(self, other: Money) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    fn from_decimal_f64(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if value < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        let cents = (value * 100.0).round();
        if cents > u64::MAX as f64 {
            return Err(DomainError::validation("price is too large"));
        }
        Ok(Self(cents as u64))
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('-') {
            return Err(DomainError::validation("price cannot be negative"));
        }

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!("invalid price: {s:?}")));
        }
        if frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "invalid price: {s:?} (at most two decimal places)"
            )));
        }

        let whole: u64 = whole
            .parse()
            .map_err(|_| DomainError::validation(format!("price is too large: {s:?}")))?;
        let frac_cents = match frac.len() {
            0 => 0,
            1 => u64::from(frac.as_bytes()[0] - b'0') * 10,
            _ => u64::from(frac.as_bytes()[0] - b'0') * 10 + u64::from(frac.as_bytes()[1] - b'0'),
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .map(Money)
            .ok_or_else(|| DomainError::validation(format!("price is too large: {s:?}")))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MoneyRepr {
    Text(String),
    Cents(u64),
    Decimal(f64),
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed = match MoneyRepr::deserialize(deserializer)? {
            MoneyRepr::Text(s) => s.parse(),
            // Whole JSON numbers are whole currency units, not cents.
            MoneyRepr::Cents(units) => units
                .checked_mul(100)
                .map(Money)
                .ok_or_else(|| DomainError::validation("price is too large")),
            MoneyRepr::Decimal(v) => Money::from_decimal_f64(v),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_strings() {
        assert_eq!("1299.99".parse::<Money>().unwrap(), Money::from_cents(129_999));
        assert_eq!("29.9".parse::<Money>().unwrap(), Money::from_cents(2_990));
        assert_eq!("5".parse::<Money>().unwrap(), Money::from_cents(500));
        assert_eq!("0.05".parse::<Money>().unwrap(), Money::from_cents(5));
    }

    #[test]
    fn rejects_negative_and_malformed() {
        for bad in ["-1", "1.999", "abc", "", ".5", "1.a", "1e3"] {
            match bad.parse::<Money>() {
                Err(DomainError::Validation(_)) => {}
                other => panic!("expected Validation for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Money::from_cents(129_999).to_string(), "1299.99");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn times_and_sum_saturate() {
        assert_eq!(Money::from_cents(2_999).times(4), Money::from_cents(11_996));
        assert_eq!(Money::from_cents(u64::MAX).times(2), Money::from_cents(u64::MAX));

        let total: Money = [Money::from_cents(u64::MAX), Money::from_cents(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(u64::MAX));
    }

    #[test]
    fn serde_accepts_strings_and_numbers() {
        let from_text: Money = serde_json::from_str("\"79.99\"").unwrap();
        let from_float: Money = serde_json::from_str("79.99").unwrap();
        let from_int: Money = serde_json::from_str("80").unwrap();
        assert_eq!(from_text, Money::from_cents(7_999));
        assert_eq!(from_float, Money::from_cents(7_999));
        assert_eq!(from_int, Money::from_cents(8_000));

        assert!(serde_json::from_str::<Money>("-1.5").is_err());
        assert_eq!(serde_json::to_string(&from_text).unwrap(), "\"79.99\"");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: display output parses back to the same amount.
            #[test]
            fn display_parses_back(cents in 0u64..10_000_000_000) {
                let money = Money::from_cents(cents);
                prop_assert_eq!(money.to_string().parse::<Money>().unwrap(), money);
            }
        }
    }
}
