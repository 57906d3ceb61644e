//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a product within an inventory.
///
/// Assigned by the store (`max + 1`), so ids are small positive integers.
/// Serializes as a plain number; deserializes from a number or a numeric
/// string (`7` or `"7"`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Id handed out when the collection is empty.
    pub const FIRST: ProductId = ProductId(1);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// The id following this one.
    pub fn next(self) -> DomainResult<Self> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| DomainError::invariant("product id space exhausted"))
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ProductId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<ProductId> for u32 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u32>()
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Ok(Self(raw))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProductIdRepr {
    Number(u32),
    Text(String),
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match ProductIdRepr::deserialize(deserializer)? {
            ProductIdRepr::Number(raw) => Ok(Self(raw)),
            ProductIdRepr::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays() {
        let id: ProductId = " 42 ".parse().unwrap();
        assert_eq!(id, ProductId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn rejects_non_numeric() {
        match "abc".parse::<ProductId>() {
            Err(DomainError::InvalidId(msg)) => assert!(msg.starts_with("ProductId")),
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn next_is_successor_and_checks_overflow() {
        assert_eq!(ProductId::new(5).next().unwrap(), ProductId::new(6));
        assert!(matches!(
            ProductId::new(u32::MAX).next(),
            Err(DomainError::InvariantViolation(_))
        ));
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&ProductId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn deserializes_from_number_or_numeric_string() {
        let from_number: ProductId = serde_json::from_str("7").unwrap();
        let from_text: ProductId = serde_json::from_str("\" 7\"").unwrap();
        assert_eq!(from_number, ProductId::new(7));
        assert_eq!(from_text, ProductId::new(7));

        let err = serde_json::from_str::<ProductId>("\"seven\"").unwrap_err();
        assert!(err.to_string().contains("ProductId"));
        assert!(serde_json::from_str::<ProductId>("-1").is_err());
    }
}
