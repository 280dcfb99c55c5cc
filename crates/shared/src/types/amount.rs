//! Integer amount type for funds in the smallest currency unit.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are 128-bit unsigned integers in wei-scale smallest units
//! (e.g. 0.01 units = 10_000_000_000_000_000). All arithmetic is checked;
//! overflow fails closed instead of wrapping.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A non-negative amount in the smallest currency unit.
///
/// Serialized as a decimal string: JSON numbers cannot carry 128-bit values
/// without precision loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u128);

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from a raw smallest-unit value.
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw smallest-unit value.
    #[must_use]
    pub const fn get(self) -> u128 {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Amount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
