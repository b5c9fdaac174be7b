#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::ModelError;

/// Registry unit number, stable across all snapshots (e.g. `SEE927528071629`).
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct EntityKey(String);

impl EntityKey {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyEntityKey);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One observation period: a calendar month, rendered as `YYYY-MM`.
///
/// Periods order chronologically, which is what the aggregator relies on to
/// reject out-of-order input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period(NaiveDate);

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self, ModelError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(|| ModelError::InvalidPeriod {
                value: format!("{year:04}-{month:02}"),
            })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

impl FromStr for Period {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ModelError::InvalidPeriod {
            value: s.to_string(),
        };
        let (year, month) = trimmed.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.0.year(), self.0.month())
    }
}

impl serde::Serialize for Period {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Period {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_parses_and_displays() {
        let period: Period = "2021-10".parse().unwrap();
        assert_eq!(period.year(), 2021);
        assert_eq!(period.month(), 10);
        assert_eq!(period.to_string(), "2021-10");
    }

    #[test]
    fn period_rejects_malformed_values() {
        for raw in ["2021", "2021-13", "21-10", "2021-1", "2021-10-05", ""] {
            assert!(raw.parse::<Period>().is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn periods_order_chronologically() {
        let dec: Period = "2020-12".parse().unwrap();
        let jan: Period = "2021-01".parse().unwrap();
        assert!(dec < jan);
    }

    #[test]
    fn entity_key_is_trimmed() {
        let key = EntityKey::new("  SEE927528071629 ").unwrap();
        assert_eq!(key.as_str(), "SEE927528071629");
        assert_eq!(EntityKey::new("   "), Err(ModelError::EmptyEntityKey));
    }
}
