//! Shared value types for two-group comparisons
//!
//! These identify where a count came from (group and field) and which
//! confidence level a comparison is judged at. They are small `Copy` values
//! so errors and results can carry them without allocation.

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Which side of the experiment a sample belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    /// The baseline campaign
    Control,
    /// The variant under evaluation
    Test,
}

impl Group {
    /// Field-name prefix used by the input form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Control => "control",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three raw counters collected per group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountField {
    Impressions,
    Clicks,
    Conversions,
}

impl CountField {
    /// All fields in input order
    pub const ALL: [CountField; 3] = [Self::Impressions, Self::Clicks, Self::Conversions];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Impressions => "impressions",
            Self::Clicks => "clicks",
            Self::Conversions => "conversions",
        }
    }
}

impl fmt::Display for CountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of a single input field, e.g. `control.clicks`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldRef {
    pub group: Group,
    pub field: CountField,
}

impl FieldRef {
    pub fn new(group: Group, field: CountField) -> Self {
        Self { group, field }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.field)
    }
}

impl Serialize for FieldRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Confidence level at which a difference is declared significant
///
/// Only the three levels offered to users are representable. Each maps to a
/// two-tailed significance threshold `alpha = 1 - confidence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConfidenceLevel {
    /// 90% confidence, alpha = 0.10
    Ninety,
    /// 95% confidence, alpha = 0.05
    #[default]
    NinetyFive,
    /// 99% confidence, alpha = 0.01
    NinetyNine,
}

impl ConfidenceLevel {
    /// All supported levels, weakest first
    pub const ALL: [ConfidenceLevel; 3] = [Self::Ninety, Self::NinetyFive, Self::NinetyNine];

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        match self {
            Self::Ninety => 0.90,
            Self::NinetyFive => 0.95,
            Self::NinetyNine => 0.99,
        }
    }

    /// Get the alpha level (1 - confidence level)
    ///
    /// Exact literals: `1.0 - value()` does not round to these.
    pub fn alpha(&self) -> f64 {
        match self {
            Self::Ninety => 0.10,
            Self::NinetyFive => 0.05,
            Self::NinetyNine => 0.01,
        }
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Wire representation used by the input form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ninety => "0.90",
            Self::NinetyFive => "0.95",
            Self::NinetyNine => "0.99",
        }
    }

    /// Map a numeric level (fraction or percentage) onto a supported level
    pub fn from_value(level: f64) -> Result<Self> {
        let fraction = if level > 1.0 { level / 100.0 } else { level };
        Self::ALL
            .into_iter()
            .find(|candidate| (candidate.value() - fraction).abs() < 1e-9)
            .ok_or_else(|| Error::unsupported_confidence(&level.to_string()))
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.value() * 100.0)
    }
}

impl FromStr for ConfidenceLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (digits, percent) = match trimmed.strip_suffix('%') {
            Some(rest) => (rest.trim_end(), true),
            None => (trimmed, false),
        };
        let level: f64 = digits
            .parse()
            .map_err(|_| Error::unsupported_confidence(s))?;
        if !level.is_finite() {
            return Err(Error::unsupported_confidence(s));
        }
        let level = if percent { level / 100.0 } else { level };
        Self::from_value(level).map_err(|_| Error::unsupported_confidence(s))
    }
}

impl Serialize for ConfidenceLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ConfidenceLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(f64),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(text) => text.parse().map_err(serde::de::Error::custom),
            Repr::Number(level) => Self::from_value(level).map_err(serde::de::Error::custom),
        }
    }
}
