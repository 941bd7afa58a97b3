//! Raw and validated per-group counts

use propstat_core::CountField;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated impression, click and conversion counts for one group
///
/// Only produced by the validation functions in this crate (or constructed
/// directly and then passed through [`crate::validate_sample`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupSample {
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
}

impl GroupSample {
    pub fn new(impressions: u64, clicks: u64, conversions: u64) -> Self {
        Self {
            impressions,
            clicks,
            conversions,
        }
    }

    /// Read a single counter
    pub fn get(&self, field: CountField) -> u64 {
        match field {
            CountField::Impressions => self.impressions,
            CountField::Clicks => self.clicks,
            CountField::Conversions => self.conversions,
        }
    }
}

/// A single unvalidated input value, as typed into the form or sent over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u64> for RawValue {
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Unvalidated counts for one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGroup {
    pub impressions: RawValue,
    pub clicks: RawValue,
    pub conversions: RawValue,
}

impl RawGroup {
    pub fn new(
        impressions: impl Into<RawValue>,
        clicks: impl Into<RawValue>,
        conversions: impl Into<RawValue>,
    ) -> Self {
        Self {
            impressions: impressions.into(),
            clicks: clicks.into(),
            conversions: conversions.into(),
        }
    }

    pub fn get(&self, field: CountField) -> &RawValue {
        match field {
            CountField::Impressions => &self.impressions,
            CountField::Clicks => &self.clicks,
            CountField::Conversions => &self.conversions,
        }
    }
}

impl From<GroupSample> for RawGroup {
    fn from(sample: GroupSample) -> Self {
        Self::new(sample.impressions, sample.clicks, sample.conversions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_accessors() {
        let sample = GroupSample::new(12000, 340, 45);
        assert_eq!(sample.get(CountField::Impressions), 12000);
        assert_eq!(sample.get(CountField::Clicks), 340);
        assert_eq!(sample.get(CountField::Conversions), 45);
    }

    #[test]
    fn test_raw_group_from_sample() {
        let raw = RawGroup::from(GroupSample::new(10, 5, 1));
        assert_eq!(raw.get(CountField::Impressions), &RawValue::Number(10.0));
        assert_eq!(raw.get(CountField::Conversions), &RawValue::Number(1.0));
    }

    #[test]
    fn test_raw_value_deserializes_text_and_numbers() {
        let raw: RawGroup = serde_json::from_str(
            r#"{"impressions": "12000", "clicks": 340, "conversions": 4.5}"#,
        )
        .unwrap();
        assert_eq!(raw.impressions, RawValue::Text("12000".to_string()));
        assert_eq!(raw.clicks, RawValue::Number(340.0));
        assert_eq!(raw.conversions, RawValue::Number(4.5));
    }

    #[test]
    fn test_raw_value_display() {
        assert_eq!(RawValue::from("12k").to_string(), "12k");
        assert_eq!(RawValue::from(2.5).to_string(), "2.5");
        assert_eq!(RawValue::from(7_u32).to_string(), "7");
    }
}
