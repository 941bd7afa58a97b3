//! Wire form of a comparison request

use propstat_core::{ConfidenceLevel, Error, Result};
use propstat_metrics::{MetricKind, RawGroup, RawValue};
use serde::{Deserialize, Serialize};

/// A comparison request as submitted by the input form
///
/// Counts may be strings or numbers. `metric` and `confidence` are optional;
/// missing values fall back to the engine's configuration.
///
/// ```json
/// {
///   "control": { "impressions": "12000", "clicks": "340", "conversions": "45" },
///   "test":    { "impressions": "11800", "clicks": "370", "conversions": "52" },
///   "metric": "ctr",
///   "confidence": "0.95"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    pub control: RawGroup,
    pub test: RawGroup,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<RawValue>,
}

impl ComparisonRequest {
    pub fn new(control: RawGroup, test: RawGroup) -> Self {
        Self {
            control,
            test,
            metric: None,
            confidence: None,
        }
    }

    pub fn with_metric(mut self, metric: MetricKind) -> Self {
        self.metric = Some(metric.name().to_string());
        self
    }

    pub fn with_confidence(mut self, confidence: ConfidenceLevel) -> Self {
        self.confidence = Some(RawValue::Text(confidence.as_str().to_string()));
        self
    }

    /// Parse a request from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::InvalidParameter(format!("Malformed comparison request: {e}")))
    }

    /// The requested metric, or `fallback` when none was given
    pub fn metric_or(&self, fallback: MetricKind) -> Result<MetricKind> {
        match &self.metric {
            Some(name) => name.parse(),
            None => Ok(fallback),
        }
    }

    /// The requested confidence level, or `fallback` when none was given
    pub fn confidence_or(&self, fallback: ConfidenceLevel) -> Result<ConfidenceLevel> {
        match &self.confidence {
            Some(RawValue::Text(text)) => text.parse(),
            Some(RawValue::Number(level)) => ConfidenceLevel::from_value(*level),
            None => Ok(fallback),
        }
    }
}
