//! Common types for significance testing

use propstat_core::ConfidenceLevel;
use serde::Serialize;
use std::fmt;

/// Outcome of a two-sample test statistic computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestStatistic {
    /// Standard error of the difference under the null hypothesis
    pub standard_error: f64,
    /// Standardized difference, test minus control
    pub z_score: f64,
    /// Two-tailed p-value in [0, 1]
    pub p_value: f64,
}

impl TestStatistic {
    /// Whether the p-value falls below the level's alpha
    pub fn is_significant(&self, confidence: ConfidenceLevel) -> bool {
        self.p_value < confidence.alpha()
    }
}

impl fmt::Display for TestStatistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SE = {:.6}, z = {:.4}, p = {:.4}",
            self.standard_error, self.z_score, self.p_value
        )
    }
}

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate (center of interval)
    pub estimate: f64,
    /// Confidence level the interval was built at
    pub confidence_level: ConfidenceLevel,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: ConfidenceLevel) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} CI: [{:.6}, {:.6}], estimate: {:.6}",
            self.confidence_level, self.lower, self.upper, self.estimate
        )
    }
}
