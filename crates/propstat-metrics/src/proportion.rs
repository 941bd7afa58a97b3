//! Proportions derived from a numerator/denominator pair

use propstat_core::{Error, Result};
use serde::Serialize;

/// Observed success rate of one group
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Proportion {
    value: f64,
    sample_size: u64,
}

impl Proportion {
    /// Compute `numerator / denominator`
    ///
    /// Fails with `ZeroDenominator` when `denominator == 0` and with
    /// `InvalidParameter` when `numerator > denominator`.
    pub fn from_counts(numerator: u64, denominator: u64) -> Result<Self> {
        if denominator == 0 {
            return Err(Error::zero_denominator());
        }
        if numerator > denominator {
            return Err(Error::InvalidParameter(format!(
                "numerator {numerator} exceeds denominator {denominator}"
            )));
        }

        Ok(Self {
            value: numerator as f64 / denominator as f64,
            sample_size: denominator,
        })
    }

    /// The proportion in [0, 1]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Number of trials
    pub fn sample_size(&self) -> u64 {
        self.sample_size
    }

    /// Number of successes recovered as `value * sample_size`
    pub fn successes(&self) -> f64 {
        self.value * self.sample_size as f64
    }

    /// Binomial sampling variance `p (1 - p) / n`
    pub fn variance(&self) -> f64 {
        self.value * (1.0 - self.value) / self.sample_size as f64
    }
}

/// Compute the proportion `numerator / denominator`
pub fn compute(numerator: u64, denominator: u64) -> Result<Proportion> {
    Proportion::from_counts(numerator, denominator)
}
