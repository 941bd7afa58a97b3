//! Engine configuration

use crate::engine::ComparisonEngine;
use propstat_core::ConfidenceLevel;
use propstat_metrics::MetricKind;
use propstat_significance::{SignificanceTest, TwoProportionZTest};
use serde::{Deserialize, Serialize};

/// Defaults applied when a request leaves a setting out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Metric used when a request does not name one
    pub default_metric: MetricKind,
    /// Confidence level used when a request does not name one
    pub default_confidence: ConfidenceLevel,
}

/// Builder for [`ComparisonEngine`]
#[derive(Debug, Clone)]
pub struct EngineBuilder<T = TwoProportionZTest> {
    config: EngineConfig,
    tester: T,
}

impl EngineBuilder<TwoProportionZTest> {
    /// Create a builder with the pooled Z-test and default settings
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            tester: TwoProportionZTest::new(),
        }
    }
}

impl Default for EngineBuilder<TwoProportionZTest> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SignificanceTest> EngineBuilder<T> {
    /// Set the metric used when a request omits it
    pub fn default_metric(mut self, metric: MetricKind) -> Self {
        self.config.default_metric = metric;
        self
    }

    /// Set the confidence level used when a request omits it
    pub fn default_confidence(mut self, confidence: ConfidenceLevel) -> Self {
        self.config.default_confidence = confidence;
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a different significance test
    pub fn with_test<U: SignificanceTest>(self, tester: U) -> EngineBuilder<U> {
        EngineBuilder {
            config: self.config,
            tester,
        }
    }

    pub fn build(self) -> ComparisonEngine<T> {
        ComparisonEngine::from_parts(self.config, self.tester)
    }
}
