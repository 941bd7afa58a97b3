//! Orchestration of a single control-vs-test comparison

use crate::config::{EngineBuilder, EngineConfig};
use crate::request::ComparisonRequest;
use propstat_core::{ConfidenceLevel, Group, Result};
use propstat_metrics::{
    validate_pair, validate_sample, GroupSample, MetricKind, Proportion, RawGroup,
};
use propstat_significance::{
    difference_interval, relative_lift, ConfidenceInterval, SignificanceTest, TwoProportionZTest,
};
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};

/// Outcome of comparing the test group against the control group
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub proportion_control: f64,
    pub proportion_test: f64,
    /// `proportion_test - proportion_control`
    pub difference: f64,
    pub standard_error: f64,
    pub z_score: f64,
    pub p_value: f64,
    /// `p_value < alpha` for the requested confidence level
    pub significant: bool,
    pub metric: MetricKind,
    pub confidence: ConfidenceLevel,
    /// `difference / proportion_control`, absent when the control rate is zero
    pub relative_lift: Option<f64>,
    pub difference_interval: ConfidenceInterval,
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: control {:.4}%, test {:.4}%, difference {:+.4} pp; z = {:.4}, p = {:.4}; {} at {}",
            self.metric.label(),
            self.proportion_control * 100.0,
            self.proportion_test * 100.0,
            self.difference * 100.0,
            self.z_score,
            self.p_value,
            if self.significant { "significant" } else { "not significant" },
            self.confidence,
        )
    }
}

/// Compares a control and a test group on one metric
///
/// The engine holds only immutable configuration; every call re-validates
/// its inputs from scratch and returns either a complete result or the first
/// validation error.
#[derive(Debug, Clone, Default)]
pub struct ComparisonEngine<T = TwoProportionZTest> {
    config: EngineConfig,
    tester: T,
}

impl ComparisonEngine<TwoProportionZTest> {
    /// Engine with the pooled Z-test and default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EngineBuilder<TwoProportionZTest> {
        EngineBuilder::new()
    }
}

impl<T: SignificanceTest> ComparisonEngine<T> {
    pub(crate) fn from_parts(config: EngineConfig, tester: T) -> Self {
        Self { config, tester }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compare raw form input
    #[instrument(level = "debug", skip(self, control, test), fields(metric = %metric, confidence = %confidence))]
    pub fn evaluate(
        &self,
        control: &RawGroup,
        test: &RawGroup,
        metric: MetricKind,
        confidence: ConfidenceLevel,
    ) -> Result<ComparisonResult> {
        let (control, test) = validate_pair(control, test, metric).map_err(|err| {
            debug!(error = %err, "Comparison rejected");
            err
        })?;
        self.compare(control, test, metric, confidence)
    }

    /// Compare already-integral counts
    #[instrument(level = "debug", skip(self), fields(metric = %metric, confidence = %confidence))]
    pub fn evaluate_counts(
        &self,
        control: GroupSample,
        test: GroupSample,
        metric: MetricKind,
        confidence: ConfidenceLevel,
    ) -> Result<ComparisonResult> {
        let validated = validate_sample(Group::Control, control, metric)
            .and_then(|control| validate_sample(Group::Test, test, metric).map(|test| (control, test)));
        let (control, test) = validated.map_err(|err| {
            debug!(error = %err, "Comparison rejected");
            err
        })?;
        self.compare(control, test, metric, confidence)
    }

    /// Compare a wire request, filling in missing settings from the configuration
    pub fn evaluate_request(&self, request: &ComparisonRequest) -> Result<ComparisonResult> {
        let metric = request.metric_or(self.config.default_metric)?;
        let confidence = request.confidence_or(self.config.default_confidence)?;
        self.evaluate(&request.control, &request.test, metric, confidence)
    }

    fn compare(
        &self,
        control: GroupSample,
        test: GroupSample,
        metric: MetricKind,
        confidence: ConfidenceLevel,
    ) -> Result<ComparisonResult> {
        let (numerator, denominator) = metric.resolve(&control);
        let control = Proportion::from_counts(numerator, denominator)?;
        let (numerator, denominator) = metric.resolve(&test);
        let test = Proportion::from_counts(numerator, denominator)?;

        let statistic = self.tester.test(&control, &test);
        let significant = statistic.is_significant(confidence);

        debug!(
            test = self.tester.name(),
            p_control = control.value(),
            p_test = test.value(),
            z = statistic.z_score,
            p = statistic.p_value,
            significant,
            "Comparison complete"
        );

        Ok(ComparisonResult {
            proportion_control: control.value(),
            proportion_test: test.value(),
            difference: test.value() - control.value(),
            standard_error: statistic.standard_error,
            z_score: statistic.z_score,
            p_value: statistic.p_value,
            significant,
            metric,
            confidence,
            relative_lift: relative_lift(&control, &test),
            difference_interval: difference_interval(&control, &test, confidence),
        })
    }
}

/// Compare two groups with the default engine
pub fn evaluate(
    control: &RawGroup,
    test: &RawGroup,
    metric: MetricKind,
    confidence: ConfidenceLevel,
) -> Result<ComparisonResult> {
    ComparisonEngine::new().evaluate(control, test, metric, confidence)
}
