//! Property-based tests for comparison invariants

use proptest::prelude::*;
use propstat::{evaluate, ConfidenceLevel, GroupSample, MetricKind, RawGroup};

/// A sample where every metric has a non-zero denominator
fn sample() -> impl Strategy<Value = GroupSample> {
    (1u64..200_000)
        .prop_flat_map(|impressions| (Just(impressions), 1..=impressions))
        .prop_flat_map(|(impressions, clicks)| (Just(impressions), Just(clicks), 0..=clicks))
        .prop_map(|(impressions, clicks, conversions)| GroupSample::new(impressions, clicks, conversions))
}

fn metric() -> impl Strategy<Value = MetricKind> {
    prop::sample::select(MetricKind::ALL.to_vec())
}

fn confidence() -> impl Strategy<Value = ConfidenceLevel> {
    prop::sample::select(ConfidenceLevel::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_valid_samples_always_evaluate(
        control in sample(),
        test in sample(),
        metric in metric(),
        confidence in confidence(),
    ) {
        let result = evaluate(&control.into(), &test.into(), metric, confidence).unwrap();

        prop_assert!((0.0..=1.0).contains(&result.proportion_control));
        prop_assert!((0.0..=1.0).contains(&result.proportion_test));
        prop_assert!((0.0..=1.0).contains(&result.p_value));
        prop_assert!(result.standard_error >= 0.0);
        prop_assert_eq!(result.significant, result.p_value < confidence.alpha());
    }

    #[test]
    fn prop_swapping_groups_mirrors_result(
        control in sample(),
        test in sample(),
        metric in metric(),
    ) {
        let (a, b): (RawGroup, RawGroup) = (control.into(), test.into());
        let forward = evaluate(&a, &b, metric, ConfidenceLevel::NinetyFive).unwrap();
        let backward = evaluate(&b, &a, metric, ConfidenceLevel::NinetyFive).unwrap();

        prop_assert_eq!(forward.difference, -backward.difference);
        prop_assert_eq!(forward.z_score, -backward.z_score);
        prop_assert!((forward.p_value - backward.p_value).abs() < 1e-12);
        prop_assert_eq!(forward.significant, backward.significant);
    }

    #[test]
    fn prop_identical_groups_not_significant(
        group in sample(),
        metric in metric(),
        confidence in confidence(),
    ) {
        let raw: RawGroup = group.into();
        let result = evaluate(&raw, &raw, metric, confidence).unwrap();

        prop_assert_eq!(result.difference, 0.0);
        prop_assert!((result.p_value - 1.0).abs() < 1e-12);
        prop_assert!(!result.significant);
    }

    #[test]
    fn prop_higher_confidence_never_easier(
        control in sample(),
        test in sample(),
        metric in metric(),
    ) {
        let (a, b): (RawGroup, RawGroup) = (control.into(), test.into());
        let verdicts: Vec<bool> = ConfidenceLevel::ALL
            .into_iter()
            .map(|level| evaluate(&a, &b, metric, level).unwrap().significant)
            .collect();

        // Ninety, NinetyFive, NinetyNine
        prop_assert!(!verdicts[2] || verdicts[1]);
        prop_assert!(!verdicts[1] || verdicts[0]);
    }

    #[test]
    fn prop_evaluation_is_deterministic(
        control in sample(),
        test in sample(),
        metric in metric(),
        confidence in confidence(),
    ) {
        let (a, b): (RawGroup, RawGroup) = (control.into(), test.into());
        let first = evaluate(&a, &b, metric, confidence).unwrap();
        let second = evaluate(&a, &b, metric, confidence).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_text_and_numeric_input_agree(
        control in sample(),
        test in sample(),
        metric in metric(),
    ) {
        let text = |s: GroupSample| RawGroup::new(
            s.impressions.to_string(),
            s.clicks.to_string(),
            s.conversions.to_string(),
        );
        let from_text = evaluate(&text(control), &text(test), metric, ConfidenceLevel::Ninety).unwrap();
        let from_numbers = evaluate(&control.into(), &test.into(), metric, ConfidenceLevel::Ninety).unwrap();
        prop_assert_eq!(from_text, from_numbers);
    }
}
