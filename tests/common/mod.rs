//! Shared fixtures for the integration tests

use propstat::RawGroup;

/// Route `tracing` output through the test harness; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Groups whose CTR difference is close to, but not past, the 95% threshold
pub fn campaign_pair() -> (RawGroup, RawGroup) {
    (
        RawGroup::new("12000", "340", "45"),
        RawGroup::new("11800", "370", "52"),
    )
}

/// Identical groups
pub fn equal_pair() -> (RawGroup, RawGroup) {
    (RawGroup::new("1000", "100", "10"), RawGroup::new("1000", "100", "10"))
}

/// 10% vs 13% CTR: significant at 90% and 95%, not at 99%
pub fn borderline_pair() -> (RawGroup, RawGroup) {
    (RawGroup::new("1000", "100", "10"), RawGroup::new("1000", "130", "10"))
}
