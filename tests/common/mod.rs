//! Common test utilities

use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber writing through the test harness.
/// Safe to call from every test; only the first call installs it.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "cash_account=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// A fixed business date in October 2026
#[allow(dead_code)]
pub fn october(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, day).expect("valid October date")
}
