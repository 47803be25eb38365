//! Shared helpers for the `ku-release` integration tests: a scripted
//! command runner, config and tree builders, and tracing/timeout glue.

pub mod builders;
pub mod fake_runner;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

/// How long a single async test may run before it is failed.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness.
///
/// Output is captured per test and only shown for failures (or with
/// `--nocapture`). `RUST_LOG` overrides the default `info` filter, e.g.
/// `RUST_LOG=ku_release=debug`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt().with_env_filter(filter).with_test_writer().init();
    });
}

/// Await `f`, panicking if it takes longer than [`TEST_TIMEOUT`]. Guards
/// against a fake runner or real child process that never finishes.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    match tokio::time::timeout(TEST_TIMEOUT, f).await {
        Ok(value) => value,
        Err(_) => panic!("test did not finish within {TEST_TIMEOUT:?}"),
    }
}
