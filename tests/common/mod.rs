#![allow(dead_code)]

pub use ku_release_test_utils::builders;
pub use ku_release_test_utils::fake_runner::FakeCommandRunner;
pub use ku_release_test_utils::{init_tracing, with_timeout};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
