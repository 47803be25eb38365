// src/lib.rs

pub mod cli;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod package;
pub mod testrun;
pub mod types;

use std::path::Path;

use tracing::debug;

use crate::cli::{PackageArgs, RunTestsArgs};
use crate::errors::Result;
use crate::exec::RealCommandRunner;
use crate::fs::RealFileSystem;
use crate::package::Packager;
use crate::testrun::TestRunner;

/// High-level entry point used by the `ku-package` binary.
///
/// This wires together:
/// - config loading
/// - the real filesystem and process runner
/// - the packager (or its dry-run plan)
pub async fn run_package(args: PackageArgs) -> Result<()> {
    let fs = RealFileSystem;
    let cfg = config::resolve(&fs, args.common.config.as_deref())?;
    debug!(?cfg, "resolved configuration");

    let runner = RealCommandRunner::new();
    let packager = Packager::new(&fs, &runner, &cfg);

    if args.common.dry_run {
        let plan = packager.plan().await?;
        package::print_plan(&plan, &cfg);
        return Ok(());
    }

    packager.run().await?;
    Ok(())
}

/// High-level entry point used by the `ku-run-tests` binary.
pub async fn run_tests(args: RunTestsArgs) -> Result<()> {
    let fs = RealFileSystem;
    let cfg = config::resolve(&fs, args.common.config.as_deref())?;
    debug!(?cfg, "resolved configuration");

    let runner = RealCommandRunner::new();
    let test_runner = TestRunner::new(&fs, &runner, &cfg, Path::new("."));

    if args.common.dry_run {
        let plan = test_runner.plan(args.input.as_deref())?;
        testrun::print_plan(&plan);
        return Ok(());
    }

    test_runner.run(args.input.as_deref()).await?;
    Ok(())
}
