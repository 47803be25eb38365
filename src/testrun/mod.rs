// src/testrun/mod.rs

//! The test runner: executes every unit-test binary of an unpacked package
//! and collects one JUnit report per binary.
//!
//! Tests run one after another in walk order. The first failing test stops
//! the run; binaries after it are never started.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use tracing::{debug, info};

use crate::config::ConfigFile;
use crate::discovery::{find_input_dir, find_unit_tests, package_dir_pattern};
use crate::errors::Result;
use crate::exec::{CommandRunner, CommandSpec};
use crate::fs::FileSystem;

/// Mode forced onto every test binary before it is started.
pub const TEST_BINARY_MODE: u32 = 0o755;

/// One test binary and where its report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTest {
    pub executable: PathBuf,
    pub report: PathBuf,
}

impl PlannedTest {
    /// `<exe> --success=true --reporters=junit --out=<report>`
    pub fn command(&self) -> CommandSpec {
        let mut out = OsString::from("--out=");
        out.push(&self.report);
        CommandSpec::new(&self.executable)
            .arg("--success=true")
            .arg("--reporters=junit")
            .arg(out)
    }
}

/// Report file for a test binary: `<reports_dir>/<name>_report.xml`.
pub fn report_path(reports_dir: &Path, executable: &Path) -> Result<PathBuf> {
    let name = executable
        .file_name()
        .ok_or_else(|| anyhow!("test path has no file name: {:?}", executable))?;
    let mut report = name.to_os_string();
    report.push("_report.xml");
    Ok(reports_dir.join(report))
}

/// Wires config, filesystem and command runner together for one run.
pub struct TestRunner<'a> {
    fs: &'a dyn FileSystem,
    runner: &'a dyn CommandRunner,
    config: &'a ConfigFile,
    workdir: PathBuf,
}

impl<'a> TestRunner<'a> {
    /// `workdir` is where `ku-*` is looked up and `reports/` is created;
    /// the binaries use `.` in production.
    pub fn new(
        fs: &'a dyn FileSystem,
        runner: &'a dyn CommandRunner,
        config: &'a ConfigFile,
        workdir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            runner,
            config,
            workdir: workdir.into(),
        }
    }

    fn in_workdir(&self, path: &Path) -> PathBuf {
        if self.workdir == Path::new(".") || path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workdir.join(path)
        }
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.in_workdir(&self.config.tests.reports_dir)
    }

    /// The package directory to test: `explicit` if given, otherwise the
    /// single `<project>-*` directory in the working directory.
    pub fn input_dir(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(dir) => Ok(self.fs.canonicalize(&self.in_workdir(dir))?),
            None => find_input_dir(
                self.fs,
                &self.workdir,
                &package_dir_pattern(&self.config.project.name),
            ),
        }
    }

    /// Discover the unit tests to run and their report paths.
    pub fn plan(&self, explicit_input: Option<&Path>) -> Result<Vec<PlannedTest>> {
        let input = self.input_dir(explicit_input)?;
        info!(input = %input.display(), "using input directory");

        let reports_dir = self.reports_dir();
        let tests = find_unit_tests(self.fs, &input)?;
        tests
            .into_iter()
            .map(|executable| {
                let report = report_path(&reports_dir, &executable)?;
                Ok(PlannedTest { executable, report })
            })
            .collect()
    }

    /// Create the reports directory if it is missing.
    pub fn prepare_reports_dir(&self) -> Result<PathBuf> {
        let dir = self.reports_dir();
        self.fs.create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "reports directory ready");
        Ok(dir)
    }

    /// Force the test's mode and run it, failing on a non-zero exit.
    pub async fn run_test(&self, test: &PlannedTest) -> Result<()> {
        self.fs.set_mode(&test.executable, TEST_BINARY_MODE)?;

        println!(
            "Running {} and outputting to {}",
            test.executable.display(),
            test.report.display()
        );
        self.runner.run(test.command()).await?;
        Ok(())
    }

    /// Discover, prepare and run everything. Returns the tests that passed,
    /// which on success is every planned test.
    pub async fn run(&self, explicit_input: Option<&Path>) -> Result<Vec<PlannedTest>> {
        self.prepare_reports_dir()?;
        let planned = self.plan(explicit_input)?;

        for test in &planned {
            self.run_test(test).await?;
        }

        info!(passed = planned.len(), "all unit tests passed");
        Ok(planned)
    }
}

/// Dry-run output: list the tests and report paths.
pub fn print_plan(planned: &[PlannedTest]) {
    println!("ku-run-tests dry-run");
    println!("tests ({}):", planned.len());
    for test in planned {
        println!("  - {}", test.executable.display());
        println!("      report: {}", test.report.display());
    }
}
