// src/cli.rs

//! CLI argument parsing using `clap`, one `Parser` per binary.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

/// Flags shared by both tools.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `KuRelease.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `KU_RELEASE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print the plan, but don't copy, render or run anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Command-line arguments for `ku-package`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ku-package",
    version,
    about = "Copy built test executables into a versioned package and render the build graph.",
    long_about = None
)]
pub struct PackageArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Command-line arguments for `ku-run-tests`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ku-run-tests",
    version,
    about = "Run every unit-test executable of an unpacked package and collect JUnit reports.",
    long_about = None
)]
pub struct RunTestsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Package directory to test instead of discovering the single `ku-*`
    /// directory in the working directory.
    #[arg(long, value_name = "DIR")]
    pub input: Option<PathBuf>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
