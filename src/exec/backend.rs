// src/exec/backend.rs

//! Pluggable command runner abstraction.
//!
//! The packager and test runner talk to a `CommandRunner` instead of spawning
//! processes directly. Production code uses [`RealCommandRunner`]; tests can
//! provide their own implementation that records invocations and returns
//! scripted outcomes without touching the OS.

use std::ffi::OsString;
use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use crate::errors::Result;

use super::command::run_command;

/// Where a child's standard output goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StdoutTarget {
    /// Share the parent's stdout.
    #[default]
    Inherit,
    /// Capture into [`CommandOutput::stdout`].
    Capture,
    /// Truncate/create this file and write stdout into it (shell `>`).
    File(PathBuf),
}

/// A single external command invocation.
///
/// Program and arguments are OS strings so paths reach the child byte for
/// byte, even when they are not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub stdout: StdoutTarget,
}

impl CommandSpec {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdout: StdoutTarget::Inherit,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn capture_stdout(mut self) -> Self {
        self.stdout = StdoutTarget::Capture;
        self
    }

    pub fn stdout_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.stdout = StdoutTarget::File(path.into());
        self
    }

    /// Program name for messages and error values.
    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        if let StdoutTarget::File(path) = &self.stdout {
            write!(f, " > {}", path.display())?;
        }
        Ok(())
    }
}

/// Result of a command that exited successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Captured stdout; empty unless [`StdoutTarget::Capture`] was requested.
    pub stdout: String,
}

impl CommandOutput {
    /// Captured stdout with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.stdout.trim()
    }
}

/// Trait abstracting how external commands are executed.
///
/// Implementations must resolve to `Err(KuError::CommandFailed { .. })` when
/// the command exits non-zero, so callers can rely on `?` for fail-fast.
pub trait CommandRunner: Send + Sync {
    fn run(
        &self,
        spec: CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + '_>>;
}

/// Real command runner used in production; spawns OS processes via
/// `tokio::process` and waits for each one to exit.
#[derive(Debug, Clone, Default)]
pub struct RealCommandRunner;

impl RealCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for RealCommandRunner {
    fn run(
        &self,
        spec: CommandSpec,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + '_>> {
        Box::pin(run_command(spec))
    }
}
