// src/exec/mod.rs

//! Process execution layer.
//!
//! Every external tool (git, meson, ninja, dot, the test binaries) is run
//! through here, one process at a time.
//!
//! - [`backend`] provides the `CommandRunner` trait, the `CommandSpec`
//!   description of an invocation and the `RealCommandRunner` used in
//!   production, which tests replace with a fake.
//! - [`command`] spawns and awaits a single `tokio::process::Command`.

pub mod backend;
pub mod command;

pub use backend::{CommandOutput, CommandRunner, CommandSpec, RealCommandRunner, StdoutTarget};
pub use command::run_command;
