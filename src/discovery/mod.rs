// src/discovery/mod.rs

//! Finding test binaries and package directories on disk.
//!
//! - [`predicate`] holds the pure classification rules (executable,
//!   performance benchmark).
//! - [`walk`] applies a rule to a recursive directory walk over a
//!   [`FileSystem`](crate::fs::FileSystem).
//! - [`input_dir`] locates the unpacked `ku-*` package for the test runner.

pub mod input_dir;
pub mod predicate;
pub mod walk;

pub use input_dir::{find_input_dir, package_dir_pattern};
pub use predicate::{is_executable, is_performance_test, is_unit_test};
pub use walk::{collect_files, find_executables, find_unit_tests};
