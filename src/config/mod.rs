// src/config/mod.rs

//! Configuration loading and validation for ku-release.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk, falling back to defaults (`loader.rs`).
//! - Validate basic invariants like non-empty tool names (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, resolve};
pub use model::{
    ConfigFile, PackageSection, ProjectSection, RawConfigFile, TestsSection, ToolsSection,
};
