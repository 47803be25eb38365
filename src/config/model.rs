// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration as read from `KuRelease.toml`.
///
/// ```toml
/// [project]
/// name = "ku"
///
/// [tools]
/// git = "git"
/// meson = "meson"
/// ninja = "ninja"
/// dot = "dot"
///
/// [package]
/// bin_dir = "bin/Release"
/// out_dir = "out"
/// test_subdir = "test"
///
/// [tests]
/// reports_dir = "reports"
/// ```
///
/// All sections are optional; an absent file behaves like an empty one.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub project: ProjectSection,

    #[serde(default)]
    pub tools: ToolsSection,

    #[serde(default)]
    pub package: PackageSection,

    #[serde(default)]
    pub tests: TestsSection,
}

/// Validated configuration. Only constructible through `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub project: ProjectSection,
    pub tools: ToolsSection,
    pub package: PackageSection,
    pub tests: TestsSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(raw: RawConfigFile) -> Self {
        Self {
            project: raw.project,
            tools: raw.tools,
            package: raw.package,
            tests: raw.tests,
        }
    }

    /// `<out_dir>/tests`, parent of the versioned package directory.
    pub fn tests_out_dir(&self) -> PathBuf {
        self.package.out_dir.join("tests")
    }

    /// `<out_dir>/dependency-graph`.
    pub fn graph_out_dir(&self) -> PathBuf {
        self.package.out_dir.join("dependency-graph")
    }

    /// `<bin_dir>/<test_subdir>`, where the build drops its test executables.
    pub fn test_root(&self) -> PathBuf {
        self.package.bin_dir.join(&self.package.test_subdir)
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(RawConfigFile::default())
    }
}

/// `[project]` section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    /// Prefix of package directories and graph file names.
    #[serde(default = "default_project_name")]
    pub name: String,
}

fn default_project_name() -> String {
    "ku".to_string()
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            name: default_project_name(),
        }
    }
}

/// `[tools]` section: executable names or paths of the external tools.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ToolsSection {
    #[serde(default = "default_git")]
    pub git: String,
    #[serde(default = "default_meson")]
    pub meson: String,
    #[serde(default = "default_ninja")]
    pub ninja: String,
    #[serde(default = "default_dot")]
    pub dot: String,
}

fn default_git() -> String {
    "git".to_string()
}

fn default_meson() -> String {
    "meson".to_string()
}

fn default_ninja() -> String {
    "ninja".to_string()
}

fn default_dot() -> String {
    "dot".to_string()
}

impl Default for ToolsSection {
    fn default() -> Self {
        Self {
            git: default_git(),
            meson: default_meson(),
            ninja: default_ninja(),
            dot: default_dot(),
        }
    }
}

/// `[package]` section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PackageSection {
    /// Build output directory (meson build dir).
    #[serde(default = "default_bin_dir")]
    pub bin_dir: PathBuf,

    /// Destination root for the package and the dependency graph.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Subdirectory of `bin_dir` holding the test executables.
    #[serde(default = "default_test_subdir")]
    pub test_subdir: PathBuf,
}

fn default_bin_dir() -> PathBuf {
    PathBuf::from("bin/Release")
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("out")
}

fn default_test_subdir() -> PathBuf {
    PathBuf::from("test")
}

impl Default for PackageSection {
    fn default() -> Self {
        Self {
            bin_dir: default_bin_dir(),
            out_dir: default_out_dir(),
            test_subdir: default_test_subdir(),
        }
    }
}

/// `[tests]` section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TestsSection {
    /// Where JUnit reports are written, relative to the working directory.
    #[serde(default = "default_reports_dir")]
    pub reports_dir: PathBuf,
}

fn default_reports_dir() -> PathBuf {
    PathBuf::from("reports")
}

impl Default for TestsSection {
    fn default() -> Self {
        Self {
            reports_dir: default_reports_dir(),
        }
    }
}
