#![allow(dead_code)]

use std::path::PathBuf;

use ku_release::config::{ConfigFile, RawConfigFile};
use ku_release::fs::mock::MockFileSystem;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn project(mut self, name: &str) -> Self {
        self.config.project.name = name.to_string();
        self
    }

    pub fn bin_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.package.bin_dir = dir.into();
        self
    }

    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.package.out_dir = dir.into();
        self
    }

    pub fn reports_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.tests.reports_dir = dir.into();
        self
    }

    pub fn tool(mut self, tool: &str, program: &str) -> Self {
        let slot = match tool {
            "git" => &mut self.config.tools.git,
            "meson" => &mut self.config.tools.meson,
            "ninja" => &mut self.config.tools.ninja,
            "dot" => &mut self.config.tools.dot,
            other => panic!("unknown tool {other}"),
        };
        *slot = program.to_string();
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for an in-memory file tree.
pub struct TreeBuilder {
    fs: MockFileSystem,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            fs: MockFileSystem::new(),
        }
    }

    /// Executable file (`0o755`) whose content is its own path.
    pub fn executable(self, path: &str) -> Self {
        self.fs.add_executable(path, path.as_bytes().to_vec());
        self
    }

    /// Regular, non-executable file (`0o644`).
    pub fn file(self, path: &str) -> Self {
        self.fs.add_file(path, path.as_bytes().to_vec());
        self
    }

    pub fn file_with_mode(self, path: &str, content: &[u8], mode: u32) -> Self {
        self.fs.add_file_with_mode(path, content.to_vec(), mode);
        self
    }

    pub fn dir(self, path: &str) -> Self {
        self.fs.add_dir(path);
        self
    }

    pub fn build(self) -> MockFileSystem {
        self.fs
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
