// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;
use crate::fs::FileSystem;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let contents = fs.read_to_string(path.as_ref())?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
pub fn load_and_validate(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(fs, &path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Resolve the configuration for a tool invocation.
///
/// - An explicit `--config` path must exist and be valid.
/// - Otherwise [`default_config_path`] is used if present, and built-in
///   defaults if not.
pub fn resolve(fs: &dyn FileSystem, explicit: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading explicit config");
        return load_and_validate(fs, path);
    }

    let default_path = default_config_path();
    if fs.is_file(&default_path) {
        debug!(path = %default_path.display(), "loading default config");
        load_and_validate(fs, &default_path)
    } else {
        debug!("no config file found; using built-in defaults");
        Ok(ConfigFile::default())
    }
}

/// `KuRelease.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("KuRelease.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::KuError;
    use crate::fs::mock::MockFileSystem;

    #[test]
    fn default_file_in_working_directory_is_picked_up() {
        let fs = MockFileSystem::new();
        fs.add_file("KuRelease.toml", "[project]\nname = \"sudoku\"\n");

        let cfg = resolve(&fs, None).unwrap();
        assert_eq!(cfg.project.name, "sudoku");
    }

    #[test]
    fn no_file_means_built_in_defaults() {
        let fs = MockFileSystem::new();
        assert_eq!(resolve(&fs, None).unwrap(), ConfigFile::default());
    }

    #[test]
    fn explicit_path_is_read_through_the_filesystem() {
        let fs = MockFileSystem::new();
        fs.add_file("ci/release.toml", "[tests]\nreports_dir = \"junit\"\n");

        let cfg = resolve(&fs, Some(Path::new("ci/release.toml"))).unwrap();
        assert_eq!(cfg.tests.reports_dir, PathBuf::from("junit"));

        let err = resolve(&fs, Some(Path::new("ci/missing.toml"))).unwrap_err();
        assert!(matches!(err, KuError::Other(_)));
    }
}
