// src/config/validate.rs

use std::path::Path;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{KuError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::KuError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_project(cfg)?;
    validate_tools(cfg)?;
    validate_paths(cfg)?;
    Ok(())
}

fn validate_project(cfg: &RawConfigFile) -> Result<()> {
    let name = cfg.project.name.trim();
    if name.is_empty() {
        return Err(KuError::ConfigError(
            "[project].name must not be empty".to_string(),
        ));
    }
    if name.contains(['/', '\\']) {
        return Err(KuError::ConfigError(format!(
            "[project].name must be a plain name, got '{}'",
            cfg.project.name
        )));
    }
    Ok(())
}

fn validate_tools(cfg: &RawConfigFile) -> Result<()> {
    let tools = [
        ("git", &cfg.tools.git),
        ("meson", &cfg.tools.meson),
        ("ninja", &cfg.tools.ninja),
        ("dot", &cfg.tools.dot),
    ];
    for (key, value) in tools {
        if value.trim().is_empty() {
            return Err(KuError::ConfigError(format!(
                "[tools].{key} must not be empty"
            )));
        }
    }
    Ok(())
}

fn validate_paths(cfg: &RawConfigFile) -> Result<()> {
    let paths: [(&str, &Path); 4] = [
        ("[package].bin_dir", &cfg.package.bin_dir),
        ("[package].out_dir", &cfg.package.out_dir),
        ("[package].test_subdir", &cfg.package.test_subdir),
        ("[tests].reports_dir", &cfg.tests.reports_dir),
    ];
    for (key, value) in paths {
        if value.as_os_str().is_empty() {
            return Err(KuError::ConfigError(format!("{key} must not be empty")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn defaults_are_valid() {
        let cfg = ConfigFile::try_from(RawConfigFile::default()).unwrap();
        assert_eq!(cfg.project.name, "ku");
        assert_eq!(cfg.test_root(), PathBuf::from("bin/Release/test"));
        assert_eq!(cfg.tests_out_dir(), PathBuf::from("out/tests"));
        assert_eq!(cfg.graph_out_dir(), PathBuf::from("out/dependency-graph"));
    }

    #[test]
    fn project_name_with_separator_is_rejected() {
        let mut raw = RawConfigFile::default();
        raw.project.name = "../ku".into();
        let err = ConfigFile::try_from(raw).unwrap_err();
        assert!(matches!(err, KuError::ConfigError(msg) if msg.contains("plain name")));
    }

    #[test]
    fn blank_tool_is_rejected() {
        let mut raw = RawConfigFile::default();
        raw.tools.dot = "  ".into();
        let err = ConfigFile::try_from(raw).unwrap_err();
        assert!(matches!(err, KuError::ConfigError(msg) if msg.contains("[tools].dot")));
    }

    #[test]
    fn empty_reports_dir_is_rejected() {
        let mut raw = RawConfigFile::default();
        raw.tests.reports_dir = PathBuf::new();
        assert!(ConfigFile::try_from(raw).is_err());
    }
}
