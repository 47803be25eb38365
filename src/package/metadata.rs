// src/package/metadata.rs

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ToolsSection;
use crate::errors::{KuError, Result};
use crate::exec::{CommandRunner, CommandSpec};
use crate::types::BuildMetadata;

/// The part of `meson introspect --projectinfo` output we read.
#[derive(Debug, Deserialize)]
struct ProjectInfo {
    #[serde(default)]
    version: Value,
}

/// Query git and meson for the values that name a package directory.
///
/// Runs, in order:
/// 1. `git rev-parse --short HEAD`
/// 2. `git rev-list HEAD --count`
/// 3. `meson introspect --projectinfo <bin_dir>`, reading `.version`
///
/// The first failing command aborts with its exit code.
pub async fn retrieve_metadata(
    runner: &dyn CommandRunner,
    tools: &ToolsSection,
    bin_dir: &Path,
) -> Result<BuildMetadata> {
    let short_sha = runner
        .run(
            CommandSpec::new(&tools.git)
                .args(["rev-parse", "--short", "HEAD"])
                .capture_stdout(),
        )
        .await?
        .trimmed()
        .to_string();

    let commit_count = runner
        .run(
            CommandSpec::new(&tools.git)
                .args(["rev-list", "HEAD", "--count"])
                .capture_stdout(),
        )
        .await?
        .trimmed()
        .to_string();

    let introspection = runner
        .run(
            CommandSpec::new(&tools.meson)
                .args(["introspect", "--projectinfo"])
                .arg(bin_dir)
                .capture_stdout(),
        )
        .await?;
    let version = parse_project_version(introspection.trimmed())?;

    let meta = BuildMetadata {
        short_sha,
        commit_count,
        version,
    };
    info!(%meta, "retrieved build metadata");
    Ok(meta)
}

/// Extract `.version` from meson's project info JSON.
///
/// Strings are taken verbatim; numbers are rendered as text. A missing or
/// `null` version is an error rather than the literal `"null"`.
pub fn parse_project_version(json: &str) -> Result<String> {
    let info: ProjectInfo = serde_json::from_str(json)?;
    debug!(version = ?info.version, "parsed project info");

    match info.version {
        Value::String(s) => Ok(s.trim().to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Err(KuError::Metadata(
            "project info has no 'version' field".to_string(),
        )),
        other => Err(KuError::Metadata(format!(
            "project info 'version' is not a string: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_read_from_project_info() {
        let json = r#"{"version": "1.0", "descriptive_name": "ku", "subprojects": []}"#;
        assert_eq!(parse_project_version(json).unwrap(), "1.0");
    }

    #[test]
    fn numeric_version_is_rendered_as_text() {
        assert_eq!(parse_project_version(r#"{"version": 2}"#).unwrap(), "2");
    }

    #[test]
    fn missing_version_is_a_metadata_error() {
        let err = parse_project_version(r#"{"descriptive_name": "ku"}"#).unwrap_err();
        assert!(matches!(err, KuError::Metadata(_)));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = parse_project_version("meson: command not understood").unwrap_err();
        assert!(matches!(err, KuError::JsonError(_)));
    }
}
