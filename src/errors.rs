// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Every failure in either tool is one of two things: an external process
//! that exited non-zero (or could not be started), or a filesystem problem.
//! Nothing here is recovered from; the binaries turn the error into an exit
//! code via [`KuError::exit_code`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KuError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("command '{program}' failed with {}", describe_code(.code))]
    CommandFailed { program: String, code: Option<i32> },

    #[error("failed to start command '{program}': {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("build metadata error: {0}")]
    Metadata(String),

    #[error("no input directory matching '{pattern}' in {}", .root.display())]
    NoInputDirectory { pattern: String, root: PathBuf },

    #[error("{} directories match '{pattern}': {}", .candidates.len(), list_paths(.candidates))]
    AmbiguousInputDirectory {
        pattern: String,
        candidates: Vec<PathBuf>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KuError {
    /// Process exit code a binary should terminate with for this error.
    ///
    /// A failing child process hands its own status through; everything else
    /// (including a child killed by a signal) maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            KuError::CommandFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn list_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, KuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failure_propagates_child_exit_code() {
        let err = KuError::CommandFailed {
            program: "UnitA".into(),
            code: Some(3),
        };
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "command 'UnitA' failed with exit code 3");
    }

    #[test]
    fn signal_and_other_errors_map_to_one() {
        let killed = KuError::CommandFailed {
            program: "dot".into(),
            code: None,
        };
        assert_eq!(killed.exit_code(), 1);
        assert_eq!(KuError::Metadata("x".into()).exit_code(), 1);
    }

    #[test]
    fn ambiguity_error_lists_every_candidate() {
        let err = KuError::AmbiguousInputDirectory {
            pattern: "ku-*".into(),
            candidates: vec![PathBuf::from("ku-1"), PathBuf::from("ku-2")],
        };
        assert_eq!(err.to_string(), "2 directories match 'ku-*': ku-1, ku-2");
    }
}
