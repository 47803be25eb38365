// src/discovery/input_dir.rs

use std::path::{Path, PathBuf};

use anyhow::Context;
use globset::Glob;
use tracing::debug;

use crate::errors::{KuError, Result};
use crate::fs::FileSystem;

/// Glob for package directories of `project`, e.g. `ku-*`.
pub fn package_dir_pattern(project: &str) -> String {
    format!("{project}-*")
}

/// Locate the single package directory directly under `root`.
///
/// Exactly one directory whose name matches `pattern` must exist. None is an
/// error, and so is more than one: picking an arbitrary match would run an
/// unpredictable set of tests. The match is returned canonicalized.
pub fn find_input_dir(fs: &dyn FileSystem, root: &Path, pattern: &str) -> Result<PathBuf> {
    let matcher = Glob::new(pattern)
        .with_context(|| format!("invalid input directory pattern: {pattern}"))?
        .compile_matcher();

    let mut candidates: Vec<PathBuf> = fs
        .read_dir(root)?
        .into_iter()
        .filter(|path| {
            path.file_name()
                .is_some_and(|name| matcher.is_match(Path::new(name)))
        })
        .filter(|path| fs.is_dir(path))
        .collect();
    candidates.sort();

    debug!(root = %root.display(), pattern, ?candidates, "input directory candidates");

    match candidates.len() {
        0 => Err(KuError::NoInputDirectory {
            pattern: pattern.to_string(),
            root: root.to_path_buf(),
        }),
        1 => {
            let dir = candidates.remove(0);
            Ok(fs.canonicalize(&dir)?)
        }
        _ => Err(KuError::AmbiguousInputDirectory {
            pattern: pattern.to_string(),
            candidates,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;

    #[test]
    fn single_matching_directory_is_chosen() {
        let fs = MockFileSystem::new();
        fs.add_executable("ku-1.0.3.abcdef/UnitA", b"".to_vec());
        fs.add_file("ku-notes.txt", b"not a dir".to_vec());
        fs.add_dir("reports");

        let dir = find_input_dir(&fs, Path::new("."), "ku-*").unwrap();
        assert_eq!(dir, PathBuf::from("ku-1.0.3.abcdef"));
    }

    #[test]
    fn no_matching_directory_fails_loudly() {
        let fs = MockFileSystem::new();
        fs.add_dir("out");

        let err = find_input_dir(&fs, Path::new("."), "ku-*").unwrap_err();
        assert!(matches!(err, KuError::NoInputDirectory { .. }));
    }

    #[test]
    fn several_matching_directories_are_ambiguous() {
        let fs = MockFileSystem::new();
        fs.add_dir("ku-2.0.1.bbbbbb");
        fs.add_dir("ku-1.0.3.abcdef");

        match find_input_dir(&fs, Path::new("."), "ku-*") {
            Err(KuError::AmbiguousInputDirectory { candidates, .. }) => {
                let names: Vec<_> = candidates
                    .iter()
                    .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
                    .collect();
                assert_eq!(names, vec!["ku-1.0.3.abcdef", "ku-2.0.1.bbbbbb"]);
            }
            other => panic!("expected ambiguity error, got {other:?}"),
        }
    }

    #[test]
    fn pattern_follows_project_name() {
        assert_eq!(package_dir_pattern("ku"), "ku-*");
        assert_eq!(package_dir_pattern("sudoku"), "sudoku-*");
    }
}
