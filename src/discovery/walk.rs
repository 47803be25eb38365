// src/discovery/walk.rs

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::discovery::predicate::{is_executable, is_unit_test};
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::types::EntryMeta;

/// Recursively collect every file under `root` accepted by `select`.
///
/// The walk is depth-first pre-order with each directory's entries sorted by
/// path, so the result order is stable across runs and platforms. Symlinked
/// directories are not descended into. Entries whose metadata cannot be read
/// (dangling symlinks, races with deletion) and subdirectories that cannot be
/// listed are skipped. Only a `root` that cannot be listed is an error.
pub fn collect_files<F>(fs: &dyn FileSystem, root: &Path, select: F) -> Result<Vec<PathBuf>>
where
    F: Fn(&str, &EntryMeta) -> bool,
{
    let entries = fs.read_dir(root)?;
    let mut found = Vec::new();
    walk_entries(fs, entries, &select, &mut found);
    debug!(root = %root.display(), count = found.len(), "directory walk finished");
    Ok(found)
}

fn walk_entries<F>(fs: &dyn FileSystem, mut entries: Vec<PathBuf>, select: &F, found: &mut Vec<PathBuf>)
where
    F: Fn(&str, &EntryMeta) -> bool,
{
    entries.sort();

    for path in entries {
        let meta = match fs.metadata(&path) {
            Ok(meta) => meta,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if select(&name, &meta) {
            trace!(path = %path.display(), "selected");
            found.push(path.clone());
        }

        if meta.is_dir() && !fs.is_symlink(&path) {
            match fs.read_dir(&path) {
                Ok(children) => walk_entries(fs, children, select, found),
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "skipping unreadable directory");
                }
            }
        }
    }
}

/// Every executable candidate under `root`.
pub fn find_executables(fs: &dyn FileSystem, root: &Path) -> Result<Vec<PathBuf>> {
    collect_files(fs, root, is_executable)
}

/// Executables under `root` minus performance benchmarks.
pub fn find_unit_tests(fs: &dyn FileSystem, root: &Path) -> Result<Vec<PathBuf>> {
    collect_files(fs, root, is_unit_test)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn selects_only_visible_executable_files() {
        let fs = MockFileSystem::new();
        fs.add_executable("bin/Release/test/a.out", b"a".to_vec());
        fs.add_executable("bin/Release/test/b.sh", b"b".to_vec());
        fs.add_executable("bin/Release/test/.hidden", b"h".to_vec());
        fs.add_file("bin/Release/test/readme.txt", b"r".to_vec());

        let found = find_executables(&fs, Path::new("bin/Release/test")).unwrap();
        assert_eq!(names(&found), vec!["a.out", "b.sh"]);
    }

    #[test]
    fn walk_is_sorted_pre_order_and_enters_hidden_directories() {
        let fs = MockFileSystem::new();
        fs.add_executable("root/z_top", b"".to_vec());
        fs.add_executable("root/sub/inner", b"".to_vec());
        fs.add_executable("root/.cache/cached", b"".to_vec());
        fs.add_executable("root/a_top", b"".to_vec());

        let found = find_executables(&fs, Path::new("root")).unwrap();
        assert_eq!(names(&found), vec!["cached", "a_top", "inner", "z_top"]);
    }

    #[test]
    fn unit_test_walk_drops_performance_benchmarks() {
        let fs = MockFileSystem::new();
        fs.add_executable("ku-1.0.3.abcdef/UnitA", b"".to_vec());
        fs.add_executable("ku-1.0.3.abcdef/UnitB", b"".to_vec());
        fs.add_executable("ku-1.0.3.abcdef/PerformanceTestX", b"".to_vec());
        fs.add_executable("ku-1.0.3.abcdef/nested/fooperformancetestbar", b"".to_vec());

        let found = find_unit_tests(&fs, Path::new("ku-1.0.3.abcdef")).unwrap();
        assert_eq!(names(&found), vec!["UnitA", "UnitB", "fooperformancetestbar"]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let fs = MockFileSystem::new();
        assert!(find_executables(&fs, Path::new("nope")).is_err());
    }

    #[test]
    fn unlistable_subdirectory_is_skipped_but_unlistable_root_is_not() {
        let fs = MockFileSystem::new();
        fs.add_executable("ku-1/a_first", b"".to_vec());
        fs.add_executable("ku-1/locked/hidden_away", b"".to_vec());
        fs.add_executable("ku-1/z_last", b"".to_vec());
        fs.deny_read_dir("ku-1/locked");

        let found = find_unit_tests(&fs, Path::new("ku-1")).unwrap();
        assert_eq!(names(&found), vec!["a_first", "z_last"]);

        fs.deny_read_dir("ku-1");
        assert!(find_unit_tests(&fs, Path::new("ku-1")).is_err());
    }
}
