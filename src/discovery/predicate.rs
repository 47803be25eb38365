// src/discovery/predicate.rs

//! Pure selection rules shared by both tools.
//!
//! Nothing here touches the filesystem: callers hand in a basename and the
//! metadata they already read.

use crate::types::EntryMeta;

/// Owner execute bit.
const OWNER_EXEC: u32 = 0o100;

/// Marker that distinguishes benchmark binaries from unit tests.
pub const PERFORMANCE_TEST_MARKER: &str = "PerformanceTest";

/// Whether `name` names a hidden entry.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// A runnable test binary: a regular file, owner-executable, not hidden.
pub fn is_executable(name: &str, meta: &EntryMeta) -> bool {
    meta.is_file() && meta.mode & OWNER_EXEC != 0 && !is_hidden(name)
}

/// Case-sensitive substring match on [`PERFORMANCE_TEST_MARKER`].
pub fn is_performance_test(name: &str) -> bool {
    name.contains(PERFORMANCE_TEST_MARKER)
}

/// Unit tests are every executable that is not a performance benchmark.
pub fn is_unit_test(name: &str, meta: &EntryMeta) -> bool {
    is_executable(name, meta) && !is_performance_test(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EntryKind, EntryMeta};

    #[test]
    fn regular_owner_executable_file_is_selected() {
        assert!(is_executable("a.out", &EntryMeta::file(0o755)));
        assert!(is_executable("b.sh", &EntryMeta::file(0o700)));
        assert!(is_executable("x", &EntryMeta::file(0o100)));
    }

    #[test]
    fn non_executable_files_are_rejected() {
        assert!(!is_executable("readme.txt", &EntryMeta::file(0o644)));
        // group/other execute alone is not enough
        assert!(!is_executable("shared", &EntryMeta::file(0o655)));
    }

    #[test]
    fn hidden_entries_are_rejected_regardless_of_mode() {
        assert!(!is_executable(".hidden", &EntryMeta::file(0o777)));
        assert!(!is_executable(".", &EntryMeta::file(0o755)));
    }

    #[test]
    fn directories_and_special_files_are_rejected() {
        assert!(!is_executable("bin", &EntryMeta::dir()));
        let fifo = EntryMeta {
            kind: EntryKind::Other,
            mode: 0o777,
        };
        assert!(!is_executable("pipe", &fifo));
    }

    #[test]
    fn performance_marker_is_case_sensitive_substring() {
        assert!(is_performance_test("FooPerformanceTestBar"));
        assert!(is_performance_test("PerformanceTestX"));
        assert!(!is_performance_test("fooperformancetestbar"));
        assert!(!is_performance_test("PerformanceTst"));
    }

    #[test]
    fn unit_test_combines_both_rules() {
        let exe = EntryMeta::file(0o755);
        assert!(is_unit_test("UnitA", &exe));
        assert!(!is_unit_test("PerformanceTestX", &exe));
        assert!(!is_unit_test("UnitA", &EntryMeta::file(0o644)));
    }
}
