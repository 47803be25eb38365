// src/types.rs

use std::fmt;

/// What kind of filesystem entry a path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Other,
}

/// The slice of file metadata the discovery rules care about.
///
/// Kept as a plain value so the selection predicates can be tested without a
/// filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMeta {
    pub kind: EntryKind,
    /// Unix permission bits (`0o777` range).
    pub mode: u32,
}

impl EntryMeta {
    pub fn file(mode: u32) -> Self {
        Self {
            kind: EntryKind::File,
            mode,
        }
    }

    pub fn dir() -> Self {
        Self {
            kind: EntryKind::Dir,
            mode: 0o755,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Version-control and build-system facts used to name a package.
///
/// All three values are opaque strings; they are only ever formatted into a
/// directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMetadata {
    pub short_sha: String,
    pub commit_count: String,
    pub version: String,
}

impl BuildMetadata {
    /// `<project>-<version>.<count>.<sha>`, e.g. `ku-1.0.3.abcdef`.
    pub fn package_name(&self, project: &str) -> String {
        format!(
            "{project}-{}.{}.{}",
            self.version, self.commit_count, self.short_sha
        )
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "version {} ({} commits, {})",
            self.version, self.commit_count, self.short_sha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_name_follows_versioned_convention() {
        let meta = BuildMetadata {
            short_sha: "abcdef".into(),
            commit_count: "3".into(),
            version: "1.0".into(),
        };
        assert_eq!(meta.package_name("ku"), "ku-1.0.3.abcdef");
    }
}
