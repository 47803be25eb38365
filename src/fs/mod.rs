// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::types::{EntryKind, EntryMeta};

pub mod mock;

/// Abstract filesystem interface.
pub trait FileSystem: Send + Sync + Debug {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn is_file(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn is_symlink(&self, path: &Path) -> bool;
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    /// Kind and permission bits of `path`, following symlinks.
    fn metadata(&self, path: &Path) -> Result<EntryMeta>;

    /// Create `path` and any missing parents; no error if it already exists.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Copy `from` to `to`, carrying over permission bits and timestamps.
    /// An existing `to` is overwritten.
    fn copy_preserving(&self, from: &Path, to: &Path) -> Result<()>;

    /// Replace the permission bits of `path` with `mode`.
    fn set_mode(&self, path: &Path, mode: u32) -> Result<()>;

    /// Return a list of entries in a directory.
    /// Returns full paths.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("reading file {:?}", path))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_symlink(&self, path: &Path) -> bool {
        path.is_symlink()
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        fs::canonicalize(path).with_context(|| format!("canonicalizing {:?}", path))
    }

    fn metadata(&self, path: &Path) -> Result<EntryMeta> {
        let meta = fs::metadata(path).with_context(|| format!("reading metadata of {:?}", path))?;
        let kind = if meta.is_file() {
            EntryKind::File
        } else if meta.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::Other
        };
        Ok(EntryMeta {
            kind,
            mode: permission_bits(path, &meta),
        })
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).with_context(|| format!("creating dir {:?}", path))
    }

    fn copy_preserving(&self, from: &Path, to: &Path) -> Result<()> {
        // `fs::copy` already carries the permission bits over on Unix.
        fs::copy(from, to).with_context(|| format!("copying {:?} to {:?}", from, to))?;

        let src_meta =
            fs::metadata(from).with_context(|| format!("reading metadata of {:?}", from))?;
        let mut times = fs::FileTimes::new();
        if let Ok(accessed) = src_meta.accessed() {
            times = times.set_accessed(accessed);
        }
        if let Ok(modified) = src_meta.modified() {
            times = times.set_modified(modified);
        }

        // futimens only needs ownership, so a read-only handle is enough even
        // when the copied mode has no owner write bit.
        let dest = fs::OpenOptions::new()
            .read(true)
            .write(cfg!(not(unix)))
            .open(to)
            .with_context(|| format!("opening {:?} to restore timestamps", to))?;
        dest.set_times(times)
            .with_context(|| format!("restoring timestamps on {:?}", to))?;
        fs::set_permissions(to, src_meta.permissions())
            .with_context(|| format!("restoring permissions on {:?}", to))?;
        Ok(())
    }

    #[cfg(unix)]
    fn set_mode(&self, path: &Path, mode: u32) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(path, fs::Permissions::from_mode(mode))
            .with_context(|| format!("setting mode {:o} on {:?}", mode, path))
    }

    #[cfg(not(unix))]
    fn set_mode(&self, path: &Path, mode: u32) -> Result<()> {
        let mut perms = fs::metadata(path)
            .with_context(|| format!("reading metadata of {:?}", path))?
            .permissions();
        perms.set_readonly(mode & 0o200 == 0);
        fs::set_permissions(path, perms)
            .with_context(|| format!("setting mode {:o} on {:?}", mode, path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).with_context(|| format!("reading dir {:?}", path))? {
            let entry = entry?;
            entries.push(entry.path());
        }
        Ok(entries)
    }
}

#[cfg(unix)]
fn permission_bits(_path: &Path, meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;

    meta.permissions().mode() & 0o7777
}

/// Without Unix permission bits, treat `.exe` files as executable.
#[cfg(not(unix))]
fn permission_bits(path: &Path, meta: &fs::Metadata) -> u32 {
    let exec = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("exe"));
    let write = if meta.permissions().readonly() { 0 } else { 0o200 };
    0o444 | write | if exec { 0o111 } else { 0 }
}
