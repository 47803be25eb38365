// src/package/copy.rs

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::fs::FileSystem;

/// Copy each executable into `dest_dir` under its own basename.
///
/// Permission bits and timestamps travel with the copy. When two sources share
/// a basename the later one overwrites the earlier one; a warning is logged
/// and the run continues. Returns the destination paths in copy order
/// (duplicates included).
pub fn copy_executables(
    fs: &dyn FileSystem,
    executables: &[PathBuf],
    dest_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut copied = Vec::with_capacity(executables.len());
    let mut seen: HashMap<PathBuf, &Path> = HashMap::new();

    for exe in executables {
        let name = exe
            .file_name()
            .ok_or_else(|| anyhow!("executable path has no file name: {:?}", exe))?;
        let target = dest_dir.join(name);

        if let Some(previous) = seen.insert(target.clone(), exe.as_path()) {
            warn!(
                previous = %previous.display(),
                replacement = %exe.display(),
                target = %target.display(),
                "basename collision; overwriting earlier copy"
            );
        }

        println!("Copying {} into {}", exe.display(), dest_dir.display());
        fs.copy_preserving(exe, &target)?;
        debug!(from = %exe.display(), to = %target.display(), "copied executable");
        copied.push(target);
    }

    Ok(copied)
}
