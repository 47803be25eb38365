// src/fs/mock.rs

use super::FileSystem;
use crate::types::EntryMeta;
use anyhow::{anyhow, Result};
use std::collections::{HashMap, HashSet};
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File { content: Vec<u8>, mode: u32 },
    Dir(Vec<String>), // List of child names
}

/// In-memory filesystem for tests.
///
/// Paths are normalised by dropping `.` components, so `./ku-1/UnitA` and
/// `ku-1/UnitA` name the same entry. Children are listed in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
    unlistable: Arc<Mutex<HashSet<PathBuf>>>,
}

fn normalize(path: &Path) -> PathBuf {
    let cleaned: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

fn parent_of(path: &Path) -> Option<PathBuf> {
    if path == Path::new(".") {
        return None;
    }
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Some(PathBuf::from(".")),
        Some(parent) => Some(parent.to_path_buf()),
        None => None,
    }
}

impl MockFileSystem {
    pub fn new() -> Self {
        let mut files = HashMap::new();
        // Ensure root exists
        files.insert(PathBuf::from("."), MockEntry::Dir(Vec::new()));

        Self {
            files: Arc::new(Mutex::new(files)),
            unlistable: Arc::default(),
        }
    }

    /// Add a regular file with mode `0o644`.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        self.add_file_with_mode(path, content, 0o644);
    }

    /// Add a regular file with mode `0o755`.
    pub fn add_executable(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        self.add_file_with_mode(path, content, 0o755);
    }

    pub fn add_file_with_mode(
        &self,
        path: impl AsRef<Path>,
        content: impl Into<Vec<u8>>,
        mode: u32,
    ) {
        let path = normalize(path.as_ref());
        let mut files = self.files.lock().unwrap();
        files.insert(
            path.clone(),
            MockEntry::File {
                content: content.into(),
                mode,
            },
        );
        if let Some(parent) = parent_of(&path) {
            Self::ensure_dir_entry(&mut files, &parent);
            Self::link_child(&mut files, &parent, &path);
        }
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = normalize(path.as_ref());
        let mut files = self.files.lock().unwrap();
        Self::ensure_dir_entry(&mut files, &path);
    }

    /// Permission bits of a file, if it exists.
    pub fn mode_of(&self, path: impl AsRef<Path>) -> Option<u32> {
        let files = self.files.lock().unwrap();
        match files.get(&normalize(path.as_ref())) {
            Some(MockEntry::File { mode, .. }) => Some(*mode),
            _ => None,
        }
    }

    /// Names of the direct children of a directory, in insertion order.
    pub fn children_of(&self, path: impl AsRef<Path>) -> Vec<String> {
        let files = self.files.lock().unwrap();
        match files.get(&normalize(path.as_ref())) {
            Some(MockEntry::Dir(children)) => children.clone(),
            _ => Vec::new(),
        }
    }

    /// Make `read_dir` on `path` fail, like a directory without read
    /// permission. The entry itself still exists.
    pub fn deny_read_dir(&self, path: impl AsRef<Path>) {
        self.unlistable
            .lock()
            .unwrap()
            .insert(normalize(path.as_ref()));
    }

    /// Contents of a file.
    pub fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let files = self.files.lock().unwrap();
        match files.get(&normalize(path)) {
            Some(MockEntry::File { content, .. }) => Ok(content.clone()),
            Some(MockEntry::Dir(_)) => Err(anyhow!("Is a directory: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    /// Create or overwrite a file, keeping the mode of an existing one.
    pub fn write(&self, path: &Path, contents: &[u8]) {
        let mode = self.mode_of(path).unwrap_or(0o644);
        self.add_file_with_mode(path, contents, mode);
    }

    pub fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.contains_key(&normalize(path))
    }

    fn ensure_dir_entry(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        if files.contains_key(path) {
            return;
        }
        files.insert(path.to_path_buf(), MockEntry::Dir(Vec::new()));
        if let Some(parent) = parent_of(path) {
            if parent != path {
                Self::ensure_dir_entry(files, &parent);
                Self::link_child(files, &parent, path);
            }
        }
    }

    fn link_child(files: &mut HashMap<PathBuf, MockEntry>, parent: &Path, child: &Path) {
        if let Some(MockEntry::Dir(children)) = files.get_mut(parent) {
            if let Some(name) = child.file_name().and_then(|n| n.to_str()) {
                if !children.iter().any(|c| c == name) {
                    children.push(name.to_string());
                }
            }
        }
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|e| anyhow!("Invalid UTF-8: {}", e))
    }

    fn is_file(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        matches!(files.get(&normalize(path)), Some(MockEntry::File { .. }))
    }

    fn is_dir(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        matches!(files.get(&normalize(path)), Some(MockEntry::Dir(_)))
    }

    fn is_symlink(&self, _path: &Path) -> bool {
        false
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        if self.exists(path) {
            Ok(normalize(path))
        } else {
            Err(anyhow!("No such file or directory: {:?}", path))
        }
    }

    fn metadata(&self, path: &Path) -> Result<EntryMeta> {
        let files = self.files.lock().unwrap();
        match files.get(&normalize(path)) {
            Some(MockEntry::File { mode, .. }) => Ok(EntryMeta::file(*mode)),
            Some(MockEntry::Dir(_)) => Ok(EntryMeta::dir()),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        if self.is_file(path) {
            return Err(anyhow!("Not a directory: {:?}", path));
        }
        self.add_dir(path);
        Ok(())
    }

    fn copy_preserving(&self, from: &Path, to: &Path) -> Result<()> {
        let (content, mode) = {
            let files = self.files.lock().unwrap();
            match files.get(&normalize(from)) {
                Some(MockEntry::File { content, mode }) => (content.clone(), *mode),
                Some(MockEntry::Dir(_)) => return Err(anyhow!("Is a directory: {:?}", from)),
                None => return Err(anyhow!("File not found: {:?}", from)),
            }
        };
        match parent_of(&normalize(to)) {
            Some(parent) if self.is_dir(&parent) => {}
            _ => return Err(anyhow!("Destination directory missing for {:?}", to)),
        }
        self.add_file_with_mode(to, content, mode);
        Ok(())
    }

    fn set_mode(&self, path: &Path, mode: u32) -> Result<()> {
        let mut files = self.files.lock().unwrap();
        match files.get_mut(&normalize(path)) {
            Some(MockEntry::File { mode: current, .. }) => {
                *current = mode;
                Ok(())
            }
            Some(MockEntry::Dir(_)) => Ok(()),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let key = normalize(path);
        if self.unlistable.lock().unwrap().contains(&key) {
            return Err(anyhow!("Permission denied: {:?}", path));
        }
        let files = self.files.lock().unwrap();
        match files.get(&key) {
            Some(MockEntry::Dir(children)) => {
                Ok(children.iter().map(|name| path.join(name)).collect())
            }
            _ => Err(anyhow!("Not a directory or not found: {:?}", path)),
        }
    }
}
