use super::{DirEntry, FileSystem, FileType};
use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone)]
struct MockEntry {
    path: PathBuf,
    content: Option<Vec<u8>>,
    file_type: FileType,
}

/// In-memory file tree. `read_dir` yields children in insertion order, which
/// lets tests pin down which of several descriptors is "first".
pub struct MockFileSystem {
    entries: RwLock<Vec<MockEntry>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        let fs = Self {
            entries: RwLock::new(Vec::new()),
            root: root.clone(),
        };
        fs.add_dir(root);
        fs
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        self.add_bytes(path, content.as_bytes());
    }

    /// Adds a file with arbitrary content, including bytes that are not UTF-8.
    pub fn add_bytes(&self, path: impl AsRef<Path>, content: &[u8]) {
        let path = self.normalize_path(path.as_ref());
        let mut entries = self.entries.write().unwrap();

        if let Some(parent) = path.parent() {
            ensure_parents(&mut entries, parent);
        }

        upsert(
            &mut entries,
            MockEntry {
                path,
                content: Some(content.to_vec()),
                file_type: FileType::File,
            },
        );
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        let mut entries = self.entries.write().unwrap();
        ensure_parents(&mut entries, &path);
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

fn upsert(entries: &mut Vec<MockEntry>, entry: MockEntry) {
    match entries.iter_mut().find(|e| e.path == entry.path) {
        Some(existing) => *existing = entry,
        None => entries.push(entry),
    }
}

fn ensure_parents(entries: &mut Vec<MockEntry>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        if !entries.iter().any(|e| e.path == current) {
            entries.push(MockEntry {
                path: current.clone(),
                content: None,
                file_type: FileType::Directory,
            });
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.entries
            .read()
            .unwrap()
            .iter()
            .any(|e| e.path == path && e.file_type == FileType::Directory)
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        let path = self.normalize_path(path);
        let entries = self.entries.read().unwrap();
        let entry = entries
            .iter()
            .find(|e| e.path == path)
            .ok_or_else(|| anyhow!("File not found: {:?}", path))?;

        entry
            .content
            .clone()
            .ok_or_else(|| anyhow!("Not a file: {:?}", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let path = self.normalize_path(path);
        let entries = self.entries.read().unwrap();

        if !entries
            .iter()
            .any(|e| e.path == path && e.file_type == FileType::Directory)
        {
            return Err(anyhow!("Directory not found: {:?}", path));
        }

        Ok(entries
            .iter()
            .filter(|e| e.path.parent() == Some(path.as_path()))
            .map(|e| DirEntry {
                path: e.path.clone(),
                name: e
                    .path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("")
                    .to_string(),
                file_type: e.file_type,
            })
            .collect())
    }
}
