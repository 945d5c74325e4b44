//! FileSystem trait definition

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Type of file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
    Symlink,
}

/// A directory entry returned by read_dir
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub file_type: FileType,
}

impl DirEntry {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.name
    }

    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }
}

/// Abstraction over the two reads detection performs, so it can run against
/// an in-memory tree in tests.
pub trait FileSystem: Send + Sync {
    fn is_dir(&self, path: &Path) -> bool;

    /// Read the whole file as raw bytes. Decoding is left to the caller.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// List immediate children of a directory, in the order the underlying
    /// store yields them. Implementations must not sort.
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;
}
