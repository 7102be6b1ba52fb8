//! File access used by the handlers.
//!
//! Handlers never touch `std::fs` directly; they go through [`FileSystem`] so
//! routing and response building can be exercised against an in-memory tree.

use std::io;
use std::path::Path;

/// What a path points at, as far as serving is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Directory,
    Other,
}

pub trait FileSystem: Send + Sync + 'static {
    /// Combined exists/stat check. `None` when nothing is at `path`.
    fn metadata(&self, path: &Path) -> Option<FileKind>;

    /// Reads the whole file. Blocking.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    fn is_regular_file(&self, path: &Path) -> bool {
        self.metadata(path) == Some(FileKind::File)
    }
}

/// The local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn metadata(&self, path: &Path) -> Option<FileKind> {
        let meta = std::fs::metadata(path).ok()?;
        let kind = if meta.is_file() {
            FileKind::File
        } else if meta.is_dir() {
            FileKind::Directory
        } else {
            FileKind::Other
        };
        Some(kind)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}
