#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use snake_server::config::StaticConfig;
use snake_server::site::Site;
use snake_server::site::fs::{FileKind, FileSystem};

/// In-memory file tree that counts every access.
#[derive(Default)]
pub struct MemoryFs {
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
    calls: AtomicUsize,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, contents: &[u8]) -> Self {
        self.files.insert(PathBuf::from(path), contents.to_vec());
        self
    }

    pub fn with_dir(mut self, path: &str) -> Self {
        self.dirs.insert(PathBuf::from(path));
        self
    }

    /// A regular file whose reads fail with `PermissionDenied`.
    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.unreadable.insert(PathBuf::from(path));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FileSystem for MemoryFs {
    fn metadata(&self, path: &Path) -> Option<FileKind> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.files.contains_key(path) || self.unreadable.contains(path) {
            Some(FileKind::File)
        } else if self.dirs.contains(path) {
            Some(FileKind::Directory)
        } else {
            None
        }
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unreadable.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "missing"))
    }
}

pub const INDEX_HTML: &[u8] = b"<html><body>snake</body></html>";
pub const APP_JS: &[u8] = b"console.log(\"snake\");";

pub fn static_config() -> StaticConfig {
    StaticConfig {
        root: PathBuf::from("public"),
        page_root: PathBuf::from("."),
    }
}

/// Site with a home page, a script, a stylesheet and a sub directory.
pub fn sample_site() -> Site<MemoryFs> {
    let fs = MemoryFs::new()
        .with_file("./index.html", INDEX_HTML)
        .with_file("public/app.js", APP_JS)
        .with_file("public/style.css", b"body{}")
        .with_file("public/notes.xyz", b"notes")
        .with_dir("public/images")
        .with_unreadable("public/locked.json");
    Site::new(&static_config(), fs)
}
