//! Shared in-memory file backing store for port-scoped test doubles.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory file tree shared across test doubles.
///
/// Tests seed templates via this handle before passing `MockRepositoryFs`
/// to production code, then inspect the same handle for rendered output.
#[derive(Clone, Debug, Default)]
pub struct TestFiles {
    pub(crate) files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    pub(crate) dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
    pub(crate) failing_writes: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl TestFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (and its parent directories) into the in-memory store.
    pub fn add(&self, path: &str, content: &str) {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.lock().unwrap().insert(path, content.to_string());
    }

    /// Register a directory and all its ancestors.
    pub fn add_dir(&self, path: &Path) {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    /// Make every later write to `path` fail with a storage error.
    pub fn fail_writes_to(&self, path: &str) {
        self.failing_writes.lock().unwrap().insert(PathBuf::from(path));
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(Path::new(path))
    }

    /// File names directly inside `dir`, sorted.
    pub fn names_in(&self, dir: &str) -> Vec<String> {
        let dir = Path::new(dir);
        self.files
            .lock()
            .unwrap()
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
            .collect()
    }
}
