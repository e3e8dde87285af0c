//! Test double for `RepositoryFilesystem`.

use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::test_files::TestFiles;

/// In-memory implementation of `RepositoryFilesystem` for unit tests.
#[derive(Clone, Debug)]
pub struct MockRepositoryFs {
    files: TestFiles,
}

impl MockRepositoryFs {
    pub fn new(files: TestFiles) -> Self {
        Self { files }
    }
}

fn not_found(path: &Path) -> AppError {
    AppError::from(io::Error::new(
        io::ErrorKind::NotFound,
        format!("Mock path not found: {}", path.display()),
    ))
}

impl RepositoryFilesystem for MockRepositoryFs {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.files.files.lock().unwrap().get(path).cloned().ok_or_else(|| not_found(path))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if self.files.failing_writes.lock().unwrap().contains(path) {
            return Err(AppError::from(io::Error::new(io::ErrorKind::StorageFull, "Mock disk full")));
        }
        let parent = path.parent().unwrap_or(Path::new(""));
        if !parent.as_os_str().is_empty() && !self.is_dir(parent) {
            return Err(not_found(parent));
        }
        self.files.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        self.files.files.lock().unwrap().remove(path).map(|_| ()).ok_or_else(|| not_found(path))
    }

    fn list_file_names(&self, path: &Path) -> Result<Vec<String>, AppError> {
        if !path.as_os_str().is_empty() && !self.is_dir(path) {
            return Err(not_found(path));
        }
        Ok(self.files.names_in(&path.to_string_lossy()))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files.dirs.lock().unwrap().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        self.files.add_dir(path);
        Ok(())
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}
