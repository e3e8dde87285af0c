//! `RepositoryFilesystem` implementation for `FilesystemStore`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::FilesystemStore;

impl RepositoryFilesystem for FilesystemStore {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        fs::remove_file(full_path).map_err(AppError::from)
    }

    fn list_file_names(&self, path: &Path) -> Result<Vec<String>, AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        let mut names = Vec::new();
        for entry in fs::read_dir(full_path)? {
            let entry = entry?;
            // Symlinks count as files unless they resolve to a directory.
            if !entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let full_path = self.resolve_path(path);
        if self.validate_path_within_root(&full_path).is_err() {
            return false;
        }
        full_path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        fs::create_dir_all(full_path).map_err(AppError::from)
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        self.root().join(path)
    }
}
