//! Repository-level filesystem operations.
//!
//! Templates are read from and overlays written to paths relative to the
//! repository root. The port does not know about overlay layout; that lives
//! in `domain::paths`.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for low-level repository filesystem operations.
///
/// All `path` arguments are relative to the repository root.
/// Implementations must reject paths that escape the root boundary.
pub trait RepositoryFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating or truncating it.
    ///
    /// The parent directory must already exist.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Remove a file.
    fn remove_file(&self, path: &Path) -> Result<(), AppError>;

    /// List file names (not paths) directly inside a directory, sorted.
    fn list_file_names(&self, path: &Path) -> Result<Vec<String>, AppError>;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories. Existing directories are fine.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Resolve a relative path to an absolute path within the repository root.
    fn resolve_path(&self, path: &Path) -> PathBuf;
}
