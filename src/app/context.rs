use super::config::RunSettings;
use crate::ports::{RepositoryFilesystem, TemplateCatalog};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: RepositoryFilesystem, T: TemplateCatalog> {
    fs: F,
    templates: T,
    settings: RunSettings,
}

impl<F: RepositoryFilesystem, T: TemplateCatalog> AppContext<F, T> {
    /// Create a new application context.
    pub fn new(fs: F, templates: T, settings: RunSettings) -> Self {
        Self { fs, templates, settings }
    }

    /// Get a reference to the repository filesystem.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Get a reference to the starter template catalog.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }
}
