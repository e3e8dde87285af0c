//! Minimal view of a rendered `kustomization.yaml` for post-render checks.

use serde::Deserialize;

use super::AppError;

/// The subset of a Kustomization the checks need.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Kustomization {
    #[serde(default)]
    pub resources: Vec<String>,
}

impl Kustomization {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(content).map_err(|err| {
            AppError::config_error(format!("Invalid kustomization YAML: {}", err))
        })
    }

    /// Resources that name a file inside the overlay directory itself.
    ///
    /// Remote references and relative paths into other directories are left
    /// to kustomize.
    pub fn local_file_resources(&self) -> impl Iterator<Item = &str> {
        self.resources
            .iter()
            .map(String::as_str)
            .filter(|r| !r.contains('/') && !r.contains("://"))
    }
}
