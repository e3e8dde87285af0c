//! Tool settings, as opposed to the onboarding data read from the environment.

use std::path::PathBuf;

use crate::domain::paths::{ENVIRONMENT_DIR, OVERLAY_DIR};

/// GitLab host prefix selecting the git-repo overlay family.
pub const DEFAULT_GITLAB_PREFIX: &str = "devcloud.ubs.net";

/// Settings for a scaffolding run. Paths are relative to the repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub gitlab_prefix: String,
    pub environment_dir: PathBuf,
    pub overlay_dir: PathBuf,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            gitlab_prefix: DEFAULT_GITLAB_PREFIX.to_string(),
            environment_dir: PathBuf::from(ENVIRONMENT_DIR),
            overlay_dir: PathBuf::from(OVERLAY_DIR),
        }
    }
}

impl RunSettings {
    pub fn with_gitlab_prefix(prefix: impl Into<String>) -> Self {
        Self { gitlab_prefix: prefix.into(), ..Self::default() }
    }
}
