//! Repository layout and overlay directory resolution.

use std::path::{Path, PathBuf};

use super::OnboardingConfig;

/// Root of the rendered environment tree, relative to the repository root.
pub const ENVIRONMENT_DIR: &str = "environment";
/// Directory holding the overlay templates, relative to the repository root.
pub const OVERLAY_DIR: &str = "kustomize/overlay";
/// Canonical kustomization file name in every overlay directory.
pub const KUSTOMIZATION_FILE: &str = "kustomization.yaml";
/// Base-name prefix shared by all kustomization variants.
pub const KUSTOMIZATION_PREFIX: &str = "kustomization";
pub const YAML_EXTENSION: &str = "yaml";

const TEST_ENVIRONMENT: &str = "test";
const DEV_ENVIRONMENT: &str = "dev";

/// How the operational environment becomes a directory segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvDirMode {
    /// `test` lands in `dev`; add/modify layout.
    Mapped,
    /// Value used as-is; remove layout.
    Verbatim,
}

/// Directory segment for an operational environment.
pub fn env_dir(op_environment: &str, mode: EnvDirMode) -> &str {
    match mode {
        EnvDirMode::Mapped if op_environment == TEST_ENVIRONMENT => DEV_ENVIRONMENT,
        _ => op_environment,
    }
}

/// `<root>/<env-dir>/<region>/<cluster>/<swci>-<openvironment>-<suffix>`
pub fn target_directory(environment_root: &Path, config: &OnboardingConfig, mode: EnvDirMode) -> PathBuf {
    environment_root
        .join(env_dir(config.op_environment(), mode))
        .join(config.region())
        .join(config.cluster_name())
        .join(config.composite_name())
}

/// True for file names ending in `.yaml`.
pub fn is_yaml_file(name: &str) -> bool {
    Path::new(name).extension().is_some_and(|ext| ext == YAML_EXTENSION)
}
