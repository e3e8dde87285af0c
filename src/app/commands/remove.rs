//! Remove workflow: replace an overlay with the delete kustomization.

use std::path::PathBuf;

use tracing::info;

use super::render::render_template;
use crate::app::AppContext;
use crate::domain::paths::{EnvDirMode, KUSTOMIZATION_FILE, is_yaml_file, target_directory};
use crate::domain::{AppError, OnboardingConfig, PrimaryTemplate};
use crate::ports::{RepositoryFilesystem, TemplateCatalog};

/// Result of a remove run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveOutcome {
    /// Overlay directory, relative to the repository root.
    pub target_dir: PathBuf,
    /// Files deleted from the overlay directory, in deletion order.
    pub removed: Vec<String>,
}

/// Render the delete kustomization and drop every other YAML file.
///
/// The directory is resolved with the operational environment verbatim
/// (`test` stays `test`). Deletions are not rolled back on failure.
pub fn execute<F, T>(ctx: &AppContext<F, T>, config: &OnboardingConfig) -> Result<RemoveOutcome, AppError>
where
    F: RepositoryFilesystem,
    T: TemplateCatalog,
{
    let settings = ctx.settings();
    let dir = target_directory(&settings.environment_dir, config, EnvDirMode::Verbatim);
    info!(dir = %dir.display(), "Target directory for removal");

    if !ctx.fs().is_dir(&dir) {
        return Err(AppError::TargetDirectoryMissing(dir.display().to_string()));
    }

    let delete = PrimaryTemplate::Delete;
    render_template(ctx.fs(), &settings.overlay_dir.join(delete.source_file()), &dir, KUSTOMIZATION_FILE, config)?;

    let doomed: Vec<String> = ctx
        .fs()
        .list_file_names(&dir)?
        .into_iter()
        .filter(|name| is_yaml_file(name) && name != KUSTOMIZATION_FILE)
        .collect();
    info!(count = doomed.len(), "YAML files to remove from target directory");

    let mut removed = Vec::with_capacity(doomed.len());
    for name in doomed {
        let path = dir.join(&name);
        info!(path = %path.display(), "Removing file");
        ctx.fs().remove_file(&path)?;
        removed.push(name);
    }

    Ok(RemoveOutcome { target_dir: dir, removed })
}
