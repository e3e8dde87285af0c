//! Add/modify workflow: render an overlay for an onboarding request.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::render::render_template;
use crate::app::AppContext;
use crate::domain::paths::{EnvDirMode, KUSTOMIZATION_FILE, KUSTOMIZATION_PREFIX, is_yaml_file, target_directory};
use crate::domain::selection::{auxiliary_decision, select_primary};
use crate::domain::{
    AppError, AuxiliaryDecision, Kustomization, OnboardingConfig, Predicates, PrimaryTemplate, SkipReason,
};
use crate::ports::{RepositoryFilesystem, TemplateCatalog};

/// Result of an add/modify run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// Overlay directory, relative to the repository root.
    pub target_dir: PathBuf,
    /// Variant rendered into `kustomization.yaml`.
    pub primary: PrimaryTemplate,
    /// Auxiliary templates rendered, in processing order.
    pub rendered: Vec<String>,
    /// Auxiliary templates skipped, with the reason.
    pub skipped: Vec<(String, SkipReason)>,
}

pub fn execute<F, T>(ctx: &AppContext<F, T>, config: &OnboardingConfig) -> Result<AddOutcome, AppError>
where
    F: RepositoryFilesystem,
    T: TemplateCatalog,
{
    let settings = ctx.settings();
    let dir = target_directory(&settings.environment_dir, config, EnvDirMode::Mapped);
    info!(dir = %dir.display(), "Target directory");

    ctx.fs().create_dir_all(&dir)?;
    info!("Created target directory");

    for (field, value) in config.fields() {
        debug!(field = field.name(), value, "Config value");
    }

    let predicates = Predicates::from_config(config, &settings.gitlab_prefix);
    let primary = select_primary(&predicates);
    info!(
        variant = %primary,
        template = primary.source_file(),
        has_domain = predicates.has_domain,
        is_git_repo = predicates.is_git_repo,
        is_ob_test = predicates.is_ob_test,
        "Selected primary template"
    );
    render_template(
        ctx.fs(),
        &settings.overlay_dir.join(primary.source_file()),
        &dir,
        KUSTOMIZATION_FILE,
        config,
    )?;

    let templates: Vec<String> =
        ctx.fs().list_file_names(&settings.overlay_dir)?.into_iter().filter(|n| is_yaml_file(n)).collect();
    info!(count = templates.len(), "Found YAML templates in overlay directory");

    let mut rendered = Vec::new();
    let mut skipped = Vec::new();
    for name in templates {
        match auxiliary_decision(&name, &predicates) {
            AuxiliaryDecision::Render => {
                render_template(ctx.fs(), &settings.overlay_dir.join(&name), &dir, &name, config)?;
                rendered.push(name);
            }
            AuxiliaryDecision::Skip(reason) => {
                info!(file = %name, reason = %reason, "Skipping template");
                skipped.push((name, reason));
            }
        }
    }

    verify_overlay(ctx.fs(), &dir)?;

    Ok(AddOutcome { target_dir: dir, primary, rendered, skipped })
}

/// Post-render checks on the overlay directory. Findings are warnings only.
fn verify_overlay<F: RepositoryFilesystem>(fs: &F, dir: &Path) -> Result<(), AppError> {
    let names = fs.list_file_names(dir)?;

    let variants: Vec<&String> = names.iter().filter(|n| n.starts_with(KUSTOMIZATION_PREFIX)).collect();
    info!(count = variants.len(), "Kustomization files in target directory");
    for name in variants.iter().filter(|n| n.as_str() != KUSTOMIZATION_FILE) {
        warn!(file = %name, "Leftover kustomization variant in target directory");
    }

    let content = fs.read_file(&dir.join(KUSTOMIZATION_FILE))?;
    match Kustomization::parse(&content) {
        Ok(kustomization) => {
            for resource in kustomization.local_file_resources() {
                if !names.iter().any(|n| n == resource) {
                    warn!(resource, "Kustomization references a file missing from the overlay");
                }
            }
        }
        Err(err) => warn!(error = %err, "Rendered kustomization.yaml is not valid YAML"),
    }

    Ok(())
}
