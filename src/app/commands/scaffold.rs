use std::path::Path;

use tracing::info;

use super::add::{self, AddOutcome};
use super::remove::{self, RemoveOutcome};
use crate::app::AppContext;
use crate::domain::{Action, AppError, OnboardingConfig};
use crate::ports::{RepositoryFilesystem, TemplateCatalog};

/// Outcome of an environment-driven run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Add or modify rendered an overlay.
    Applied { action: Action, outcome: AddOutcome },
    /// Remove replaced an overlay with the delete kustomization.
    Removed(RemoveOutcome),
}

impl RunOutcome {
    pub fn target_dir(&self) -> &Path {
        match self {
            RunOutcome::Applied { outcome, .. } => &outcome.target_dir,
            RunOutcome::Removed(outcome) => &outcome.target_dir,
        }
    }

    pub fn display_path(&self) -> String {
        self.target_dir().display().to_string()
    }
}

/// Dispatch on `ACTION`. Unknown actions fail before touching the filesystem.
pub fn execute<F, T>(ctx: &AppContext<F, T>, config: &OnboardingConfig) -> Result<RunOutcome, AppError>
where
    F: RepositoryFilesystem,
    T: TemplateCatalog,
{
    let action: Action = config.action().parse()?;
    info!(action = %action, "Performing action");

    match action {
        Action::Add | Action::Modify => {
            add::execute(ctx, config).map(|outcome| RunOutcome::Applied { action, outcome })
        }
        Action::Remove => remove::execute(ctx, config).map(RunOutcome::Removed),
    }
}
