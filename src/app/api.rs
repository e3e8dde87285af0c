//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use tracing::info_span;

use crate::adapters::{EmbeddedOverlayTemplates, FilesystemStore, ProcessEnvironment};
use crate::app::config::RunSettings;
use crate::app::{
    AppContext,
    commands::{init, scaffold},
};
use crate::domain::load_config;
use crate::ports::EnvironmentSource;

pub use crate::app::commands::add::AddOutcome;
pub use crate::app::commands::remove::RemoveOutcome;
pub use crate::app::commands::scaffold::RunOutcome;
pub use crate::domain::{Action, AppError, PrimaryTemplate, SkipReason};

/// Create an `AppContext` rooted at `root`.
fn create_context(
    root: &Path,
    settings: RunSettings,
) -> Result<AppContext<FilesystemStore, EmbeddedOverlayTemplates>, AppError> {
    let fs = FilesystemStore::at(root)?;
    Ok(AppContext::new(fs, EmbeddedOverlayTemplates::new(), settings))
}

/// Run the action described by the process environment against the repository at `root`.
pub fn run(root: &Path, settings: RunSettings) -> Result<RunOutcome, AppError> {
    run_with_env(root, settings, &ProcessEnvironment)
}

/// Run the action described by `env` against the repository at `root`.
///
/// Every log line emitted during the run carries the run's correlation ID.
pub fn run_with_env(
    root: &Path,
    settings: RunSettings,
    env: &impl EnvironmentSource,
) -> Result<RunOutcome, AppError> {
    let config = load_config(env)?;
    let span = info_span!("run", id = %config.id());
    let _guard = span.enter();

    let ctx = create_context(root, settings)?;
    scaffold::execute(&ctx, &config)
}

/// Install the starter overlay templates into the repository at `root`.
pub fn init_templates(root: &Path) -> Result<Vec<String>, AppError> {
    let ctx = create_context(root, RunSettings::default())?;
    init::execute(&ctx)
}
