//! nsgen: render Kubernetes namespace overlays for a GitOps repository.
//!
//! An onboarding request arrives as environment variables. `nsgen` resolves
//! the overlay directory under `environment/`, picks one kustomization variant
//! from `kustomize/overlay/`, and renders the auxiliary manifests next to it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    Action, AddOutcome, AppError, PrimaryTemplate, RemoveOutcome, RunOutcome, SkipReason, init_templates, run,
    run_with_env,
};
pub use app::config::{DEFAULT_GITLAB_PREFIX, RunSettings};
pub use ports::EnvironmentSource;
