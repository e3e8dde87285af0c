pub mod action;
pub mod configuration;
pub mod error;
pub mod identities;
pub mod kustomization;
pub mod paths;
pub mod render;
pub mod selection;

pub use action::Action;
pub use configuration::{Field, OnboardingConfig, load_config};
pub use error::AppError;
pub use identities::CorrelationId;
pub use kustomization::Kustomization;
pub use paths::{EnvDirMode, KUSTOMIZATION_FILE};
pub use selection::{AuxiliaryDecision, Predicates, PrimaryTemplate, SkipReason};
