//! Overlay template selection.
//!
//! Exactly one primary template becomes the overlay's `kustomization.yaml`;
//! the remaining templates in the overlay directory are auxiliaries rendered
//! under their own names, subject to a few conditional rules.

use std::fmt;

use super::OnboardingConfig;
use super::paths::KUSTOMIZATION_PREFIX;

const GATEWAY_AUXILIARY: &str = "gateway.yaml";
const APP_AUXILIARY: &str = "app.yaml";

/// Facts about a request that drive template selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Predicates {
    /// `FullDomainName` is set.
    pub has_domain: bool,
    /// `GitLabRepoURL` starts with the configured prefix.
    pub is_git_repo: bool,
    /// `Suffix` contains `ob-test`.
    pub is_ob_test: bool,
}

impl Predicates {
    pub fn from_config(config: &OnboardingConfig, gitlab_prefix: &str) -> Self {
        Self {
            has_domain: config.has_domain(),
            is_git_repo: config.is_git_repo(gitlab_prefix),
            is_ob_test: config.is_ob_test(),
        }
    }
}

/// Source variant rendered into `kustomization.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryTemplate {
    GitGate,
    Gateway,
    GitRepo,
    AppTest,
    Default,
    Delete,
}

impl PrimaryTemplate {
    pub fn source_file(self) -> &'static str {
        match self {
            PrimaryTemplate::GitGate => "kustomization-git-gate.yaml",
            PrimaryTemplate::Gateway => "kustomization-gateway.yaml",
            PrimaryTemplate::GitRepo => "kustomization-gitrepo.yaml",
            PrimaryTemplate::AppTest => "kustomization-apptest.yaml",
            PrimaryTemplate::Default => "kustomization.yaml",
            PrimaryTemplate::Delete => "kustomization-delete.yaml",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PrimaryTemplate::GitGate => "git-gate",
            PrimaryTemplate::Gateway => "gateway",
            PrimaryTemplate::GitRepo => "git-repo",
            PrimaryTemplate::AppTest => "app-test",
            PrimaryTemplate::Default => "default",
            PrimaryTemplate::Delete => "delete",
        }
    }
}

impl fmt::Display for PrimaryTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pick the primary template for an add/modify run. First match wins.
pub fn select_primary(predicates: &Predicates) -> PrimaryTemplate {
    match predicates {
        Predicates { has_domain: true, is_git_repo: true, .. } => PrimaryTemplate::GitGate,
        Predicates { has_domain: true, .. } => PrimaryTemplate::Gateway,
        Predicates { is_git_repo: true, .. } => PrimaryTemplate::GitRepo,
        Predicates { is_ob_test: true, .. } => PrimaryTemplate::AppTest,
        _ => PrimaryTemplate::Default,
    }
}

/// Why an auxiliary template was not rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Kustomization variants are only ever rendered as the primary.
    KustomizationVariant,
    /// `gateway.yaml` without a domain name.
    NoDomain,
    /// `app.yaml` outside the ob-test family.
    NotObTest,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::KustomizationVariant => "kustomization variant",
            SkipReason::NoDomain => "no FullDomainName provided",
            SkipReason::NotObTest => "suffix is not ob-test",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxiliaryDecision {
    Render,
    Skip(SkipReason),
}

/// Decide whether a template file (by base name) is rendered as an auxiliary.
pub fn auxiliary_decision(base_name: &str, predicates: &Predicates) -> AuxiliaryDecision {
    if base_name.starts_with(KUSTOMIZATION_PREFIX) {
        return AuxiliaryDecision::Skip(SkipReason::KustomizationVariant);
    }
    match base_name {
        GATEWAY_AUXILIARY if !predicates.has_domain => AuxiliaryDecision::Skip(SkipReason::NoDomain),
        APP_AUXILIARY if !predicates.is_ob_test => AuxiliaryDecision::Skip(SkipReason::NotObTest),
        _ => AuxiliaryDecision::Render,
    }
}
