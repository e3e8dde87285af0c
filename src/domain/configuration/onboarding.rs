use std::collections::BTreeMap;

use super::field::Field;
use crate::domain::CorrelationId;

/// Suffix marker selecting the app-test overlay family.
pub const OB_TEST_MARKER: &str = "ob-test";

/// Normalized onboarding request.
///
/// Built once by the loader and read-only afterwards. Every field of the
/// schema is present; unset variables hold an empty string.
#[derive(Debug, Clone)]
pub struct OnboardingConfig {
    values: BTreeMap<Field, String>,
    id: CorrelationId,
}

impl OnboardingConfig {
    /// Assemble a record from already-normalized values.
    pub(crate) fn from_normalized(mut values: BTreeMap<Field, String>, id: CorrelationId) -> Self {
        for field in Field::ALL {
            values.entry(field).or_default();
        }
        values.insert(Field::Id, id.as_str().to_string());
        Self { values, id }
    }

    /// Value of a field (empty when unset).
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    /// Iterate over `(field, value)` pairs in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn id(&self) -> &CorrelationId {
        &self.id
    }

    pub fn action(&self) -> &str {
        self.get(Field::Action)
    }

    pub fn swci(&self) -> &str {
        self.get(Field::Swci)
    }

    pub fn suffix(&self) -> &str {
        self.get(Field::Suffix)
    }

    pub fn region(&self) -> &str {
        self.get(Field::Region)
    }

    pub fn op_environment(&self) -> &str {
        self.get(Field::OpEnvironment)
    }

    pub fn cluster_name(&self) -> &str {
        self.get(Field::ClusterName)
    }

    /// `<swci>-<openvironment>-<suffix>`: leaf directory name and default subdomain.
    pub fn composite_name(&self) -> String {
        composite_name(self.swci(), self.op_environment(), self.suffix())
    }

    pub fn has_domain(&self) -> bool {
        !self.get(Field::FullDomainName).is_empty()
    }

    /// True when the GitLab URL starts with `prefix` (compared lower-cased).
    pub fn is_git_repo(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.get(Field::GitLabRepoUrl).starts_with(&prefix.to_lowercase())
    }

    pub fn is_ob_test(&self) -> bool {
        self.suffix().contains(OB_TEST_MARKER)
    }
}

pub(crate) fn composite_name(swci: &str, op_environment: &str, suffix: &str) -> String {
    format!("{}-{}-{}", swci, op_environment, suffix)
}
