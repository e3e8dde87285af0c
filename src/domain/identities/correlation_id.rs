use std::fmt;

use rand_core::{OsRng, RngCore};
use uuid::Uuid;

use crate::domain::AppError;

/// Per-invocation identifier used to correlate log lines.
///
/// Guarantees:
/// - 16 random bytes from the operating system, no fixed version bits
/// - Rendered as 32 lower-case hex characters
///
/// Never persisted; a fresh value is generated on every run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Draw a new identifier from the OS randomness source.
    pub fn generate() -> Result<Self, AppError> {
        Self::generate_with(&mut OsRng)
    }

    pub(crate) fn generate_with(rng: &mut impl RngCore) -> Result<Self, AppError> {
        let mut bytes = [0u8; 16];
        rng.try_fill_bytes(&mut bytes).map_err(|err| AppError::Randomness(err.to_string()))?;
        Ok(Self(Uuid::from_bytes(bytes).simple().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CorrelationId> for String {
    fn from(val: CorrelationId) -> Self {
        val.0
    }
}
