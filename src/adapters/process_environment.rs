use std::env::{self, VarError};

use crate::domain::AppError;
use crate::ports::EnvironmentSource;

/// Reads variables from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentSource for ProcessEnvironment {
    fn var(&self, key: &str) -> Result<Option<String>, AppError> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => {
                Err(AppError::config_error(format!("Environment variable {} is not valid UTF-8", key)))
            }
        }
    }
}
