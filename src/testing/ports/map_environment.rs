//! Test double for `EnvironmentSource`.

use std::collections::{HashMap, HashSet};

use crate::domain::AppError;
use crate::ports::EnvironmentSource;

/// Environment backed by a fixed map instead of the process environment.
#[derive(Clone, Debug, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
    unreadable: HashSet<String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let vars = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Self { vars, unreadable: HashSet::new() }
    }

    /// Mark `key` as set but unreadable.
    pub fn with_unreadable(mut self, key: &str) -> Self {
        self.unreadable.insert(key.to_string());
        self
    }
}

impl EnvironmentSource for MapEnvironment {
    fn var(&self, key: &str) -> Result<Option<String>, AppError> {
        if self.unreadable.contains(key) {
            return Err(AppError::config_error(format!("Environment variable {} is not valid UTF-8", key)));
        }
        Ok(self.vars.get(key).cloned())
    }
}
