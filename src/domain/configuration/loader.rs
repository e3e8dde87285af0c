//! Onboarding configuration loading from environment variables.

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::field::Field;
use super::onboarding::{OnboardingConfig, composite_name};
use crate::domain::{AppError, CorrelationId};
use crate::ports::EnvironmentSource;

/// Load the onboarding record from `env`.
///
/// Unset variables read as empty strings. Defaults are applied to empty
/// values before case normalization, which happens exactly once here.
pub fn load_config(env: &impl EnvironmentSource) -> Result<OnboardingConfig, AppError> {
    info!("Loading configuration from environment variables");

    let mut raw = BTreeMap::new();
    for field in Field::ALL {
        let Some(var) = field.env_var() else {
            continue;
        };
        let value = env.var(var)?.unwrap_or_default();
        debug!(variable = var, value = %value, "Loaded variable");
        raw.insert(field, value);
    }

    let id = CorrelationId::generate()?;
    info!(id = %id, "Generated correlation id");

    apply_defaults(&mut raw);

    let normalized = raw
        .into_iter()
        .map(|(field, value)| {
            let value = field.case().apply(&value);
            (field, value)
        })
        .collect();

    Ok(OnboardingConfig::from_normalized(normalized, id))
}

fn value_of(raw: &BTreeMap<Field, String>, field: Field) -> String {
    raw.get(&field).cloned().unwrap_or_default()
}

fn apply_defaults(raw: &mut BTreeMap<Field, String>) {
    if value_of(raw, Field::AppSubDomain).is_empty() {
        let subdomain = composite_name(
            &value_of(raw, Field::Swci),
            &value_of(raw, Field::OpEnvironment),
            &value_of(raw, Field::Suffix),
        );
        info!(value = %subdomain, "Set default AppSubDomain");
        raw.insert(Field::AppSubDomain, subdomain);
    }

    for field in Field::ALL {
        if let Some(default) = field.static_default()
            && value_of(raw, field).is_empty()
        {
            info!(field = field.name(), value = default, "Set default");
            raw.insert(field, default.to_string());
        }
    }
}
