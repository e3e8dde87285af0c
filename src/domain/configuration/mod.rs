pub mod field;
pub mod loader;
pub mod onboarding;

pub use field::{Case, Field};
pub use loader::load_config;
pub use onboarding::{OB_TEST_MARKER, OnboardingConfig};
