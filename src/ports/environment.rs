use crate::domain::AppError;

/// Port for reading named configuration variables.
pub trait EnvironmentSource {
    /// Value of `key`, or `None` when unset.
    ///
    /// A set but unreadable value (e.g. not valid Unicode) is an error.
    fn var(&self, key: &str) -> Result<Option<String>, AppError>;
}
