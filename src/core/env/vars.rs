use super::EnvError;
use std::env;

/// Mutates the process environment inherited by child processes.
#[derive(Clone, Debug, Default)]
pub struct EnvVarManager;

impl EnvVarManager {
    pub fn new() -> Self {
        Self
    }

    pub fn set(&self, name: &str, value: &str) -> Result<(), EnvError> {
        Self::validate_name(name)?;
        if value.contains('\0') {
            return Err(EnvError::InvalidValue(name.to_string()));
        }

        env::set_var(name, value);
        Ok(())
    }

    /// Removing a variable that is not set succeeds, as with `unsetenv(3)`.
    pub fn unset(&self, name: &str) -> Result<(), EnvError> {
        Self::validate_name(name)?;
        env::remove_var(name);
        Ok(())
    }

    fn validate_name(name: &str) -> Result<(), EnvError> {
        if name.is_empty() || name.contains('=') || name.contains('\0') {
            return Err(EnvError::InvalidName(name.to_string()));
        }
        Ok(())
    }
}
