use super::ConfigError;
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_HISTORY_FILE: &str = "history.txt";
pub const DEFAULT_ENV_FILE: &str = "env.txt";

/// Locations of the two files the shell writes.
///
/// Relative paths are anchored to the directory the shell started in, so a
/// later `cd` does not move them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub history_path: PathBuf,
    pub env_log_path: PathBuf,
}

impl ConfigPaths {
    pub fn new(history: Option<&str>, env_log: Option<&str>) -> Result<Self, ConfigError> {
        let base = env::current_dir().map_err(ConfigError::CurrentDir)?;
        Ok(Self::anchored(&base, history, env_log))
    }

    pub fn anchored(base: &Path, history: Option<&str>, env_log: Option<&str>) -> Self {
        ConfigPaths {
            history_path: base.join(history.unwrap_or(DEFAULT_HISTORY_FILE)),
            env_log_path: base.join(env_log.unwrap_or(DEFAULT_ENV_FILE)),
        }
    }
}
