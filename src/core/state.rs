use crate::core::config::Config;
use crate::core::env::{EnvChangeLog, EnvVarManager};
use crate::input::History;

/// Everything that outlives a single loop iteration.
pub struct ShellState {
    pub prompt: String,
    pub history: History,
    pub env_vars: EnvVarManager,
    pub env_log: EnvChangeLog,
}

impl ShellState {
    pub fn new(config: &Config) -> Self {
        ShellState {
            prompt: config.prompt.clone(),
            history: History::new(config.paths.history_path.clone(), config.history_capacity),
            env_vars: EnvVarManager::new(),
            env_log: EnvChangeLog::new(config.paths.env_log_path.clone()),
        }
    }
}
