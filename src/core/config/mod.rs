use std::fmt;

mod paths;

pub use paths::{ConfigPaths, DEFAULT_ENV_FILE, DEFAULT_HISTORY_FILE};

use crate::flags::Flags;
use crate::input::history::DEFAULT_CAPACITY;

pub const DEFAULT_PROMPT: &str = "shell> ";
pub const PROMPT_SUFFIX: &str = "> ";

pub struct Config {
    pub paths: ConfigPaths,
    pub history_capacity: usize,
    pub prompt: String,
}

impl Config {
    pub fn new(paths: ConfigPaths) -> Self {
        Config {
            paths,
            history_capacity: DEFAULT_CAPACITY,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn from_flags(flags: &Flags) -> Result<Self, ConfigError> {
        let paths = ConfigPaths::new(
            flags.get_value("history-file").map(String::as_str),
            flags.get_value("env-file").map(String::as_str),
        )?;
        Ok(Config::new(paths))
    }
}

#[derive(Debug)]
pub enum ConfigError {
    CurrentDir(std::io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::CurrentDir(e) => write!(f, "Cannot resolve working directory: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
