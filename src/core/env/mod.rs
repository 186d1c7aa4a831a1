mod change_log;
mod vars;

pub use change_log::{EnvChange, EnvChangeLog};
pub use vars::EnvVarManager;

#[derive(Debug)]
pub enum EnvError {
    InvalidName(String),
    InvalidValue(String),
}

impl EnvError {
    /// The equivalent OS error, as `setenv(3)`/`unsetenv(3)` would report it.
    pub fn as_os_error(&self) -> std::io::Error {
        std::io::Error::from_raw_os_error(libc::EINVAL)
    }
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::InvalidName(name) => {
                write!(f, "{}: invalid variable name '{}'", self.as_os_error(), name)
            }
            EnvError::InvalidValue(name) => {
                write!(f, "{}: invalid value for '{}'", self.as_os_error(), name)
            }
        }
    }
}

impl std::error::Error for EnvError {}
