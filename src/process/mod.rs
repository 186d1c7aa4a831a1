use std::fmt;

pub mod executor;
pub mod signal;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    /// No child could be created. The shell cannot go on after this.
    Fork(std::io::Error),
    /// An argument holds a NUL byte and cannot be passed to `execvp`.
    InvalidArgument(String),
    Wait(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Fork(e) => write!(f, "fork: {}", e),
            ProcessError::InvalidArgument(arg) => {
                write!(f, "argument contains a NUL byte: {:?}", arg)
            }
            ProcessError::Wait(e) => write!(f, "waitpid: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
