use crate::core::commands::CommandError;
use crate::core::config::ConfigError;
use crate::process::ProcessError;

#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    Command(CommandError),
    Process(ProcessError),
    Config(ConfigError),
    Flag(String),
    CtrlC(String),
}

impl ShellError {
    /// Whether the shell has to stop. Only losing the ability to create
    /// child processes qualifies.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ShellError::Process(ProcessError::Fork(_)))
    }
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}

impl From<CommandError> for ShellError {
    fn from(err: CommandError) -> Self {
        ShellError::Command(err)
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::Process(err)
    }
}

impl From<ConfigError> for ShellError {
    fn from(err: ConfigError) -> Self {
        ShellError::Config(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::Command(e) => write!(f, "{}", e),
            ShellError::Process(e) => write!(f, "{}", e),
            ShellError::Config(e) => write!(f, "Config error: {}", e),
            ShellError::Flag(msg) => write!(f, "Flag error: {}", msg),
            ShellError::CtrlC(msg) => write!(f, "Ctrl-C error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_only_fork_failure_is_fatal() {
        let fork = ShellError::from(ProcessError::Fork(io::Error::from_raw_os_error(libc::EAGAIN)));
        assert!(fork.is_fatal());

        let usage = ShellError::from(CommandError::Usage("Usage: setenv VAR VALUE"));
        assert!(!usage.is_fatal());
        assert!(!ShellError::from(ProcessError::InvalidArgument("a\0b".into())).is_fatal());
        assert!(!ShellError::Flag("x".into()).is_fatal());
    }

    #[test]
    fn test_command_errors_display_unwrapped() {
        let err = ShellError::from(CommandError::Usage("Expected argument to \"cd\""));
        assert_eq!(err.to_string(), "Expected argument to \"cd\"");
    }
}
