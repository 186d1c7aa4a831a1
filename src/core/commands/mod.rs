use std::collections::BTreeMap;
use std::io::Write;

mod builtin;
mod cd;
mod env;
mod history;
mod prompt;

pub use builtin::{ClearCommand, EchoCommand, ExitCommand, HelpCommand, PwdCommand};
pub use cd::CdCommand;
pub use env::{SetenvCommand, UnsetenvCommand};
pub use history::HistoryCommand;
pub use prompt::ChpromptCommand;

use crate::core::env::EnvError;
use crate::core::state::ShellState;

#[derive(Debug)]
pub enum CommandError {
    /// A required argument is missing. Nothing was attempted.
    Usage(&'static str),
    Os(std::io::Error),
    Env(EnvError),
    /// The change was applied but could not be written to the env log.
    EnvLog(std::io::Error),
    Write(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Usage(msg) => write!(f, "{}", msg),
            CommandError::Os(err) => write!(f, "shell: {}", err),
            CommandError::Env(err) => write!(f, "shell: {}", err),
            CommandError::EnvLog(err) => write!(f, "Error opening env log: {}", err),
            CommandError::Write(err) => write!(f, "shell: write error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::Write(err)
    }
}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        CommandError::Env(err)
    }
}

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// What a built-in may touch: the shell state and its output stream.
pub struct CommandContext<'a> {
    pub state: &'a mut ShellState,
    pub out: &'a mut dyn Write,
}

pub trait Command {
    /// `args` excludes the command name.
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
    Echo(EchoCommand),
    Clear(ClearCommand),
    Pwd(PwdCommand),
    Setenv(SetenvCommand),
    Unsetenv(UnsetenvCommand),
    History(HistoryCommand),
    Chprompt(ChpromptCommand),
    Help(HelpCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, ctx),
            CommandType::Exit(cmd) => cmd.execute(args, ctx),
            CommandType::Echo(cmd) => cmd.execute(args, ctx),
            CommandType::Clear(cmd) => cmd.execute(args, ctx),
            CommandType::Pwd(cmd) => cmd.execute(args, ctx),
            CommandType::Setenv(cmd) => cmd.execute(args, ctx),
            CommandType::Unsetenv(cmd) => cmd.execute(args, ctx),
            CommandType::History(cmd) => cmd.execute(args, ctx),
            CommandType::Chprompt(cmd) => cmd.execute(args, ctx),
            CommandType::Help(cmd) => cmd.execute(args, ctx),
        }
    }
}

/// Fixed table of built-ins, keyed by exact, case-sensitive name.
#[derive(Clone)]
pub struct BuiltinRegistry {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();

        commands.insert("cd", CommandType::Cd(CdCommand));
        commands.insert("exit", CommandType::Exit(ExitCommand));
        commands.insert("echo", CommandType::Echo(EchoCommand));
        commands.insert("clear", CommandType::Clear(ClearCommand));
        commands.insert("pwd", CommandType::Pwd(PwdCommand));
        commands.insert("setenv", CommandType::Setenv(SetenvCommand));
        commands.insert("unsetenv", CommandType::Unsetenv(UnsetenvCommand));
        commands.insert("history", CommandType::History(HistoryCommand));
        commands.insert("chprompt", CommandType::Chprompt(ChpromptCommand));
        commands.insert("help", CommandType::Help(HelpCommand));

        Self { commands }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    /// Runs `command` if it is a built-in; `None` means it is not one.
    pub fn execute(
        &self,
        command: &str,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Option<Result<Flow, CommandError>> {
        let cmd = self.commands.get(command)?;
        let result = cmd.execute(args, ctx);
        Some(result.and_then(|flow| {
            ctx.out.flush()?;
            Ok(flow)
        }))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}
