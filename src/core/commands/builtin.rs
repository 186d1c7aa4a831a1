use super::{Command, CommandContext, CommandError, Flow};
use std::io::Write;

pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[J";

const HELP_TEXT: &str = "\
Available commands:
cd <directory>: Change directory
pwd: Print current working directory
echo <text>: Print text
setenv <var> <value>: Set environment variable
unsetenv <var>: Unset environment variable
exit: Exit the shell
chprompt <prompt>: Change shell prompt
history: Show command history
clear: Clear the terminal screen
help: Show this help
";

/// Asks the loop to run the farewell-and-exit routine.
#[derive(Clone, Debug, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _args: &[String], _ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        Ok(Flow::Exit)
    }
}

#[derive(Clone, Debug, Default)]
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        writeln!(ctx.out, "{}", args.join(" "))?;
        Ok(Flow::Continue)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        write!(ctx.out, "{}", CLEAR_SCREEN)?;
        Ok(Flow::Continue)
    }
}

#[derive(Clone, Debug, Default)]
pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let cwd = std::env::current_dir().map_err(CommandError::Os)?;
        writeln!(ctx.out, "{}", cwd.display())?;
        Ok(Flow::Continue)
    }
}

#[derive(Clone, Debug, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        write!(ctx.out, "{}", HELP_TEXT)?;
        Ok(Flow::Continue)
    }
}
