use super::{Command, CommandContext, CommandError, Flow};
use crate::core::env::EnvChange;

/// `setenv VAR VALUE`. Extra arguments are ignored.
#[derive(Clone, Debug, Default)]
pub struct SetenvCommand;

impl Command for SetenvCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let (name, value) = match args {
            [name, value, ..] => (name.as_str(), value.as_str()),
            _ => return Err(CommandError::Usage("Usage: setenv VAR VALUE")),
        };

        ctx.state.env_vars.set(name, value)?;
        ctx.state
            .env_log
            .record(&EnvChange::Set { name, value })
            .map_err(CommandError::EnvLog)?;
        Ok(Flow::Continue)
    }
}

#[derive(Clone, Debug, Default)]
pub struct UnsetenvCommand;

impl Command for UnsetenvCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let name = args
            .first()
            .map(String::as_str)
            .ok_or(CommandError::Usage("Usage: unsetenv VAR"))?;

        ctx.state.env_vars.unset(name)?;
        ctx.state
            .env_log
            .record(&EnvChange::Unset { name })
            .map_err(CommandError::EnvLog)?;
        Ok(Flow::Continue)
    }
}
