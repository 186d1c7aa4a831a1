use super::{Command, CommandContext, CommandError, Flow};
use std::env;

#[derive(Clone, Debug, Default)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, args: &[String], _ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let dir = args
            .first()
            .ok_or(CommandError::Usage("Expected argument to \"cd\""))?;

        env::set_current_dir(dir).map_err(CommandError::Os)?;
        Ok(Flow::Continue)
    }
}
