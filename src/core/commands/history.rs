use super::{Command, CommandContext, CommandError, Flow};
use std::io::Write;

#[derive(Clone, Debug, Default)]
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        for (index, command) in ctx.state.history.list() {
            writeln!(ctx.out, "{} {}", index, command)?;
        }
        Ok(Flow::Continue)
    }
}
