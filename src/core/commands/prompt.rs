use super::{Command, CommandContext, CommandError, Flow};
use crate::core::config::PROMPT_SUFFIX;

#[derive(Clone, Debug, Default)]
pub struct ChpromptCommand;

impl Command for ChpromptCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let text = args
            .first()
            .ok_or(CommandError::Usage("Usage: chprompt NEW_PROMPT"))?;

        ctx.state.prompt = format!("{}{}", text, PROMPT_SUFFIX);
        log::debug!("prompt is now {:?}", ctx.state.prompt);
        Ok(Flow::Continue)
    }
}
