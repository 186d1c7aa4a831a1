use std::io::Write;

use crate::core::commands::{BuiltinRegistry, CommandContext, Flow};
use crate::core::config::Config;
use crate::core::state::ShellState;
use crate::error::ShellError;
use crate::highlight::MessageStyler;
use crate::input::tokenize;
use crate::process::ProcessExecutor;

/// One read-eval step: tokenize, pick built-in or external, run, record.
pub struct Dispatcher {
    state: ShellState,
    builtins: BuiltinRegistry,
    processes: ProcessExecutor,
    styler: MessageStyler,
}

impl Dispatcher {
    pub fn new(config: &Config) -> Self {
        Dispatcher {
            state: ShellState::new(config),
            builtins: BuiltinRegistry::new(),
            processes: ProcessExecutor::new(),
            styler: MessageStyler::new(),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.state.prompt
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    /// Handles one input line.
    ///
    /// Built-ins are recorded before they run, whatever their outcome,
    /// including usage errors. External commands are recorded only when they
    /// exit with status 0.
    pub fn dispatch(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow, ShellError> {
        let args = tokenize(line);
        let Some((name, rest)) = args.split_first() else {
            return Ok(Flow::Continue);
        };

        if self.builtins.is_builtin(name) {
            log::debug!("builtin {} {:?}", name, rest);
            self.record(line);

            let mut ctx = CommandContext {
                state: &mut self.state,
                out,
            };
            if let Some(result) = self.builtins.execute(name, rest, &mut ctx) {
                return Ok(result?);
            }
        }

        log::debug!("external {:?}", args);
        if self.processes.spawn_process(&args)? {
            self.record(line);
        }
        Ok(Flow::Continue)
    }

    /// Writes a non-fatal diagnostic to standard error.
    pub fn report(&self, err: &dyn std::fmt::Display) {
        eprintln!("{}", self.styler.error(&err.to_string()));
    }

    fn record(&mut self, line: &str) {
        if let Err(e) = self.state.history.add(line) {
            eprintln!("{}", self.styler.warning(&e.to_string()));
        }
    }
}
