use std::io;

mod dispatch;

pub use dispatch::Dispatcher;

use crate::{
    core::{commands::Flow, config::Config},
    error::ShellError,
    input::{reader, LineSource, ReadOutcome},
    process::signal,
};

pub struct Shell {
    pub(crate) input: Box<dyn LineSource>,
    pub(crate) dispatcher: Dispatcher,
}

impl Shell {
    pub fn new(config: Config) -> Result<Self, ShellError> {
        let input = reader::stdin_source()?;
        let dispatcher = Dispatcher::new(&config);

        signal::install_interrupt_handler()?;

        Ok(Shell { input, dispatcher })
    }

    /// Prompts, reads and dispatches until `exit`, an interrupt or the end
    /// of input ends the process. Returns only when stdin cannot be read.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = self.dispatcher.prompt().to_string();
            match self.input.read_line(&prompt)? {
                ReadOutcome::Line(line) => self.handle_line(&line),
                ReadOutcome::Interrupted | ReadOutcome::Eof => signal::terminate(),
            }
        }
    }

    fn handle_line(&mut self, line: &str) {
        match self.dispatcher.dispatch(line, &mut io::stdout()) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => signal::terminate(),
            Err(e) if e.is_fatal() => {
                self.dispatcher.report(&e);
                std::process::exit(signal::EXIT_STATUS);
            }
            Err(e) => self.dispatcher.report(&e),
        }
    }
}
