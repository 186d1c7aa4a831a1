use std::io::{self, BufRead, IsTerminal, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::ShellError;

/// Result of one prompt-and-read.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    Interrupted,
    Eof,
}

pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError>;
}

/// Picks the line editor for a terminal, plain reads for anything else.
pub fn stdin_source() -> Result<Box<dyn LineSource>, ShellError> {
    if io::stdin().is_terminal() {
        Ok(Box::new(EditorSource::new()?))
    } else {
        Ok(Box::new(PipedSource::new(io::stdin().lock(), io::stdout())))
    }
}

pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self, ShellError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(ReadlineError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
                log::warn!("discarding undecodable input line: {}", e);
                Ok(ReadOutcome::Line(String::new()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Writes the prompt itself and reads raw lines, for pipes and files.
///
/// Bytes are passed through untouched; invalid UTF-8 is replaced rather than
/// rejected so one bad line cannot stop the session.
pub struct PipedSource<R, W> {
    reader: R,
    out: W,
    buf: Vec<u8>,
}

impl<R: BufRead, W: Write> PipedSource<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self {
            reader,
            out,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead, W: Write> LineSource for PipedSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        self.buf.clear();
        let read = loop {
            match self.reader.read_until(b'\n', &mut self.buf) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                other => break other?,
            }
        };
        if read == 0 {
            return Ok(ReadOutcome::Eof);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        Ok(ReadOutcome::Line(
            String::from_utf8_lossy(&self.buf).into_owned(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(input: &[u8]) -> PipedSource<&[u8], Vec<u8>> {
        PipedSource::new(input, Vec::new())
    }

    #[test]
    fn test_prompt_is_written_before_each_read() {
        let mut src = source(b"echo hi\n");

        assert_eq!(
            src.read_line("shell> ").unwrap(),
            ReadOutcome::Line("echo hi".into())
        );
        assert_eq!(src.read_line("dev> ").unwrap(), ReadOutcome::Eof);
        assert_eq!(src.out, b"shell> dev> ");
    }

    #[test]
    fn test_bytes_are_not_edited() {
        let mut src = source(b"echo ab\x08c\n");
        assert_eq!(
            src.read_line("").unwrap(),
            ReadOutcome::Line("echo ab\x08c".into())
        );
    }

    #[test]
    fn test_invalid_utf8_does_not_stop_reading() {
        let mut src = source(b"echo \xff\xfe\necho after\n");

        assert_eq!(
            src.read_line("").unwrap(),
            ReadOutcome::Line("echo \u{fffd}\u{fffd}".into())
        );
        assert_eq!(
            src.read_line("").unwrap(),
            ReadOutcome::Line("echo after".into())
        );
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut src = source(b"pwd");
        assert_eq!(src.read_line("").unwrap(), ReadOutcome::Line("pwd".into()));
        assert_eq!(src.read_line("").unwrap(), ReadOutcome::Eof);
    }
}
