//! Terminal console adapter: stdout through `console::Term`, stdin line reads.

use std::io::{self, BufRead};

use cleanddd_core::{
    application::{ApplicationError, ports::Console},
    error::{CoreError, CoreResult},
};
use console::Term;
use tracing::trace;

/// Production console bound to the process's stdin and stdout.
#[derive(Debug, Clone)]
pub struct StdConsole {
    term: Term,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn write_line(&self, text: &str) -> CoreResult<()> {
        self.term.write_line(text).map_err(console_error)
    }

    fn read_line(&self, prompt: &str) -> CoreResult<Option<String>> {
        self.term.write_str(prompt).map_err(console_error)?;
        self.term.flush().map_err(console_error)?;

        let line = read_input_line(&mut io::stdin().lock()).map_err(console_error)?;
        if line.is_none() {
            trace!("stdin reached end of input");
            // Keep the transcript tidy when input runs out mid-prompt.
            self.term.write_line("").map_err(console_error)?;
        }
        Ok(line)
    }
}

/// Read one line from `reader` without its line ending; `None` at EOF.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the read, so a stray byte is just an unrecognised answer.
fn read_input_line(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(strip_line_ending(&line).to_owned()))
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

fn console_error(e: io::Error) -> CoreError {
    ApplicationError::Console {
        reason: e.to_string(),
    }
    .into()
}
