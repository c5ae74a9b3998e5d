//! Line-oriented prompting on top of the [`Console`] port.
//!
//! Malformed answers are never errors: booleans and menu choices re-prompt
//! until they get something usable, and end-of-input reads as an empty
//! answer (which selects the default where there is one). Only console I/O
//! failures propagate.

use std::fmt::Display;

use tracing::trace;

use crate::{
    application::ports::Console,
    domain::text::{heading_lines, wrap_text},
    error::CoreResult,
};

/// Prompt helpers bound to one console.
pub struct Prompter<'a> {
    console: &'a dyn Console,
}

impl<'a> Prompter<'a> {
    pub fn new(console: &'a dyn Console) -> Self {
        Self { console }
    }

    /// Print one line.
    pub fn print(&self, text: &str) -> CoreResult<()> {
        self.console.write_line(text)
    }

    /// Print a paragraph reflowed to the standard width.
    pub fn print_wrapped(&self, paragraph: &str) -> CoreResult<()> {
        self.console.write_line(&wrap_text(paragraph))
    }

    /// Print a title framed by `=` rules, preceded by a blank line.
    pub fn print_heading(&self, title: &str) -> CoreResult<()> {
        self.console.write_line("")?;
        for line in heading_lines(title) {
            self.console.write_line(&line)?;
        }
        Ok(())
    }

    /// Show `message`, read one line and trim it. End-of-input yields `""`.
    pub fn prompt_line(&self, message: &str) -> CoreResult<String> {
        let line = self.console.read_line(message)?;
        let answer = line.as_deref().map(str::trim).unwrap_or_default().to_owned();
        trace!(prompt = message.trim_end(), answer = %answer, "Prompt answered");
        Ok(answer)
    }

    /// Prompt with a visible default that an empty answer selects.
    pub fn prompt_text(&self, label: &str, default: &str) -> CoreResult<String> {
        let answer = self.prompt_line(&format!("{label} [default '{default}']: "))?;
        Ok(if answer.is_empty() {
            default.to_owned()
        } else {
            answer
        })
    }

    /// Ask a yes/no question until the answer is `y`, `yes`, `n`, `no` or empty.
    pub fn prompt_bool(&self, label: &str, default: bool) -> CoreResult<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        loop {
            let answer = self.prompt_line(&format!("{label} [{hint}]: "))?;
            match answer.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.print("Please enter y or n.")?,
            }
        }
    }

    /// Numbered menu over `options`; returns the picked option.
    ///
    /// Accepts a 1-based index or an empty answer for `default`. When
    /// `default` is not among `options` the first option is the default.
    pub fn prompt_choice<T>(&self, label: &str, options: &[T], default: T) -> CoreResult<T>
    where
        T: Copy + Display + PartialEq,
    {
        let Some(first) = options.first().copied() else {
            return Ok(default);
        };
        let default_index = options.iter().position(|o| *o == default).unwrap_or(0);

        self.print("")?;
        self.print(label)?;
        for (idx, option) in options.iter().enumerate() {
            let suffix = if idx == default_index { " (default)" } else { "" };
            self.print(&format!("  [{}] {option}{suffix}", idx + 1))?;
        }

        let prompt = format!(
            "Select 1-{} [default {}]: ",
            options.len(),
            default_index + 1
        );
        loop {
            let answer = self.prompt_line(&prompt)?;
            if answer.is_empty() {
                return Ok(options.get(default_index).copied().unwrap_or(first));
            }
            if answer.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(n) = answer.parse::<usize>() {
                    if (1..=options.len()).contains(&n) {
                        return Ok(options[n - 1]);
                    }
                }
            }
            self.print("Invalid choice, try again.")?;
        }
    }
}
