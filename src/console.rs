//! Line-oriented console used for menus, reports and recovery prompts.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crossterm::style::{Stylize, style};
use filebatch_core::ErrorDecision;
use filebatch_ops::InteractionSurface;
use strum::IntoEnumIterator;

/// Reads answers from `R` and writes everything to `W`.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Print `prompt` and read one line without its terminator.
    ///
    /// Returns `None` once the input is closed.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> InteractionSurface for Console<R, W> {
    fn report_error(&mut self, message: &str) {
        let result = if self.color {
            writeln!(self.output, "{}", style(message).red())
        } else {
            writeln!(self.output, "{message}")
        };
        if let Err(e) = result {
            tracing::warn!("Failed to write error report: {e}");
        }
    }

    fn prompt_error_decision(&mut self, message: &str) -> ErrorDecision {
        let _ = self.say(format!("Error: {message}"));
        for decision in ErrorDecision::iter() {
            let _ = self.say(format!("{}: {}", decision.ordinal(), decision.label()));
        }

        loop {
            match self.ask("Your choice: ") {
                Ok(Some(answer)) => match answer.parse::<ErrorDecision>() {
                    Ok(decision) => return decision,
                    Err(_) => {
                        let _ = self.say("Please enter a valid number (0-2)");
                    }
                },
                Ok(None) => {
                    tracing::info!("Input closed while prompting, stopping batch");
                    return ErrorDecision::Stop;
                }
                Err(e) => {
                    tracing::warn!("Failed to read decision: {e}");
                    return ErrorDecision::Stop;
                }
            }
        }
    }
}
