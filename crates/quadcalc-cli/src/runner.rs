//! Command execution
//!
//! Commands write to any `Write` so they can be driven from tests without a
//! terminal.

use crate::commands::ReplArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Printer;
use quadcalc::prelude::{evaluate_expression, tokenize, History, Session};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

/// Runs CLI commands against a configuration
#[derive(Debug, Clone)]
pub struct Runner {
    config: CliConfig,
    printer: Printer,
}

impl Runner {
    /// Create a runner; color is resolved once, up front
    #[must_use]
    pub fn new(config: CliConfig) -> Self {
        let printer = Printer::new(config.format, config.color.should_color());
        Self { config, printer }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &CliConfig {
        &self.config
    }

    /// Evaluates one expression
    ///
    /// In JSON mode the error object is written to `out` before the error is
    /// returned, so scripted callers always get a document.
    pub fn eval(&self, expression: &str, out: &mut impl Write) -> CliResult<()> {
        match evaluate_expression(expression) {
            Ok(value) => {
                writeln!(out, "{}", self.printer.result(expression, value))?;
                Ok(())
            }
            Err(err) => {
                if self.printer.format() == crate::config::OutputFormat::Json {
                    writeln!(out, "{}", self.printer.error(expression, &err))?;
                }
                Err(err.into())
            }
        }
    }

    /// Prints the token sequence of an expression
    pub fn tokens(&self, expression: &str, out: &mut impl Write) -> CliResult<()> {
        let tokens = tokenize(expression)?;
        debug!(count = tokens.len(), "tokenized");
        writeln!(out, "{}", self.printer.tokens(&tokens)?)?;
        Ok(())
    }

    /// Feeds keypad characters to a fresh session and prints the display
    ///
    /// A failed `=` is not a command failure: the display shows it, as a
    /// calculator screen would.
    pub fn keys(&self, keys: &str, out: &mut impl Write) -> CliResult<()> {
        let mut session = Session::new().with_error_style(self.config.error_style());
        session.push_str(keys)?;
        writeln!(out, "{}", self.printer.display(keys, &session))?;
        Ok(())
    }

    /// Line-oriented evaluation loop
    ///
    /// Lines starting with `:` are commands: `:history`, `:clear`, `:quit`.
    /// Evaluation errors are printed and the loop continues.
    pub fn repl(
        &self,
        args: &ReplArgs,
        input: impl BufRead,
        out: &mut impl Write,
        prompt: bool,
    ) -> CliResult<()> {
        if args.history_size == 0 {
            return Err(CliError::invalid_argument("--history-size must be at least 1"));
        }

        let mut history = match &args.history_file {
            Some(path) => load_history(path, args.history_size)?,
            None => History::with_capacity(args.history_size),
        };

        // History is saved even when reading input fails part way
        let outcome = self.read_lines(&mut history, input, out, prompt);
        if let Some(path) = &args.history_file {
            std::fs::write(path, history.to_json()?)?;
            info!(path = %path.display(), entries = history.len(), "saved history");
        }
        outcome
    }

    fn read_lines(
        &self,
        history: &mut History,
        input: impl BufRead,
        out: &mut impl Write,
        prompt: bool,
    ) -> CliResult<()> {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        for line in input.lines() {
            let line = line?;
            let line = line.trim();

            match line {
                "" => {}
                ":quit" | ":q" => break,
                ":history" => {
                    if !history.is_empty() {
                        writeln!(out, "{}", self.printer.history(history)?)?;
                    }
                }
                ":clear" => history.clear(),
                command if command.starts_with(':') => {
                    writeln!(out, "Unknown command: {command}")?;
                }
                expression => match evaluate_expression(expression) {
                    Ok(value) => {
                        history.record(expression, value);
                        writeln!(out, "{}", self.printer.result(expression, value))?;
                    }
                    Err(err) => {
                        writeln!(out, "{}", self.printer.error(expression, &err))?;
                    }
                },
            }

            if prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
        }

        Ok(())
    }
}

/// Reads a history file, starting empty when it does not exist yet
fn load_history(path: &Path, capacity: usize) -> CliResult<History> {
    if !path.exists() {
        return Ok(History::with_capacity(capacity));
    }

    let history = History::from_json(&std::fs::read_to_string(path)?, capacity)?;
    debug!(path = %path.display(), entries = history.len(), "loaded history");
    Ok(history)
}
