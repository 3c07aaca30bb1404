//! Output formatting for results, errors and tokens

use crate::config::OutputFormat;
use crate::error::CliResult;
use console::style;
use quadcalc::prelude::{format_result, CalcError, History, Session, Token};
use serde_json::json;

/// Renders command output in the configured format
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    format: OutputFormat,
    use_color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(OutputFormat::Text, false)
    }
}

impl Printer {
    /// Create a new printer
    #[must_use]
    pub const fn new(format: OutputFormat, use_color: bool) -> Self {
        Self { format, use_color }
    }

    /// Output format in use
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// A successful evaluation
    #[must_use]
    pub fn result(&self, expression: &str, value: f64) -> String {
        let display = format_result(value);
        match self.format {
            OutputFormat::Text if self.use_color => style(display).green().bold().to_string(),
            OutputFormat::Text => display,
            OutputFormat::Json => json!({
                "expression": expression,
                "result": value,
                "display": display,
            })
            .to_string(),
        }
    }

    /// A failed evaluation
    #[must_use]
    pub fn error(&self, expression: &str, err: &CalcError) -> String {
        match self.format {
            OutputFormat::Text => {
                let message = format!("Error: {err}");
                if self.use_color {
                    style(message).red().to_string()
                } else {
                    message
                }
            }
            OutputFormat::Json => {
                let mut value = json!({
                    "expression": expression,
                    "error": err.to_string(),
                    "kind": err.kind(),
                });
                if let CalcError::Lex(lex) = err {
                    value["position"] = json!(lex.position);
                }
                value.to_string()
            }
        }
    }

    /// A token sequence: one per line in text, an array in JSON
    pub fn tokens(&self, tokens: &[Token]) -> CliResult<String> {
        match self.format {
            OutputFormat::Text => Ok(tokens
                .iter()
                .map(|token| match token {
                    Token::Number(n) => format!("number   {n}"),
                    Token::Operator(op) => format!("operator {op}"),
                })
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string(tokens)?),
        }
    }

    /// What a keypad session shows
    #[must_use]
    pub fn display(&self, keys: &str, session: &Session) -> String {
        let display = session.display();
        match self.format {
            OutputFormat::Text if self.use_color && session.last_error().is_some() => {
                style(display).red().to_string()
            }
            OutputFormat::Text => display,
            OutputFormat::Json => json!({
                "keys": keys,
                "display": display,
                "error": session.last_error().map(|err| err.kind()),
            })
            .to_string(),
        }
    }

    /// History listing, oldest first
    pub fn history(&self, history: &History) -> CliResult<String> {
        match self.format {
            OutputFormat::Text => Ok(history.export_formatted()),
            OutputFormat::Json => Ok(history.to_json()?),
        }
    }
}
