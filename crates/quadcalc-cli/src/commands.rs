//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// quadcalc: four-function arithmetic evaluator
#[derive(Parser, Debug)]
#[command(name = "quadcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Output format (text, json)
    #[arg(long, default_value = "text", global = true, env = "QUADCALC_FORMAT")]
    pub format: FormatArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate an expression and print the result
    Eval(ExpressionArgs),

    /// Print the tokens of an expression
    Tokens(ExpressionArgs),

    /// Feed keypad characters to a calculator session and print the display
    Keys(KeysArgs),

    /// Read expressions from stdin, one per line
    Repl(ReplArgs),
}

/// Arguments holding an expression
#[derive(Args, Debug)]
pub struct ExpressionArgs {
    /// Expression; several arguments are joined with spaces
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub expression: Vec<String>,
}

impl ExpressionArgs {
    /// The expression as one string
    #[must_use]
    pub fn joined(&self) -> String {
        self.expression.join(" ")
    }
}

/// Arguments for the keys command
#[derive(Args, Debug)]
pub struct KeysArgs {
    /// Keypad characters: 0-9 . + - * / = C
    #[arg(allow_hyphen_values = true)]
    pub keys: String,

    /// Show the specific error instead of "Error"
    #[arg(long)]
    pub detailed_errors: bool,
}

/// Arguments for the repl command
#[derive(Args, Debug)]
pub struct ReplArgs {
    /// Maximum number of history entries kept
    #[arg(long, default_value_t = 100)]
    pub history_size: usize,

    /// Load history from and save it to this JSON file
    #[arg(long)]
    pub history_file: Option<PathBuf>,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Plain text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for crate::config::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
