//! quadcalc command-line library
//!
//! Argument parsing, configuration, logging and output rendering for the
//! `quadcalc` binary. Commands run through [`Runner`], which writes to any
//! `std::io::Write` and can be tested without a terminal.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
mod runner;

pub use commands::{Cli, ColorArg, Commands, ExpressionArgs, FormatArg, KeysArgs, ReplArgs};
pub use config::{CliConfig, ColorChoice, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::init_tracing;
pub use output::Printer;
pub use runner::Runner;
