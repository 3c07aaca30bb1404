//! quadcalc: four-function arithmetic from the command line
//!
//! ## Usage
//!
//! ```bash
//! quadcalc eval "2+3*4"          # 14
//! quadcalc tokens "1.5 - .5"     # one token per line
//! quadcalc keys "2+3=*4="        # keypad session, prints 20
//! quadcalc repl                  # one expression per line from stdin
//! ```

use clap::Parser;
use quadcalc_cli::{init_tracing, Cli, CliConfig, CliResult, Commands, Runner, Verbosity};
use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli);
    init_tracing(config.verbosity);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Eval(args) => Runner::new(config).eval(&args.joined(), &mut out),
        Commands::Tokens(args) => Runner::new(config).tokens(&args.joined(), &mut out),
        Commands::Keys(args) => Runner::new(config.with_detailed_errors(args.detailed_errors))
            .keys(&args.keys, &mut out),
        Commands::Repl(args) => {
            let stdin = std::io::stdin();
            let prompt = stdin.is_terminal() && !config.verbosity.is_quiet();
            Runner::new(config).repl(&args, stdin.lock(), &mut out, prompt)
        }
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.into())
        .with_format(cli.format.into())
}
