//! CLI entry point - the composition root.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use fbprobe_cli::{Cli, CliError, ProbeArgs, handlers, logging};
use fbprobe_runtime::DefaultFramebufferOpener;

fn run(cli: &Cli) -> Result<(), CliError> {
    logging::init(cli.verbose)?;

    let opener = DefaultFramebufferOpener::default();
    handlers::probe::execute(opener, &ProbeArgs::from(cli), io::stdout().lock())
}

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
