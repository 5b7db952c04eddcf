mod commands;
mod terminal;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use commands::CommandLine;
use greeter_common::config::Config;
use terminal::logging;
use tracing::{error, info, trace};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    let cfg = Config::new(commands.quiet, commands.verbose, commands.no_color);
    logging::init_logging(&cfg);
    trace!(?cfg, "configuration loaded");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Goes through the subscriber so `-q` silences it too.
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    info!("greeter v{}", env!("CARGO_PKG_VERSION"));
    greeter_core::greet(io::stdout().lock()).context("failed to write greeting to stdout")
}
