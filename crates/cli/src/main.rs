use std::process::ExitCode;

use clap::Parser;

mod commands;

use commands::Command;
use rowcast_runtime::logging;

#[derive(Debug, Parser)]
#[command(
    name = "rowcast",
    version,
    about = "Replay a CSV table as a paced UDP feed"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::Stream(args) => commands::stream::run(args),
        Command::Listen(args) => commands::listen::run(args),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
