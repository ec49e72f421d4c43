use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Args;
use log::{error, info};
use rowcast_feed::{EmitConfig, EmitError, RunSummary, resolve_destination};
use rowcast_runtime::{
    DEFAULT_DELAY_SECS, DEFAULT_HOST, DEFAULT_MIRROR_FILE, DEFAULT_PORT, DEFAULT_SOURCE_FILE,
    REQUESTED_RECORDS,
};

const BANNER: &str = "===============================================";

#[derive(Debug, Args)]
pub struct StreamArgs {
    /// Host the datagrams are sent to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// UDP port the datagrams are sent to
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// CSV table to replay; its first row is the header
    #[arg(long, short = 'i', default_value = DEFAULT_SOURCE_FILE)]
    pub input: PathBuf,

    /// Mirror table, rewritten on every run
    #[arg(long, short = 'o', default_value = DEFAULT_MIRROR_FILE)]
    pub output: PathBuf,

    /// Maximum number of records to send
    #[arg(long, short = 'n', default_value_t = REQUESTED_RECORDS)]
    pub count: usize,

    /// Seconds to wait after each record
    #[arg(long, default_value_t = DEFAULT_DELAY_SECS)]
    pub delay: u64,
}

pub fn run(args: StreamArgs) -> ExitCode {
    info!("{BANNER}");
    info!("Starting fake streaming process.");

    match execute(&args) {
        Ok(summary) => {
            info!("Streaming complete! {summary}");
            info!("{BANNER}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("An error occurred: {e}");
            ExitCode::from(1)
        }
    }
}

fn execute(args: &StreamArgs) -> Result<RunSummary, EmitError> {
    let destination = resolve_destination(&args.host, args.port)?;
    let config = EmitConfig::new(&args.input, &args.output, destination)
        .with_max_records(args.count)
        .with_delay(Duration::from_secs(args.delay));

    rowcast_feed::run(&config)
}
