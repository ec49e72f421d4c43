use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use anyhow::{Context, Result};
use clap::Args;
use log::{error, info};
use rowcast_feed::{Listener, resolve_destination};
use rowcast_runtime::{DEFAULT_HOST, DEFAULT_PORT};
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::flag;

#[derive(Debug, Args)]
pub struct ListenArgs {
    /// Address to bind
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// UDP port to bind
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Stop after this many datagrams
    #[arg(long, short = 'n')]
    pub count: Option<usize>,
}

pub fn run(args: ListenArgs) -> ExitCode {
    match execute(&args) {
        Ok(received) => {
            info!("Received {received} datagrams.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("[error] {e:#}");
            ExitCode::from(1)
        }
    }
}

fn execute(args: &ListenArgs) -> Result<usize> {
    let shutdown = Arc::new(AtomicBool::new(false));

    // Signal handlers only set the flag; the listener polls it.
    for sig in [SIGINT, SIGTERM] {
        flag::register(sig, Arc::clone(&shutdown))
            .with_context(|| format!("Failed to register signal handler for {sig}"))?;
    }

    let addr = resolve_destination(&args.host, args.port)?;
    let listener =
        Listener::bind(addr).with_context(|| format!("Failed to bind UDP socket at {addr}"))?;

    let received = listener
        .run(&shutdown, args.count, |peer, text| {
            println!("{text}");
            info!("Received {text} from {peer}");
        })
        .context("Failed while receiving datagrams")?;

    Ok(received)
}
