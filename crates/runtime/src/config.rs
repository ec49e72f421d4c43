use std::time::Duration;

pub const PROGRAM_LOG_LEVEL: &str = "ROWCAST_LOG_LEVEL";

/// Host the feed is sent to unless overridden at the command line.
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 9999;

pub const DEFAULT_SOURCE_FILE: &str = "us-counties.csv";
/// Mirror table rewritten on every run.
pub const DEFAULT_MIRROR_FILE: &str = "out99.txt";

/// Number of records the command line asks for by default.
pub const REQUESTED_RECORDS: usize = 99;

/// Used when a caller builds a feed configuration without choosing a count.
pub const FALLBACK_MAX_RECORDS: usize = 9;

pub const DEFAULT_DELAY_SECS: u64 = 3;

/// Pause between two consecutive records.
pub fn default_delay() -> Duration {
    Duration::from_secs(DEFAULT_DELAY_SECS)
}
