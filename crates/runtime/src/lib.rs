mod config;
pub mod logging;

pub use config::{
    DEFAULT_DELAY_SECS, DEFAULT_HOST, DEFAULT_MIRROR_FILE, DEFAULT_PORT, DEFAULT_SOURCE_FILE,
    FALLBACK_MAX_RECORDS, PROGRAM_LOG_LEVEL, REQUESTED_RECORDS, default_delay,
};

pub use logging::init;
