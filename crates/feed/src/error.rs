use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use rowcast_protocol::FormatError;
use thiserror::Error;

/// Everything that can end a feed run early.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("cannot read source {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("source {} is empty, no header row to read", .path.display())]
    EmptySource { path: PathBuf },

    #[error("cannot write mirror {}: {source}", .path.display())]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed row at line {line}: {source}")]
    Format {
        line: u64,
        #[source]
        source: FormatError,
    },

    #[error("cannot resolve destination {target}: {source}")]
    Destination {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to send to {destination}: {source}")]
    Transmission {
        destination: SocketAddr,
        #[source]
        source: io::Error,
    },
}
