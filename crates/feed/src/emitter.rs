use std::fmt;
use std::fs::File;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use csv::{StringRecord, Terminator, Writer, WriterBuilder};
use rowcast_protocol::Record;
use rowcast_protocol::codec::encode_record;
use rowcast_runtime::{FALLBACK_MAX_RECORDS, default_delay};

use crate::source::SourceTable;
use crate::{
    EmitError, LogReporter, Pacer, Reporter, StreamEvent, ThreadSleeper, Transport, UdpTransport,
};

/// Where a feed run reads from, mirrors to and sends to.
#[derive(Debug, Clone)]
pub struct EmitConfig {
    pub source: PathBuf,
    pub mirror: PathBuf,
    pub destination: SocketAddr,
    /// Upper bound on data rows sent in this run.
    pub max_records: usize,
    /// Pause after every sent record, including the last one.
    pub delay: Duration,
}

impl EmitConfig {
    pub fn new(
        source: impl Into<PathBuf>,
        mirror: impl Into<PathBuf>,
        destination: SocketAddr,
    ) -> Self {
        Self {
            source: source.into(),
            mirror: mirror.into(),
            destination,
            max_records: FALLBACK_MAX_RECORDS,
            delay: default_delay(),
        }
    }

    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Ran out of rows before reaching the limit.
    SourceExhausted,
    LimitReached,
}

/// Outcome of a run that finished without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub sent: usize,
    /// Data rows written to the mirror, header excluded.
    pub mirrored: usize,
    pub stop: StopReason,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.stop {
            StopReason::SourceExhausted => "end of source",
            StopReason::LimitReached => "record limit reached",
        };
        write!(
            f,
            "Sent {} records, mirrored {} rows ({reason}).",
            self.sent, self.mirrored
        )
    }
}

/// Drives one feed run: source rows in, datagrams and mirror rows out.
pub struct Emitter<T, P, R> {
    transport: T,
    pacer: P,
    reporter: R,
}

impl<T, P, R> Emitter<T, P, R>
where
    T: Transport,
    P: Pacer,
    R: Reporter,
{
    pub fn new(transport: T, pacer: P, reporter: R) -> Self {
        Self {
            transport,
            pacer,
            reporter,
        }
    }

    pub fn into_parts(self) -> (T, P, R) {
        (self.transport, self.pacer, self.reporter)
    }

    /// Stream up to `config.max_records` rows of `config.source`.
    ///
    /// The mirror is truncated and receives the header before any datagram
    /// goes out. Each row is sent first and mirrored second, so a failed
    /// send leaves that row out of the mirror. Files are closed when this
    /// returns, on success and on error alike.
    pub fn run(&mut self, config: &EmitConfig) -> Result<RunSummary, EmitError> {
        let destination = self.transport.destination();
        self.reporter.report(&StreamEvent::Started {
            source: &config.source,
            destination,
            max_records: config.max_records,
        });

        let mut source = SourceTable::open(&config.source)?;
        self.reporter.report(&StreamEvent::SourceOpened {
            source: &config.source,
        });

        let header = source.read_header()?;
        self.reporter
            .report(&StreamEvent::HeaderSkipped { header: &header });

        let mut mirror = open_mirror(&config.mirror)?;
        self.reporter.report(&StreamEvent::MirrorOpened {
            mirror: &config.mirror,
        });
        write_row(&mut mirror, &header, &config.mirror)?;

        let mut row = StringRecord::new();
        let mut summary = RunSummary {
            sent: 0,
            mirrored: 0,
            stop: StopReason::LimitReached,
        };

        for _ in 0..config.max_records {
            let Some(line) = source.next_row(&mut row)? else {
                summary.stop = StopReason::SourceExhausted;
                break;
            };

            let record = Record::from_fields(row.iter())
                .map_err(|source| EmitError::Format { line, source })?;

            let payload = encode_record(&record);
            self.transport
                .send(&payload)
                .map_err(|source| EmitError::Transmission {
                    destination,
                    source,
                })?;
            summary.sent += 1;
            self.reporter.report(&StreamEvent::Sent {
                record: &record,
                destination,
            });

            write_row(&mut mirror, &row, &config.mirror)?;
            summary.mirrored += 1;

            self.pacer.pause(config.delay);
        }

        self.reporter
            .report(&StreamEvent::Finished { summary: &summary });
        Ok(summary)
    }
}

/// Send `config` over UDP, sleeping between records and logging progress.
pub fn run(config: &EmitConfig) -> Result<RunSummary, EmitError> {
    let transport =
        UdpTransport::bind(config.destination).map_err(|source| EmitError::Transmission {
            destination: config.destination,
            source,
        })?;

    Emitter::new(transport, ThreadSleeper, LogReporter).run(config)
}

// Rows end in a bare `\n` rather than `\r\n`; either way no blank lines
// appear between them.
fn open_mirror(path: &Path) -> Result<Writer<File>, EmitError> {
    WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(|source| EmitError::SinkUnavailable {
            path: path.to_path_buf(),
            source,
        })
}

// Flushed per row so that a run failing later keeps what was written.
fn write_row(mirror: &mut Writer<File>, row: &StringRecord, path: &Path) -> Result<(), EmitError> {
    mirror
        .write_record(row)
        .and_then(|()| mirror.flush().map_err(csv::Error::from))
        .map_err(|source| EmitError::SinkUnavailable {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
#[path = "emitter_tests.rs"]
mod tests;
