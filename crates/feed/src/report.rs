use std::net::SocketAddr;
use std::path::Path;

use csv::StringRecord;
use log::info;
use rowcast_protocol::Record;

use crate::RunSummary;

/// Lifecycle points of one feed run.
#[derive(Debug)]
pub enum StreamEvent<'a> {
    Started {
        source: &'a Path,
        destination: SocketAddr,
        max_records: usize,
    },
    SourceOpened {
        source: &'a Path,
    },
    HeaderSkipped {
        header: &'a StringRecord,
    },
    MirrorOpened {
        mirror: &'a Path,
    },
    Sent {
        record: &'a Record,
        destination: SocketAddr,
    },
    Finished {
        summary: &'a RunSummary,
    },
}

/// Receives progress from the emitter. Errors are not reported here; they
/// are returned to whoever started the run.
pub trait Reporter {
    fn report(&mut self, event: &StreamEvent<'_>);
}

/// Discards every event.
impl Reporter for () {
    fn report(&mut self, _event: &StreamEvent<'_>) {}
}

/// Forwards events to the process logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, event: &StreamEvent<'_>) {
        match event {
            StreamEvent::Started {
                source,
                destination,
                max_records,
            } => info!(
                "Starting to stream and write {max_records} rows of data from {} to {destination}.",
                source.display()
            ),
            StreamEvent::SourceOpened { source } => {
                info!("Opened for reading: {}.", source.display())
            }
            StreamEvent::HeaderSkipped { header } => {
                let columns: Vec<&str> = header.iter().collect();
                info!("Skipped header row: {columns:?}")
            }
            StreamEvent::MirrorOpened { mirror } => {
                info!("Opened for writing: {}.", mirror.display())
            }
            StreamEvent::Sent {
                record,
                destination,
            } => info!("Sent: {record} to {destination}. Hit CTRL-c to stop."),
            StreamEvent::Finished { summary } => info!("{summary}"),
        }
    }
}
