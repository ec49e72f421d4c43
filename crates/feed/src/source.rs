use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{Reader, ReaderBuilder, StringRecord};
use rowcast_protocol::FormatError;

use crate::EmitError;

/// Row reader over the source table.
///
/// The CSV layer silently drops empty lines. An empty line is still a row
/// with no fields here, so it is found through the reader's line counter:
/// a read that moves past more newlines than the row itself spans has
/// skipped at least one empty line.
pub(crate) struct SourceTable {
    reader: Reader<File>,
    path: PathBuf,
    // With `\r\n` endings the reader stops on `\r`; the `\n` is only
    // counted by the next read.
    deferred_newline: bool,
}

impl SourceTable {
    pub(crate) fn open(path: &Path) -> Result<Self, EmitError> {
        // Arity is checked per row when building a `Record`, not by the reader.
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|source| EmitError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            reader,
            path: path.to_path_buf(),
            deferred_newline: false,
        })
    }

    /// Read the first row. A source without one is an error.
    pub(crate) fn read_header(&mut self) -> Result<StringRecord, EmitError> {
        let mut header = StringRecord::new();
        let start = self.reader.position().line();
        let found = self
            .reader
            .read_record(&mut header)
            .map_err(|source| self.unavailable(source))?;

        if !found {
            return Err(EmitError::EmptySource {
                path: self.path.clone(),
            });
        }

        let consumed = self.reader.position().line() - start;
        self.deferred_newline = consumed == embedded_newlines(&header);
        Ok(header)
    }

    /// Read the next data row into `row` and return the line it starts on,
    /// or `None` once the source is exhausted.
    pub(crate) fn next_row(&mut self, row: &mut StringRecord) -> Result<Option<u64>, EmitError> {
        let start = self.reader.position().line();
        let line = start + u64::from(self.deferred_newline);

        let more = self
            .reader
            .read_record(row)
            .map_err(|source| self.unavailable(source))?;

        let consumed = self.reader.position().line() - start;
        let expected = if more {
            embedded_newlines(row) + 1
        } else {
            u64::from(self.deferred_newline)
        };
        if consumed > expected {
            return Err(EmitError::Format {
                line,
                source: FormatError::Arity { found: 0 },
            });
        }

        Ok(more.then_some(line))
    }

    fn unavailable(&self, source: csv::Error) -> EmitError {
        EmitError::SourceUnavailable {
            path: self.path.clone(),
            source,
        }
    }
}

// Newlines inside quoted fields.
fn embedded_newlines(row: &StringRecord) -> u64 {
    row.iter()
        .map(|field| field.bytes().filter(|&b| b == b'\n').count() as u64)
        .sum()
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
