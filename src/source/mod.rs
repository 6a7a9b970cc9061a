//! Delimited record sources.
//!
//! This module provides forward-only readers of delimited records:
//! - [`RecordStream`] wraps a `csv::Reader` and maps its failures onto [`SourceError`]
//! - [`RecordSource`] re-opens a fresh stream from the first record on every call
//! - [`FileSource`] for files on disk, [`MemorySource`] for in-memory data
//!
//! Streams never seek or rewind. Reaching row N means opening a new stream and
//! reading N records past the header.

use crate::model::error::SourceError;
use crate::model::{Delimiter, Header, Record};
use std::io::Read;

pub mod file;
pub mod memory;

pub use file::FileSource;
pub use memory::MemorySource;

/// Something a window can be scanned from.
///
/// Every call to [`open`](RecordSource::open) starts a new stream positioned
/// before the header record. The stream (and any file handle it holds) is
/// released when it is dropped.
pub trait RecordSource {
    /// Underlying byte reader of the streams this source opens.
    type Reader: Read;

    /// Open a new stream from the beginning of the data.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::NotFound` if the data no longer exists and
    /// `SourceError::Io` for other failures to open it.
    fn open(&self) -> Result<RecordStream<Self::Reader>, SourceError>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}

/// Forward-only stream of delimited records.
///
/// The first record is the header; it fixes the field count for the rest of
/// the stream. Records with a different field count are reported as
/// `SourceError::MalformedRecord`.
pub struct RecordStream<R: Read> {
    reader: csv::Reader<R>,
    buffer: csv::StringRecord,
    header_read: bool,
    rows_read: usize,
}

impl<R: Read> RecordStream<R> {
    /// Wrap a byte reader, splitting fields on `delimiter`.
    pub fn new(reader: R, delimiter: Delimiter) -> Self {
        let reader = csv::ReaderBuilder::new()
            .delimiter(delimiter.as_byte())
            .has_headers(false)
            .flexible(false)
            .from_reader(reader);

        Self {
            reader,
            buffer: csv::StringRecord::new(),
            header_read: false,
            rows_read: 0,
        }
    }

    /// Read the header record.
    ///
    /// Returns `Ok(None)` for an empty stream. Must be called before any
    /// data record is read.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::MalformedRecord` if the header is not valid UTF-8
    /// and `SourceError::Io` for read failures.
    pub fn read_header(&mut self) -> Result<Option<Header>, SourceError> {
        debug_assert!(!self.header_read, "header already read");
        self.header_read = true;
        if !self.advance(None)? {
            return Ok(None);
        }
        Ok(Some(Header::new(Record::from(&self.buffer))))
    }

    /// Read the next data record, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::MalformedRecord` for format violations and
    /// `SourceError::Io` for read failures.
    pub fn read_record(&mut self) -> Result<Option<Record>, SourceError> {
        if !self.advance(Some(self.rows_read))? {
            return Ok(None);
        }
        self.rows_read += 1;
        Ok(Some(Record::from(&self.buffer)))
    }

    /// Read and discard the next data record.
    ///
    /// Returns `false` at end of stream. The record is still validated, so a
    /// malformed record is reported even when it is only skipped over.
    ///
    /// # Errors
    ///
    /// Same as [`read_record`](Self::read_record).
    pub fn skip_record(&mut self) -> Result<bool, SourceError> {
        if !self.advance(Some(self.rows_read))? {
            return Ok(false);
        }
        self.rows_read += 1;
        Ok(true)
    }

    /// Number of data records read or skipped so far (header excluded).
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    fn advance(&mut self, row: Option<usize>) -> Result<bool, SourceError> {
        self.reader
            .read_record(&mut self.buffer)
            .map_err(|err| map_csv_error(err, row))
    }
}

/// Translate a `csv` error into the source taxonomy.
///
/// `row` is the data row being read, `None` for the header.
fn map_csv_error(err: csv::Error, row: Option<usize>) -> SourceError {
    let position = err.position().cloned();
    let (line, byte) = position
        .map(|pos| (pos.line(), pos.byte()))
        .unwrap_or((0, 0));

    let reason = match err.into_kind() {
        csv::ErrorKind::Io(io) => return SourceError::Io(io),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!(
            "found record with {} fields, but the header has {} fields",
            len, expected_len
        ),
        csv::ErrorKind::Utf8 { err, .. } => format!(
            "field {} is not valid UTF-8 (valid up to byte {})",
            err.field(),
            err.valid_up_to()
        ),
        other => format!("{:?}", other),
    };

    SourceError::MalformedRecord {
        row,
        line,
        byte,
        reason,
    }
}
