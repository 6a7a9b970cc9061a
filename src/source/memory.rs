//! In-memory record source.
//!
//! Used by tests and benchmarks to drive the window builder without touching
//! the filesystem. Counts how many streams were opened, which makes rebuilds
//! observable.

use super::{RecordSource, RecordStream};
use crate::model::error::SourceError;
use crate::model::Delimiter;
use std::cell::Cell;
use std::io::Cursor;
use std::sync::Arc;

/// Delimited data held in memory.
#[derive(Debug, Clone)]
pub struct MemorySource {
    data: Arc<[u8]>,
    delimiter: Delimiter,
    opens: Cell<usize>,
}

impl MemorySource {
    /// Create a source over `data` split on `delimiter`.
    pub fn new(data: impl Into<Vec<u8>>, delimiter: Delimiter) -> Self {
        Self {
            data: Arc::from(data.into()),
            delimiter,
            opens: Cell::new(0),
        }
    }

    /// Create a comma-delimited source.
    pub fn csv(data: impl Into<Vec<u8>>) -> Self {
        Self::new(data, Delimiter::COMMA)
    }

    /// Number of streams opened so far.
    pub fn opens(&self) -> usize {
        self.opens.get()
    }
}

impl RecordSource for MemorySource {
    type Reader = Cursor<Arc<[u8]>>;

    fn open(&self) -> Result<RecordStream<Self::Reader>, SourceError> {
        self.opens.set(self.opens.get() + 1);
        Ok(RecordStream::new(
            Cursor::new(Arc::clone(&self.data)),
            self.delimiter,
        ))
    }

    fn describe(&self) -> String {
        format!("<memory: {} bytes>", self.data.len())
    }
}
