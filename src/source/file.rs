//! File-backed record source.
//!
//! Each [`open`](RecordSource::open) opens the file anew, so a window rebuild
//! holds the handle only for the duration of its scan.

use super::{RecordSource, RecordStream};
use crate::model::error::SourceError;
use crate::model::Delimiter;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Delimited file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    delimiter: Delimiter,
}

impl FileSource {
    /// Create a source for `path`.
    ///
    /// Checks that the file can be opened so that a bad path is reported
    /// before the terminal is switched into raw mode.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::NotFound` if the file does not exist.
    /// Returns `SourceError::Io` for other open failures (permissions, directories).
    pub fn new(path: impl AsRef<Path>, delimiter: Delimiter) -> Result<Self, SourceError> {
        let source = Self {
            path: path.as_ref().to_path_buf(),
            delimiter,
        };
        source.open_file()?;
        Ok(source)
    }

    /// Path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delimiter used to split fields.
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    fn open_file(&self) -> Result<File, SourceError> {
        File::open(&self.path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => SourceError::NotFound {
                path: self.path.clone(),
            },
            _ => SourceError::Io(err),
        })
    }
}

impl RecordSource for FileSource {
    type Reader = File;

    fn open(&self) -> Result<RecordStream<File>, SourceError> {
        let file = self.open_file()?;
        Ok(RecordStream::new(file, self.delimiter))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
