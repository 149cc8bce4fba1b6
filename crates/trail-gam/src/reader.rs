//! Save file reader.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::codec::decode;
use crate::error::{GamError, Result};
use crate::layout::RECORD_LEN;
use crate::record::Record;

/// Save file reader.
///
/// Reads the whole input and decodes it as one record.
pub struct SaveReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> SaveReader<R> {
    /// Create a new save reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Read and decode the record.
    ///
    /// Reads at most one byte past a record, enough to detect oversized input.
    pub fn read_record(mut self) -> Result<Record> {
        let mut data = Vec::with_capacity(RECORD_LEN + 1);
        self.reader
            .by_ref()
            .take(RECORD_LEN as u64 + 1)
            .read_to_end(&mut data)?;
        decode(&data)
    }
}

impl SaveReader<File> {
    /// Open a save file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GamError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                GamError::Io(e)
            }
        })?;
        debug!(path = %path.display(), "opened save file");
        Ok(Self::new(file))
    }
}

/// Read a save file from a path.
pub fn read_save(path: &Path) -> Result<Record> {
    SaveReader::open(path)?.read_record()
}
