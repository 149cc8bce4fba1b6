//! Save file writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::codec::encode_with_options;
use crate::error::Result;
use crate::options::EncodeOptions;
use crate::record::Record;

/// File name the game loads a save from.
pub const DEFAULT_SAVE_FILE: &str = "save.gam";

/// Save file writer.
pub struct SaveWriter<W: Write> {
    writer: BufWriter<W>,
    options: EncodeOptions,
}

impl<W: Write> SaveWriter<W> {
    /// Create a new save writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            options: EncodeOptions::default(),
        }
    }

    /// Create a new save writer with options.
    pub fn with_options(writer: W, options: EncodeOptions) -> Self {
        Self {
            writer: BufWriter::new(writer),
            options,
        }
    }

    /// Encode and write a record.
    ///
    /// The record is fully encoded before anything is written, so an
    /// encoding error leaves the output untouched.
    pub fn write_record(mut self, record: &Record) -> Result<()> {
        let bytes = encode_with_options(record, &self.options)?;
        self.writer.write_all(&bytes)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl SaveWriter<File> {
    /// Create a save file for writing.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        debug!(path = %path.display(), "created save file");
        Ok(Self::new(file))
    }

    /// Create a save file with options.
    pub fn create_with_options(path: &Path, options: EncodeOptions) -> Result<Self> {
        let file = File::create(path)?;
        debug!(path = %path.display(), "created save file");
        Ok(Self::with_options(file, options))
    }
}

/// Write a record to a save file.
pub fn write_save(path: &Path, record: &Record) -> Result<()> {
    write_save_with_options(path, record, &EncodeOptions::default())
}

/// Write a record to a save file with options.
///
/// Encodes before creating the file, so a record that fails to encode
/// never truncates an existing save.
pub fn write_save_with_options(
    path: &Path,
    record: &Record,
    options: &EncodeOptions,
) -> Result<()> {
    let bytes = encode_with_options(record, options)?;
    let mut file = File::create(path)?;
    file.write_all(&bytes)?;
    file.flush()?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote save file");
    Ok(())
}
