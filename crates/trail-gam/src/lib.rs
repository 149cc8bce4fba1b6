//! The Oregon Trail for Windows save file (`.gam`) reader and writer.
//!
//! A save file is a single packed record of named, fixed-width fields. This
//! crate describes that layout and converts between the raw bytes and a
//! [`Record`] of typed values.
//!
//! # Features
//!
//! - Byte-exact layout with offsets derived from field widths, checked at
//!   compile time
//! - Lossless round-trip: reserved regions and bytes left after a text
//!   terminator are carried through untouched
//! - Checked encoding: over-long text and out-of-range integers are
//!   rejected instead of spilling into neighbouring fields
//! - Display labels for coded fields (occupation, pace, rations, health)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use trail_gam::{Record, read_save, write_save};
//!
//! // Read a save file
//! let record = read_save(Path::new("save.gam")).unwrap();
//! println!(
//!     "{} the {}",
//!     record.text("Leader").unwrap(),
//!     record.annotation("OccupationValue").unwrap(),
//! );
//!
//! // Create a new one
//! let mut save = Record::defaults();
//! save.set("Leader", "Ezra").unwrap();
//! save.set("OccupationValue", 4).unwrap();
//! save.set("Oxen", 6).unwrap();
//! write_save(Path::new("save.gam"), &save).unwrap();
//! ```
//!
//! # Coded Fields
//!
//! Unknown codes decode without error and keep their raw value:
//!
//! ```
//! use trail_gam::{RECORD_LEN, decode, encode};
//!
//! let mut bytes = [0u8; RECORD_LEN];
//! bytes[172] = 99; // OccupationValue
//! let record = decode(&bytes).unwrap();
//! assert_eq!(record.int("OccupationValue"), Some(99));
//! assert_eq!(record.annotation("OccupationValue"), Some("Unknown"));
//! assert_eq!(encode(&record).unwrap(), bytes);
//! ```

mod codec;
mod error;
pub mod layout;
pub mod lookup;
mod options;
mod reader;
mod record;
mod value;
mod writer;

// Re-export error types
pub use error::{GamError, Result};

// Re-export core types
pub use layout::{FIELD_COUNT, FIELDS, FieldDescriptor, FieldKind, RECORD_LEN};
pub use lookup::{LookupTable, UNKNOWN_LABEL};
pub use options::{EncodeOptions, TextMode};
pub use record::{Record, annotate};
pub use value::{FieldValue, SaveText};

// Re-export codec functionality
pub use codec::{decode, encode, encode_with_options};

// Re-export file functionality
pub use reader::{SaveReader, read_save};
pub use writer::{DEFAULT_SAVE_FILE, SaveWriter, write_save, write_save_with_options};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
