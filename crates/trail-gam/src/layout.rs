//! Save record layout.
//!
//! A save file is one packed record of fixed-width fields. Offsets are not
//! stored anywhere: each field starts where the previous one ends, so the
//! order and widths below are the file format. Multi-byte integers are
//! little-endian.
//!
//! # Record Structure (318 bytes)
//!
//! | Offset  | Field                 | Type      | Description                   |
//! |---------|-----------------------|-----------|-------------------------------|
//! | 0-3     | Company               | char[4]   | `MECC`                        |
//! | 4       | Reserved1             | u8        |                               |
//! | 5-32    | GameTitle             | char[28]  | `The Oregon Trail for Windows`|
//! | 33-68   | Reserved2             | byte[36]  |                               |
//! | 69-71   | SaveFileVersion       | char[3]   | `1.0`                         |
//! | 72-81   | Reserved3             | byte[10]  |                               |
//! | 82      | TemperatureString     | u8        | Phrase under the thermometer  |
//! | 83-84   | Unknown1, Unknown2    | u8        |                               |
//! | 85-91   | Reserved4_1           | byte[7]   |                               |
//! | 92-93   | DistanceTraveled      | i16       | Miles                         |
//! | 94-134  | Reserved4_2           | byte[41]  |                               |
//! | 135     | Unknown3              | u8        |                               |
//! | 136-137 | Reserved5             | byte[2]   |                               |
//! | 138-139 | DistanceToLandmark    | i16       | Miles                         |
//! | 140-143 | Reserved5_0_1         | byte[4]   |                               |
//! | 144-145 | Rations               | i16       | Rations code                  |
//! | 146     | Pace                  | u8        | Pace code                     |
//! | 147-149 | Reserved5_1           | byte[3]   |                               |
//! | 150-151 | Oxen                  | i16       |                               |
//! | 152-153 | Reserved6             | byte[2]   |                               |
//! | 154-167 | SetsOfClothing..      | i16 x 7   | Supplies                      |
//! | 168-171 | MoneyInCents          | i32       |                               |
//! | 172-173 | OccupationValue       | u16       | Occupation code               |
//! | 174-191 | OccupationTitle       | char[18]  |                               |
//! | 192-266 | Leader, PartyMember1-4| char[14]  | Each followed by one byte     |
//! | 267-277 | Reserved12            | byte[11]  |                               |
//! | 278-287 | LeaderStatus..        | i16 x 5   | Status codes                  |
//! | 288-291 | Reserved13            | byte[4]   |                               |
//! | 292-309 | DateString            | char[18]  |                               |
//! | 310-317 | PlaceholderYear..     | i16 x 4   | Year, month, day              |

use std::fmt;

use crate::lookup::{LookupTable, OCCUPATION, PACE, RATIONS, STATUS, TEMPERATURE};
use FieldKind::{I16, I32, U8, U16};

/// Total length of a save record in bytes.
pub const RECORD_LEN: usize = 318;

/// Number of fields in a save record.
pub const FIELD_COUNT: usize = 53;

/// How the bytes of a field are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// NUL-terminated text in a fixed-width slot.
    Text,
    I8,
    I16,
    I32,
    U8,
    U16,
    /// Opaque bytes, carried through unchanged.
    Bytes,
}

impl FieldKind {
    /// Width implied by the kind, or `None` for sized kinds.
    #[must_use]
    pub const fn fixed_width(self) -> Option<usize> {
        match self {
            Self::I8 | Self::U8 => Some(1),
            Self::I16 | Self::U16 => Some(2),
            Self::I32 => Some(4),
            Self::Text | Self::Bytes => None,
        }
    }

    /// Whether the kind holds an integer.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.fixed_width().is_some()
    }

    /// Inclusive value range for integer kinds.
    #[must_use]
    pub const fn range(self) -> Option<(i64, i64)> {
        match self {
            Self::I8 => Some((i8::MIN as i64, i8::MAX as i64)),
            Self::I16 => Some((i16::MIN as i64, i16::MAX as i64)),
            Self::I32 => Some((i32::MIN as i64, i32::MAX as i64)),
            Self::U8 => Some((0, u8::MAX as i64)),
            Self::U16 => Some((0, u16::MAX as i64)),
            Self::Text | Self::Bytes => None,
        }
    }

    /// Short type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::Bytes => "bytes",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one field in the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub width: usize,
    pub kind: FieldKind,
    /// Table used to label the field's code for display.
    pub lookup: Option<&'static LookupTable>,
    /// Value given to the field in a fresh save.
    pub default: Option<&'static str>,
}

impl FieldDescriptor {
    const fn new(name: &'static str, kind: FieldKind, width: usize) -> Self {
        Self {
            name,
            width,
            kind,
            lookup: None,
            default: None,
        }
    }

    const fn text(name: &'static str, width: usize) -> Self {
        Self::new(name, FieldKind::Text, width)
    }

    const fn bytes(name: &'static str, width: usize) -> Self {
        Self::new(name, FieldKind::Bytes, width)
    }

    const fn int(name: &'static str, kind: FieldKind) -> Self {
        let width = match kind.fixed_width() {
            Some(width) => width,
            None => panic!("integer field needs an integer kind"),
        };
        Self::new(name, kind, width)
    }

    const fn with_lookup(mut self, table: &'static LookupTable) -> Self {
        self.lookup = Some(table);
        self
    }

    const fn with_default(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    /// Whether the field is a reserved or unknown region.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        self.name.starts_with("Reserved") || self.name.starts_with("Unknown")
    }

    /// Whether a new save needs a value for this field from the user.
    #[must_use]
    pub fn is_prompted(&self) -> bool {
        !self.is_reserved() && self.default.is_none()
    }
}

const SCHEMA: [FieldDescriptor; FIELD_COUNT] = [
    FieldDescriptor::text("Company", 4).with_default("MECC"),
    FieldDescriptor::int("Reserved1", U8),
    FieldDescriptor::text("GameTitle", 28).with_default("The Oregon Trail for Windows"),
    FieldDescriptor::bytes("Reserved2", 36),
    FieldDescriptor::text("SaveFileVersion", 3).with_default("1.0"),
    FieldDescriptor::bytes("Reserved3", 10),
    FieldDescriptor::int("TemperatureString", U8).with_lookup(&TEMPERATURE),
    FieldDescriptor::int("Unknown1", U8),
    FieldDescriptor::int("Unknown2", U8),
    FieldDescriptor::bytes("Reserved4_1", 7),
    FieldDescriptor::int("DistanceTraveled", I16),
    FieldDescriptor::bytes("Reserved4_2", 41),
    FieldDescriptor::int("Unknown3", U8),
    FieldDescriptor::bytes("Reserved5", 2),
    FieldDescriptor::int("DistanceToLandmark", I16),
    FieldDescriptor::bytes("Reserved5_0_1", 4),
    FieldDescriptor::int("Rations", I16).with_lookup(&RATIONS),
    FieldDescriptor::int("Pace", U8).with_lookup(&PACE),
    FieldDescriptor::bytes("Reserved5_1", 3),
    FieldDescriptor::int("Oxen", I16),
    FieldDescriptor::bytes("Reserved6", 2),
    FieldDescriptor::int("SetsOfClothing", I16),
    FieldDescriptor::int("Bullets", I16),
    FieldDescriptor::int("SpareWagonWheels", I16),
    FieldDescriptor::int("SpareWagonAxels", I16),
    FieldDescriptor::int("SpareWagonTongues", I16),
    FieldDescriptor::int("NonPerishableFood", I16),
    FieldDescriptor::int("PerishableFood", I16),
    FieldDescriptor::int("MoneyInCents", I32),
    FieldDescriptor::int("OccupationValue", U16).with_lookup(&OCCUPATION),
    FieldDescriptor::text("OccupationTitle", 18),
    FieldDescriptor::text("Leader", 14),
    FieldDescriptor::bytes("Reserved7", 1),
    FieldDescriptor::text("PartyMember1", 14),
    FieldDescriptor::bytes("Reserved8", 1),
    FieldDescriptor::text("PartyMember2", 14),
    FieldDescriptor::bytes("Reserved9", 1),
    FieldDescriptor::text("PartyMember3", 14),
    FieldDescriptor::bytes("Reserved10", 1),
    FieldDescriptor::text("PartyMember4", 14),
    FieldDescriptor::bytes("Reserved11", 1),
    FieldDescriptor::bytes("Reserved12", 11),
    FieldDescriptor::int("LeaderStatus", I16).with_lookup(&STATUS),
    FieldDescriptor::int("PartyMember1Status", I16).with_lookup(&STATUS),
    FieldDescriptor::int("PartyMember2Status", I16).with_lookup(&STATUS),
    FieldDescriptor::int("PartyMember3Status", I16).with_lookup(&STATUS),
    FieldDescriptor::int("PartyMember4Status", I16).with_lookup(&STATUS),
    FieldDescriptor::bytes("Reserved13", 4),
    FieldDescriptor::text("DateString", 18),
    FieldDescriptor::int("PlaceholderYear", I16),
    FieldDescriptor::int("Year", I16),
    FieldDescriptor::int("MonthOfYear", I16),
    FieldDescriptor::int("DayOfMonth", I16),
];

/// Prefix sums of the field widths.
const fn schema_offsets(fields: &[FieldDescriptor; FIELD_COUNT]) -> [usize; FIELD_COUNT] {
    let mut offsets = [0usize; FIELD_COUNT];
    let mut offset = 0;
    let mut i = 0;
    while i < FIELD_COUNT {
        offsets[i] = offset;
        offset += fields[i].width;
        i += 1;
    }
    offsets
}

/// Total width of the schema, checking integer widths against their kinds.
const fn schema_len(fields: &[FieldDescriptor]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fields.len() {
        let field = &fields[i];
        assert!(field.width > 0, "field width must be non-zero");
        if let Some(width) = field.kind.fixed_width() {
            assert!(width == field.width, "integer width must match its kind");
        }
        total += field.width;
        i += 1;
    }
    total
}

const _: () = assert!(
    schema_len(&SCHEMA) == RECORD_LEN,
    "field widths must sum to RECORD_LEN"
);

/// Every field, in file order.
pub static FIELDS: [FieldDescriptor; FIELD_COUNT] = SCHEMA;

static OFFSETS: [usize; FIELD_COUNT] = schema_offsets(&SCHEMA);

/// Byte offset of the field at `index`.
///
/// # Panics
///
/// Panics if `index >= FIELD_COUNT`.
#[must_use]
pub fn offset_of(index: usize) -> usize {
    OFFSETS[index]
}

/// Look a field up by name, returning its index and descriptor.
#[must_use]
pub fn find_field(name: &str) -> Option<(usize, &'static FieldDescriptor)> {
    FIELDS
        .iter()
        .enumerate()
        .find(|(_, field)| field.name == name)
}

/// Iterate fields in file order with their byte offsets.
pub fn fields() -> impl Iterator<Item = (usize, &'static FieldDescriptor)> {
    OFFSETS.iter().copied().zip(FIELDS.iter())
}
