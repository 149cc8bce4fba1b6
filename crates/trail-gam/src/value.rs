//! Field values.

use std::fmt;

use encoding_rs::WINDOWS_1252;

use crate::layout::{FieldDescriptor, FieldKind};

/// Contents of a fixed-width text field.
///
/// The game reads text up to the first NUL. Whatever follows the NUL is kept
/// in `tail` so that a decoded record encodes back to the same bytes. Trailing
/// zero bytes are not part of the tail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SaveText {
    text: String,
    tail: Vec<u8>,
}

impl SaveText {
    /// Text with nothing stored after its terminator.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tail: Vec::new(),
        }
    }

    /// Text followed by leftover bytes after its terminator.
    pub fn with_tail(text: impl Into<String>, tail: impl Into<Vec<u8>>) -> Self {
        let mut tail = tail.into();
        let used = tail.iter().rposition(|&b| b != 0).map_or(0, |pos| pos + 1);
        tail.truncate(used);
        Self {
            text: text.into(),
            tail,
        }
    }

    /// Parse a field slot: text before the first NUL, leftovers after it.
    pub(crate) fn from_slot(slot: &[u8]) -> Self {
        match slot.iter().position(|&b| b == 0) {
            Some(end) => Self::with_tail(decode_text(&slot[..end]), &slot[end + 1..]),
            None => Self::new(decode_text(slot)),
        }
    }

    /// Bytes to store in the slot: text, then terminator and tail if any.
    ///
    /// Returns the reason when the text cannot be stored.
    pub(crate) fn to_slot_bytes(&self) -> Result<Vec<u8>, &'static str> {
        if self.text.contains('\0') {
            return Err("text contains a NUL character");
        }
        let (encoded, _, had_errors) = WINDOWS_1252.encode(&self.text);
        if had_errors {
            return Err("text has characters outside Windows-1252");
        }
        let mut bytes = encoded.into_owned();
        if !self.tail.is_empty() {
            bytes.push(0);
            bytes.extend_from_slice(&self.tail);
        }
        Ok(bytes)
    }

    /// Number of bytes the value takes in its slot, terminator and tail
    /// included.
    ///
    /// Returns the reason when the text cannot be stored.
    pub fn encoded_len(&self) -> Result<usize, &'static str> {
        self.to_slot_bytes().map(|bytes| bytes.len())
    }

    /// The text itself.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Bytes stored after the terminator.
    #[must_use]
    pub fn tail(&self) -> &[u8] {
        &self.tail
    }
}

impl fmt::Display for SaveText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for SaveText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SaveText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Save text is Windows-1252, which maps every byte to a character.
fn decode_text(bytes: &[u8]) -> String {
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    text.into_owned()
}

/// Value of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Text(SaveText),
    /// Any integer kind; range is checked on encode.
    Int(i64),
    /// Raw bytes; shorter values are zero-padded on encode.
    Bytes(Vec<u8>),
}

impl FieldValue {
    /// Zero value for a field: empty text, `0`, or zero-filled bytes.
    #[must_use]
    pub fn zero(field: &FieldDescriptor) -> Self {
        match field.kind {
            FieldKind::Text => Self::Text(SaveText::default()),
            FieldKind::Bytes => Self::Bytes(vec![0; field.width]),
            _ => Self::Int(0),
        }
    }

    /// Whether this value can be stored in a field of `kind`.
    #[must_use]
    pub fn fits_kind(&self, kind: FieldKind) -> bool {
        match self {
            Self::Text(_) => kind == FieldKind::Text,
            Self::Int(_) => kind.is_integer(),
            Self::Bytes(_) => kind == FieldKind::Bytes,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&SaveText> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Whether the value is its kind's zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Text(text) => text.as_str().is_empty() && text.tail().is_empty(),
            Self::Int(value) => *value == 0,
            Self::Bytes(bytes) => bytes.iter().all(|&b| b == 0),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Bytes(bytes) => f.write_str(&hex::encode(bytes)),
        }
    }
}

macro_rules! int_value_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

int_value_from!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(SaveText::new(text))
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(SaveText::new(text))
    }
}

impl From<SaveText> for FieldValue {
    fn from(text: SaveText) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}
