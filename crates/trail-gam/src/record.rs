//! In-memory save record.

use crate::error::{GamError, Result};
use crate::layout::{FIELDS, FieldDescriptor, fields, find_field};
use crate::value::{FieldValue, SaveText};

/// One save file's fields, held in file order.
///
/// Every field always has a value. Fields never assigned hold their kind's
/// zero (empty text, `0`, zero-filled bytes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: Vec<FieldValue>,
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl Record {
    /// A record with every field at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: FIELDS.iter().map(FieldValue::zero).collect(),
        }
    }

    /// A fresh save: declared defaults applied, everything else at zero.
    ///
    /// Fields listed by [`Record::prompted_fields`] still need a value from
    /// the user.
    #[must_use]
    pub fn defaults() -> Self {
        let mut record = Self::new();
        for (value, field) in record.values.iter_mut().zip(FIELDS.iter()) {
            if let Some(default) = field.default {
                *value = FieldValue::Text(SaveText::new(default));
            }
        }
        record
    }

    /// Fields a new save expects from the user, in file order.
    pub fn prompted_fields() -> impl Iterator<Item = &'static FieldDescriptor> {
        FIELDS.iter().filter(|field| field.is_prompted())
    }

    /// Build a record from decoded values, one per field.
    pub(crate) fn from_values(values: Vec<FieldValue>) -> Self {
        debug_assert_eq!(values.len(), FIELDS.len());
        Self { values }
    }

    pub(crate) fn values(&self) -> &[FieldValue] {
        &self.values
    }

    /// Value of the named field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        find_field(name).map(|(index, _)| &self.values[index])
    }

    /// Replace the named field's value.
    ///
    /// Raw values shorter than their field are zero-padded to its width.
    /// Widths and integer ranges are checked by the encoder, not here.
    ///
    /// # Errors
    ///
    /// Returns [`GamError::UnknownField`] for a name not in the layout and
    /// [`GamError::KindMismatch`] when the value is the wrong kind.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        let (index, field) = find_field(name).ok_or_else(|| GamError::unknown_field(name))?;
        let mut value = value.into();
        if !value.fits_kind(field.kind) {
            return Err(GamError::KindMismatch {
                field: field.name,
                expected: field.kind,
            });
        }
        if let FieldValue::Bytes(bytes) = &mut value
            && bytes.len() < field.width
        {
            bytes.resize(field.width, 0);
        }
        self.values[index] = value;
        Ok(())
    }

    /// Text of the named field.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&SaveText> {
        self.get(name).and_then(FieldValue::as_text)
    }

    /// Integer value of the named field.
    #[must_use]
    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_int)
    }

    /// Raw bytes of the named field.
    #[must_use]
    pub fn bytes(&self, name: &str) -> Option<&[u8]> {
        self.get(name).and_then(FieldValue::as_bytes)
    }

    /// Display label for a coded field.
    ///
    /// Returns `None` for fields without a lookup table, and `"Unknown"` for
    /// a code the table does not define. The raw code stays available via
    /// [`Record::int`].
    #[must_use]
    pub fn annotation(&self, name: &str) -> Option<&'static str> {
        let (index, field) = find_field(name)?;
        annotate(field, &self.values[index])
    }

    /// Iterate `(offset, descriptor, value)` in file order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'static FieldDescriptor, &FieldValue)> {
        fields()
            .zip(self.values.iter())
            .map(|((offset, field), value)| (offset, field, value))
    }
}

/// Label for a value of a coded field.
#[must_use]
pub fn annotate(field: &FieldDescriptor, value: &FieldValue) -> Option<&'static str> {
    let table = field.lookup?;
    value.as_int().map(|code| table.label_or_unknown(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FieldKind;
    use crate::lookup::UNKNOWN_LABEL;

    #[test]
    fn test_new_is_all_zero() {
        let record = Record::new();
        assert!(record.iter().all(|(_, _, value)| value.is_zero()));
        assert_eq!(record.bytes("Reserved4_2").map(<[u8]>::len), Some(41));
    }

    #[test]
    fn test_defaults() {
        let record = Record::defaults();
        assert_eq!(record.text("Company").unwrap().as_str(), "MECC");
        assert_eq!(
            record.text("GameTitle").unwrap().as_str(),
            "The Oregon Trail for Windows"
        );
        assert_eq!(record.text("SaveFileVersion").unwrap().as_str(), "1.0");
        for (_, field, value) in record.iter() {
            if field.is_reserved() {
                assert!(value.is_zero(), "{} should be zero", field.name);
            }
        }
    }

    #[test]
    fn test_prompted_fields() {
        let names: Vec<_> = Record::prompted_fields().map(|field| field.name).collect();
        assert_eq!(names.first(), Some(&"TemperatureString"));
        assert_eq!(names.last(), Some(&"DayOfMonth"));
        assert!(names.contains(&"Leader"));
        assert!(!names.contains(&"Company"));
        assert!(!names.iter().any(|name| name.starts_with("Reserved")));
        assert!(!names.iter().any(|name| name.starts_with("Unknown")));
    }

    #[test]
    fn test_set_and_get() {
        let mut record = Record::new();
        record.set("Oxen", 6).unwrap();
        record.set("Leader", "Ezra").unwrap();
        assert_eq!(record.int("Oxen"), Some(6));
        assert_eq!(record.text("Leader").unwrap().as_str(), "Ezra");
        assert_eq!(record.int("Leader"), None);
    }

    #[test]
    fn test_set_rejects_unknown_and_mismatched() {
        let mut record = Record::new();
        assert!(matches!(
            record.set("Wagons", 1),
            Err(GamError::UnknownField { .. })
        ));
        assert!(matches!(
            record.set("Oxen", "six"),
            Err(GamError::KindMismatch {
                expected: FieldKind::I16,
                ..
            })
        ));
        assert!(matches!(
            record.set("Reserved2", 0),
            Err(GamError::KindMismatch { .. })
        ));
    }

    #[test]
    fn test_set_pads_short_bytes() {
        let mut record = Record::new();
        record.set("Reserved13", vec![0xaa]).unwrap();
        assert_eq!(record.bytes("Reserved13"), Some(&[0xaa, 0, 0, 0][..]));

        record.set("Reserved13", vec![0xbb; 6]).unwrap();
        assert_eq!(record.bytes("Reserved13").map(<[u8]>::len), Some(6));
    }

    #[test]
    fn test_short_bytes_roundtrip() {
        let mut record = Record::new();
        record.set("Reserved13", vec![0xaa]).unwrap();
        record.set("Reserved2", Vec::<u8>::new()).unwrap();
        let bytes = crate::codec::encode(&record).unwrap();
        assert_eq!(crate::codec::decode(&bytes).unwrap(), record);
    }

    #[test]
    fn test_annotation() {
        let mut record = Record::new();
        record.set("OccupationValue", 3).unwrap();
        record.set("LeaderStatus", 15).unwrap();
        record.set("Pace", 9).unwrap();
        assert_eq!(record.annotation("OccupationValue"), Some("Doctor"));
        assert_eq!(record.annotation("LeaderStatus"), Some("Deceased"));
        assert_eq!(record.annotation("Pace"), Some(UNKNOWN_LABEL));
        assert_eq!(record.annotation("Oxen"), None);
        assert_eq!(record.annotation("Nope"), None);
    }
}
