//! Save record decoding and encoding.
//!
//! Both directions walk the layout in order, one fixed-width slot per field.
//! Decoding never fails on field contents: unknown codes, stray bytes after a
//! text terminator and reserved regions are all kept as-is, so
//! `encode(decode(b))` reproduces `b` exactly.

use tracing::debug;

use crate::error::{GamError, Result};
use crate::layout::{FieldDescriptor, FieldKind, RECORD_LEN, fields};
use crate::options::{EncodeOptions, TextMode};
use crate::record::Record;
use crate::value::{FieldValue, SaveText};

/// Decode one save record.
///
/// # Errors
///
/// Returns [`GamError::SizeMismatch`] unless `data` is exactly
/// [`RECORD_LEN`] bytes.
pub fn decode(data: &[u8]) -> Result<Record> {
    if data.len() != RECORD_LEN {
        return Err(GamError::size_mismatch(data.len()));
    }

    let mut values = Vec::with_capacity(crate::layout::FIELD_COUNT);
    for (offset, field) in fields() {
        let slot = &data[offset..offset + field.width];
        let value = decode_field(slot, field);

        if let (Some(table), Some(code)) = (field.lookup, value.as_int())
            && !table.contains(code)
        {
            debug!(field = field.name, code, table = table.name, "code not in lookup table");
        }

        values.push(value);
    }

    debug!(bytes = data.len(), "decoded save record");
    Ok(Record::from_values(values))
}

/// Encode a record with default (strict) options.
///
/// # Errors
///
/// See [`encode_with_options`].
pub fn encode(record: &Record) -> Result<[u8; RECORD_LEN]> {
    encode_with_options(record, &EncodeOptions::default())
}

/// Encode a record.
///
/// Nothing is returned unless every field encodes.
///
/// # Errors
///
/// - [`GamError::ValueTooLong`] for text or raw values wider than their
///   field (strict mode only).
/// - [`GamError::ValueOutOfRange`] for integers outside their field's type.
/// - [`GamError::Unencodable`] for text that has no Windows-1252 form.
pub fn encode_with_options(
    record: &Record,
    options: &EncodeOptions,
) -> Result<[u8; RECORD_LEN]> {
    let mut buf = [0u8; RECORD_LEN];

    for ((offset, field), value) in fields().zip(record.values()) {
        let slot = &mut buf[offset..offset + field.width];
        encode_field(slot, field, value, options)?;
    }

    debug!(bytes = RECORD_LEN, mode = ?options.text_mode, "encoded save record");
    Ok(buf)
}

fn decode_field(slot: &[u8], field: &FieldDescriptor) -> FieldValue {
    match field.kind {
        FieldKind::Text => FieldValue::Text(SaveText::from_slot(slot)),
        FieldKind::Bytes => FieldValue::Bytes(slot.to_vec()),
        FieldKind::I8 => FieldValue::Int(i64::from(i8::from_le_bytes([slot[0]]))),
        FieldKind::U8 => FieldValue::Int(i64::from(slot[0])),
        FieldKind::I16 => FieldValue::Int(i64::from(read_i16(slot))),
        FieldKind::U16 => FieldValue::Int(i64::from(read_u16(slot))),
        FieldKind::I32 => FieldValue::Int(i64::from(read_i32(slot))),
    }
}

/// Write one value into its zero-filled slot.
fn encode_field(
    slot: &mut [u8],
    field: &FieldDescriptor,
    value: &FieldValue,
    options: &EncodeOptions,
) -> Result<()> {
    if !value.fits_kind(field.kind) {
        return Err(GamError::KindMismatch {
            field: field.name,
            expected: field.kind,
        });
    }

    match value {
        FieldValue::Text(text) => {
            let bytes = text.to_slot_bytes().map_err(|reason| GamError::Unencodable {
                field: field.name,
                reason,
            })?;
            write_padded(slot, field, &bytes, options.text_mode)
        }
        FieldValue::Bytes(bytes) => write_padded(slot, field, bytes, options.text_mode),
        FieldValue::Int(int) => write_int(slot, field, *int),
    }
}

/// Copy `bytes` into the slot; the rest of the slot stays zero.
fn write_padded(
    slot: &mut [u8],
    field: &FieldDescriptor,
    bytes: &[u8],
    mode: TextMode,
) -> Result<()> {
    let len = match mode {
        TextMode::Strict if bytes.len() > slot.len() => {
            return Err(GamError::value_too_long(field.name, field.width, bytes.len()));
        }
        TextMode::Strict => bytes.len(),
        TextMode::Truncate => bytes.len().min(slot.len()),
    };
    slot[..len].copy_from_slice(&bytes[..len]);
    Ok(())
}

fn write_int(slot: &mut [u8], field: &FieldDescriptor, value: i64) -> Result<()> {
    let out_of_range = || GamError::value_out_of_range(field.name, value, field.kind);
    match field.kind {
        FieldKind::I8 => {
            let v = i8::try_from(value).map_err(|_| out_of_range())?;
            slot.copy_from_slice(&v.to_le_bytes());
        }
        FieldKind::U8 => {
            let v = u8::try_from(value).map_err(|_| out_of_range())?;
            slot.copy_from_slice(&v.to_le_bytes());
        }
        FieldKind::I16 => {
            let v = i16::try_from(value).map_err(|_| out_of_range())?;
            slot.copy_from_slice(&v.to_le_bytes());
        }
        FieldKind::U16 => {
            let v = u16::try_from(value).map_err(|_| out_of_range())?;
            slot.copy_from_slice(&v.to_le_bytes());
        }
        FieldKind::I32 => {
            let v = i32::try_from(value).map_err(|_| out_of_range())?;
            slot.copy_from_slice(&v.to_le_bytes());
        }
        FieldKind::Text | FieldKind::Bytes => {
            return Err(GamError::KindMismatch {
                field: field.name,
                expected: field.kind,
            });
        }
    }
    Ok(())
}

/// Read a little-endian i16 from the start of a slot.
fn read_i16(slot: &[u8]) -> i16 {
    i16::from_le_bytes([slot[0], slot[1]])
}

/// Read a little-endian u16 from the start of a slot.
fn read_u16(slot: &[u8]) -> u16 {
    u16::from_le_bytes([slot[0], slot[1]])
}

/// Read a little-endian i32 from the start of a slot.
fn read_i32(slot: &[u8]) -> i32 {
    i32::from_le_bytes([slot[0], slot[1], slot[2], slot[3]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{find_field, offset_of};

    fn offset(name: &str) -> usize {
        offset_of(find_field(name).unwrap().0)
    }

    #[test]
    fn test_decode_size_mismatch() {
        for len in [0, 255, 256, 257, RECORD_LEN - 1, RECORD_LEN + 1] {
            match decode(&vec![0u8; len]) {
                Err(GamError::SizeMismatch { expected, actual }) => {
                    assert_eq!(expected, RECORD_LEN);
                    assert_eq!(actual, len);
                }
                other => panic!("expected SizeMismatch for {len} bytes, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_decode_little_endian() {
        let mut data = [0u8; RECORD_LEN];
        data[offset("DistanceTraveled")..][..2].copy_from_slice(&[0x34, 0x12]);
        data[offset("MoneyInCents")..][..4].copy_from_slice(&(-150_000i32).to_le_bytes());
        data[offset("OccupationValue")..][..2].copy_from_slice(&[0xff, 0xff]);
        data[offset("Oxen")..][..2].copy_from_slice(&[0xff, 0xff]);

        let record = decode(&data).unwrap();
        assert_eq!(record.int("DistanceTraveled"), Some(0x1234));
        assert_eq!(record.int("MoneyInCents"), Some(-150_000));
        assert_eq!(record.int("OccupationValue"), Some(65535));
        assert_eq!(record.int("Oxen"), Some(-1));
    }

    #[test]
    fn test_encode_layout() {
        let mut record = Record::defaults();
        record.set("Oxen", 6).unwrap();
        record.set("Pace", 2).unwrap();
        record.set("Leader", "Ezra").unwrap();

        let buf = encode(&record).unwrap();
        assert_eq!(&buf[0..4], b"MECC");
        assert_eq!(&buf[5..33], b"The Oregon Trail for Windows");
        assert_eq!(&buf[69..72], b"1.0");
        assert_eq!(&buf[150..152], &[6, 0]);
        assert_eq!(buf[146], 2);
        assert_eq!(&buf[192..206], b"Ezra\0\0\0\0\0\0\0\0\0\0");
    }

    #[test]
    fn test_encode_i16_bounds() {
        let mut record = Record::new();
        for ok in [32767, -32768] {
            record.set("Bullets", ok).unwrap();
            assert!(encode(&record).is_ok());
        }
        for bad in [32768, -32769] {
            record.set("Bullets", bad).unwrap();
            assert!(matches!(
                encode(&record),
                Err(GamError::ValueOutOfRange { field: "Bullets", .. })
            ));
        }
    }

    #[test]
    fn test_encode_unsigned_rejects_negative() {
        let mut record = Record::new();
        record.set("Pace", -1).unwrap();
        assert!(matches!(
            encode(&record),
            Err(GamError::ValueOutOfRange { field: "Pace", .. })
        ));
        record.set("Pace", 255).unwrap();
        assert!(encode(&record).is_ok());
        record.set("OccupationValue", 65536).unwrap();
        assert!(encode(&record).is_err());
    }

    #[test]
    fn test_encode_text_width() {
        let mut record = Record::new();
        record.set("GameTitle", "x".repeat(28)).unwrap();
        let buf = encode(&record).unwrap();
        assert_eq!(&buf[5..33], "x".repeat(28).as_bytes());
        assert_eq!(buf[33], 0);

        record.set("GameTitle", "x".repeat(29)).unwrap();
        assert!(matches!(
            encode(&record),
            Err(GamError::ValueTooLong {
                field: "GameTitle",
                width: 28,
                actual: 29
            })
        ));
    }

    #[test]
    fn test_encode_truncating() {
        let mut record = Record::new();
        record.set("Leader", "Bartholomew Jones").unwrap();
        record.set("Reserved5", vec![1, 2, 3]).unwrap();
        let options = EncodeOptions::new().truncating();
        let buf = encode_with_options(&record, &options).unwrap();
        assert_eq!(&buf[192..206], b"Bartholomew Jo");
        assert_eq!(buf[206], 0);
        assert_eq!(&buf[136..138], &[1, 2]);

        record.set("Oxen", 40_000).unwrap();
        assert!(encode_with_options(&record, &options).is_err());
    }

    #[test]
    fn test_encode_short_bytes_zero_padded() {
        let mut record = Record::new();
        record.set("Reserved13", vec![0xaa]).unwrap();
        let buf = encode(&record).unwrap();
        assert_eq!(&buf[288..292], &[0xaa, 0, 0, 0]);

        record.set("Reserved13", vec![0xaa; 5]).unwrap();
        assert!(matches!(
            encode(&record),
            Err(GamError::ValueTooLong { field: "Reserved13", .. })
        ));
    }

    #[test]
    fn test_encode_text_tail_overflow() {
        let mut record = Record::new();
        record
            .set("SaveFileVersion", SaveText::with_tail("1.0", vec![7]))
            .unwrap();
        assert!(matches!(
            encode(&record),
            Err(GamError::ValueTooLong { actual: 5, .. })
        ));
    }

    #[test]
    fn test_encode_unencodable_text() {
        let mut record = Record::new();
        record.set("Leader", "李").unwrap();
        assert!(matches!(
            encode(&record),
            Err(GamError::Unencodable { field: "Leader", .. })
        ));
    }

    #[test]
    fn test_unknown_code_preserved() {
        let mut data = [0u8; RECORD_LEN];
        data[offset("OccupationValue")] = 99;
        let record = decode(&data).unwrap();
        assert_eq!(record.int("OccupationValue"), Some(99));
        assert_eq!(record.annotation("OccupationValue"), Some("Unknown"));
        assert_eq!(encode(&record).unwrap(), data);
    }
}
