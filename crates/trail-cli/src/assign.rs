//! Parsing of `NAME=VALUE` field assignments.
//!
//! Integer fields take a decimal or `0x` hex number, or a label from the
//! field's lookup table. Text fields take the value literally and raw fields
//! take hex.

use anyhow::{Context, Result, anyhow, bail};
use trail_gam::layout::find_field;
use trail_gam::{FieldDescriptor, FieldKind, FieldValue, Record, SaveText};

/// A parsed assignment of a value to a named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub field: &'static FieldDescriptor,
    pub value: FieldValue,
}

/// Parse `NAME=VALUE`.
pub fn parse_assignment(spec: &str) -> Result<Assignment> {
    let (name, raw) = spec
        .split_once('=')
        .ok_or_else(|| anyhow!("expected NAME=VALUE, got '{spec}'"))?;
    let name = name.trim();
    let (_, field) = find_field(name).ok_or_else(|| anyhow!("unknown field '{name}'"))?;
    let value = parse_value(field, raw)?;
    Ok(Assignment { field, value })
}

/// Parse a value for `field`.
pub fn parse_value(field: &FieldDescriptor, raw: &str) -> Result<FieldValue> {
    match field.kind {
        FieldKind::Text => Ok(FieldValue::Text(SaveText::new(raw))),
        FieldKind::Bytes => {
            let digits = raw.trim();
            let digits = strip_hex_prefix(digits).unwrap_or(digits);
            let bytes = hex::decode(digits)
                .with_context(|| format!("{} expects hex bytes", field.name))?;
            Ok(FieldValue::Bytes(bytes))
        }
        kind => {
            let value = parse_int(field, raw.trim())?;
            if let Some((min, max)) = kind.range()
                && !(min..=max).contains(&value)
            {
                bail!("{} must be between {min} and {max}", field.name);
            }
            Ok(FieldValue::Int(value))
        }
    }
}

fn parse_int(field: &FieldDescriptor, raw: &str) -> Result<i64> {
    if let Some(hex) = strip_hex_prefix(raw) {
        if hex.starts_with(['+', '-']) {
            bail!("invalid hex number '{raw}' for {}", field.name);
        }
        return i64::from_str_radix(hex, 16)
            .with_context(|| format!("invalid hex number '{raw}' for {}", field.name));
    }
    if let Ok(value) = raw.parse::<i64>() {
        return Ok(value);
    }
    match field.lookup {
        Some(table) => table.code_for(raw).ok_or_else(|| {
            let labels: Vec<_> = table.entries.iter().map(|(_, label)| *label).collect();
            anyhow!(
                "{} expects a number or one of: {}",
                field.name,
                labels.join(", ")
            )
        }),
        None => bail!("{} expects a number, got '{raw}'", field.name),
    }
}

fn strip_hex_prefix(raw: &str) -> Option<&str> {
    raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X"))
}

/// Apply assignments to a record in order.
pub fn apply(record: &mut Record, assignments: &[Assignment]) -> Result<()> {
    for assignment in assignments {
        record
            .set(assignment.field.name, assignment.value.clone())
            .with_context(|| format!("set {}", assignment.field.name))?;
    }
    Ok(())
}
