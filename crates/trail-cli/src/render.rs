//! Human- and machine-readable views of a save record.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use trail_gam::lookup::ALL_TABLES;
use trail_gam::{FieldDescriptor, FieldValue, Record, annotate, layout};

/// One field as shown by `show --format json`.
#[derive(Debug, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
    pub kind: &'static str,
    pub value: ViewValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    /// Hex of bytes stored after a text terminator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tail: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ViewValue {
    Text(String),
    Int(i64),
}

/// Field views in file order, optionally skipping reserved regions.
pub fn field_views(record: &Record, include_reserved: bool) -> Vec<FieldView> {
    record
        .iter()
        .filter(|(_, field, _)| include_reserved || !field.is_reserved())
        .map(|(offset, field, value)| FieldView {
            name: field.name,
            offset,
            width: field.width,
            kind: field.kind.as_str(),
            value: match value {
                FieldValue::Int(int) => ViewValue::Int(*int),
                other => ViewValue::Text(other.to_string()),
            },
            label: annotate(field, value),
            tail: value
                .as_text()
                .filter(|text| !text.tail().is_empty())
                .map(|text| hex::encode(text.tail())),
        })
        .collect()
}

/// Pretty JSON array of field views.
pub fn render_json(record: &Record, include_reserved: bool) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&field_views(record, include_reserved))
}

/// One line of the plain-text dump.
///
/// Integers show hex and decimal, coded fields add their label, raw regions
/// show hex.
pub fn text_line(field: &FieldDescriptor, value: &FieldValue) -> String {
    let rendered = match (value, annotate(field, value)) {
        (FieldValue::Int(int), Some(label)) => format!("{int} ({label})"),
        (FieldValue::Int(int), None) => format!("{} ({int})", hex_int(*int)),
        (other, _) => other.to_string(),
    };
    format!("{:<20}: {rendered}", field.name)
}

fn hex_int(value: i64) -> String {
    if value < 0 {
        format!("-0x{:X}", value.unsigned_abs())
    } else {
        format!("0x{value:X}")
    }
}

/// Plain-text dump of every field, one per line.
pub fn render_text(record: &Record, include_reserved: bool) -> String {
    record
        .iter()
        .filter(|(_, field, _)| include_reserved || !field.is_reserved())
        .map(|(_, field, value)| text_line(field, value) + "\n")
        .collect()
}

/// Table of field values.
pub fn render_table(record: &Record, include_reserved: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Offset"),
        header_cell("Kind"),
        header_cell("Value"),
        header_cell("Label"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    for (offset, field, value) in record.iter() {
        if !include_reserved && field.is_reserved() {
            continue;
        }
        let name = if field.is_reserved() {
            dim_cell(field.name)
        } else {
            Cell::new(field.name)
        };
        let label = match annotate(field, value) {
            Some(trail_gam::UNKNOWN_LABEL) => Cell::new(trail_gam::UNKNOWN_LABEL).fg(Color::Yellow),
            Some(label) => Cell::new(label),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            name,
            Cell::new(offset),
            dim_cell(kind_label(field)),
            Cell::new(value),
            label,
        ]);
    }
    table
}

/// Table describing the record layout.
pub fn render_layout() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Offset"),
        header_cell("Width"),
        header_cell("Kind"),
        header_cell("Lookup"),
        header_cell("Default"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    for (offset, field) in layout::fields() {
        table.add_row(vec![
            Cell::new(field.name),
            Cell::new(offset),
            Cell::new(field.width),
            Cell::new(field.kind),
            field
                .lookup
                .map_or_else(|| dim_cell("-"), |lookup| Cell::new(lookup.name)),
            field
                .default
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    table
}

/// Table of every lookup table's codes and labels.
pub fn render_lookup_tables() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Code"),
        header_cell("Label"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    for lookup in ALL_TABLES {
        for (code, label) in lookup.entries {
            table.add_row(vec![
                Cell::new(lookup.name).fg(Color::Blue),
                Cell::new(code),
                Cell::new(label),
            ]);
        }
    }
    table
}

fn kind_label(field: &FieldDescriptor) -> String {
    if field.kind.is_integer() {
        field.kind.to_string()
    } else {
        format!("{}[{}]", field.kind, field.width)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        let mut record = Record::defaults();
        record.set("Oxen", 6).unwrap();
        record.set("OccupationValue", 3).unwrap();
        record.set("Leader", "Ezra").unwrap();
        record.set("DistanceTraveled", -1).unwrap();
        record.set("Pace", 7).unwrap();
        record
    }

    fn lines_for(record: &Record, names: &[&str]) -> String {
        record
            .iter()
            .filter(|(_, field, _)| names.contains(&field.name))
            .map(|(_, field, value)| text_line(field, value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_text_lines() {
        let record = sample();
        let lines = lines_for(
            &record,
            &[
                "Company",
                "DistanceTraveled",
                "Pace",
                "Oxen",
                "OccupationValue",
                "Leader",
                "Reserved13",
            ],
        );
        insta::assert_snapshot!(lines, @r"
        Company             : MECC
        DistanceTraveled    : -0x1 (-1)
        Pace                : 7 (Unknown)
        Oxen                : 0x6 (6)
        OccupationValue     : 3 (Doctor)
        Leader              : Ezra
        Reserved13          : 00000000
        ");
    }

    #[test]
    fn test_render_text_hides_reserved() {
        let text = render_text(&sample(), false);
        assert!(!text.contains("Reserved"));
        assert!(!text.contains("Unknown1"));
        assert_eq!(text.lines().count(), 34);

        let all = render_text(&sample(), true);
        assert_eq!(all.lines().count(), trail_gam::FIELD_COUNT);
    }

    #[test]
    fn test_field_views_json() {
        let mut record = sample();
        record
            .set("PartyMember1", trail_gam::SaveText::with_tail("Al", vec![0x41]))
            .unwrap();
        let json = render_json(&record, false).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let fields = parsed.as_array().unwrap();

        let occupation = fields
            .iter()
            .find(|field| field["name"] == "OccupationValue")
            .unwrap();
        assert_eq!(occupation["value"], 3);
        assert_eq!(occupation["label"], "Doctor");
        assert_eq!(occupation["offset"], 172);

        let member = fields
            .iter()
            .find(|field| field["name"] == "PartyMember1")
            .unwrap();
        assert_eq!(member["value"], "Al");
        assert_eq!(member["tail"], "41");

        let oxen = fields.iter().find(|field| field["name"] == "Oxen").unwrap();
        assert!(oxen.get("label").is_none());
    }

    #[test]
    fn test_tables_have_rows() {
        assert_eq!(render_layout().row_iter().count(), trail_gam::FIELD_COUNT);
        let lookup_rows: usize = ALL_TABLES.iter().map(|table| table.entries.len()).sum();
        assert_eq!(render_lookup_tables().row_iter().count(), lookup_rows);
        assert_eq!(render_table(&sample(), true).row_iter().count(), trail_gam::FIELD_COUNT);
    }
}
