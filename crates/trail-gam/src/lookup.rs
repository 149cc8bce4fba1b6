//! Enumeration tables for coded save fields.
//!
//! Several integer fields in a save file hold small codes whose meaning the
//! game resolves through fixed tables. These tables are used for display only:
//! decoding and encoding never depend on them, and a code missing from its
//! table is not an error.

/// Label shown for a code that has no entry in its table.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// A fixed mapping from integer codes to human-readable labels.
#[derive(Debug, PartialEq, Eq)]
pub struct LookupTable {
    /// Table name, used in listings.
    pub name: &'static str,
    /// `(code, label)` pairs in ascending code order.
    pub entries: &'static [(i64, &'static str)],
}

impl LookupTable {
    /// Label for `code`, if the table defines one.
    #[must_use]
    pub fn label(&self, code: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == code)
            .map(|(_, label)| *label)
    }

    /// Label for `code`, falling back to [`UNKNOWN_LABEL`].
    #[must_use]
    pub fn label_or_unknown(&self, code: i64) -> &'static str {
        self.label(code).unwrap_or(UNKNOWN_LABEL)
    }

    /// Reverse lookup of a label, ignoring ASCII case.
    ///
    /// The empty label (temperature code 5) only matches an empty input.
    #[must_use]
    pub fn code_for(&self, label: &str) -> Option<i64> {
        let label = label.trim();
        self.entries
            .iter()
            .find(|(_, entry)| entry.eq_ignore_ascii_case(label))
            .map(|(code, _)| *code)
    }

    /// Whether `code` has an entry.
    #[must_use]
    pub fn contains(&self, code: i64) -> bool {
        self.label(code).is_some()
    }
}

/// Phrase shown under the thermometer.
pub const TEMPERATURE: LookupTable = LookupTable {
    name: "Temperature",
    entries: &[
        (0, "Very Cold"),
        (1, "Cold"),
        (2, "Cool"),
        (3, "Warm"),
        (4, "@W have reached @N"),
        (5, ""),
    ],
};

/// Leader occupation.
pub const OCCUPATION: LookupTable = LookupTable {
    name: "Occupation",
    entries: &[
        (0, "Banker"),
        (1, "Blacksmith"),
        (2, "Carpenter"),
        (3, "Doctor"),
        (4, "Farmer"),
        (5, "Merchant"),
        (6, "Saddlemaker"),
        (7, "Teacher"),
    ],
};

/// Food rations.
pub const RATIONS: LookupTable = LookupTable {
    name: "Rations",
    entries: &[(0, "Filling"), (1, "Meager"), (2, "Bare-Bones")],
};

/// Travel pace.
pub const PACE: LookupTable = LookupTable {
    name: "Pace",
    entries: &[(0, "Steady"), (1, "Strenuous"), (2, "Grueling")],
};

/// Health status, shared by the leader and every party member.
pub const STATUS: LookupTable = LookupTable {
    name: "Status",
    entries: &[
        (0, "Default"),
        (1, "Exhaustion"),
        (2, "Typhoid"),
        (3, "Cholera"),
        (4, "Measles"),
        (5, "Dysentery"),
        (6, "Fever"),
        (7, "Broken Leg"),
        (8, "Broken Arm"),
        (9, "Snakebite"),
        (15, "Deceased"),
    ],
};

/// All tables, in listing order.
pub static ALL_TABLES: [&LookupTable; 5] = [&TEMPERATURE, &OCCUPATION, &RATIONS, &PACE, &STATUS];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_known_and_unknown() {
        assert_eq!(OCCUPATION.label(3), Some("Doctor"));
        assert_eq!(OCCUPATION.label(99), None);
        assert_eq!(OCCUPATION.label_or_unknown(99), UNKNOWN_LABEL);
        assert_eq!(STATUS.label_or_unknown(15), "Deceased");
        assert_eq!(STATUS.label_or_unknown(10), UNKNOWN_LABEL);
    }

    #[test]
    fn test_code_for_is_case_insensitive() {
        assert_eq!(RATIONS.code_for("bare-bones"), Some(2));
        assert_eq!(PACE.code_for(" Grueling "), Some(2));
        assert_eq!(STATUS.code_for("broken leg"), Some(7));
        assert_eq!(STATUS.code_for("Scurvy"), None);
    }

    #[test]
    fn test_empty_temperature_label() {
        assert_eq!(TEMPERATURE.label(5), Some(""));
        assert_eq!(TEMPERATURE.code_for(""), Some(5));
        assert!(!TEMPERATURE.contains(6));
    }

    #[test]
    fn test_tables_sorted_and_unique() {
        for table in ALL_TABLES {
            let codes: Vec<i64> = table.entries.iter().map(|(code, _)| *code).collect();
            let mut sorted = codes.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(codes, sorted, "{} codes must be ascending", table.name);
        }
    }
}
