//! Setting tables: bidirectional maps between symbolic labels and raw
//! register values.
//!
//! The polling-rate table is shared by both models. The DPI tables differ
//! per model: the G400 exposes a single locked level, the G400s exposes a
//! locked variant of every level. A locked level changes firmware-side
//! behavior of the DPI+/DPI- buttons but is just another raw byte here.

use crate::device::MouseModel;

/// One symbolic setting and its raw register value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingEntry {
    pub label: &'static str,
    pub raw: u8,
}

/// An ordered table of setting entries, unique by label and by raw value.
#[derive(Debug, Clone, Copy)]
pub struct SettingTable {
    name: &'static str,
    entries: &'static [SettingEntry],
}

const fn entry(label: &'static str, raw: u8) -> SettingEntry {
    SettingEntry { label, raw }
}

/// Polling rates in Hz, shared by both models.
pub static SAMPLE_RATES: SettingTable = SettingTable {
    name: "sampling_rate",
    entries: &[
        entry("1000", 0x00),
        entry("500", 0x01),
        entry("250", 0x02),
        entry("125", 0x03),
    ],
};

static G400_DPI: SettingTable = SettingTable {
    name: "dpi_level",
    entries: &[
        entry("400", 0x03),
        entry("800", 0x04),
        entry("1800", 0x05),
        entry("3600", 0x06),
        entry("3600_locked", 0x07),
    ],
};

static G400S_DPI: SettingTable = SettingTable {
    name: "dpi_level",
    entries: &[
        entry("400", 0x03),
        entry("800", 0x04),
        entry("1800", 0x05),
        entry("3600", 0x06),
        entry("400_locked", 0x07),
        entry("800_locked", 0x08),
        entry("1800_locked", 0x09),
        entry("3600_locked", 0x0A),
    ],
};

/// DPI table for a model. Raw values are model-specific.
pub fn dpi_table(model: MouseModel) -> &'static SettingTable {
    match model {
        MouseModel::G400 => &G400_DPI,
        MouseModel::G400s => &G400S_DPI,
    }
}

impl SettingTable {
    /// What this table configures, for error messages and usage text.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Raw register value for a symbolic label.
    pub fn label_to_raw(&self, label: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.raw)
    }

    /// Symbolic label for a raw register value.
    pub fn raw_to_label(&self, raw: u8) -> Option<&'static str> {
        self.entries.iter().find(|e| e.raw == raw).map(|e| e.label)
    }

    /// Label for a raw value, degrading to `unknown(<n>)` for values the
    /// firmware reports but this table does not document.
    pub fn describe_raw(&self, raw: u8) -> String {
        match self.raw_to_label(raw) {
            Some(label) => label.to_string(),
            None => format!("unknown({raw})"),
        }
    }

    /// All labels in table order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tables() -> [&'static SettingTable; 3] {
        [
            &SAMPLE_RATES,
            dpi_table(MouseModel::G400),
            dpi_table(MouseModel::G400s),
        ]
    }

    #[test]
    fn tables_are_unique_by_label_and_raw() {
        for table in all_tables() {
            for (i, a) in table.entries.iter().enumerate() {
                for b in &table.entries[i + 1..] {
                    assert_ne!(a.label, b.label, "duplicate label in {}", table.name);
                    assert_ne!(a.raw, b.raw, "duplicate raw in {}", table.name);
                }
            }
        }
    }

    #[test]
    fn lookups_round_trip_both_directions() {
        for table in all_tables() {
            for e in table.entries {
                let raw = table.label_to_raw(e.label).unwrap();
                assert_eq!(table.raw_to_label(raw), Some(e.label));
                let label = table.raw_to_label(e.raw).unwrap();
                assert_eq!(table.label_to_raw(label), Some(e.raw));
            }
        }
    }

    #[test]
    fn sample_rate_raw_values_match_protocol() {
        assert_eq!(SAMPLE_RATES.label_to_raw("1000"), Some(0x00));
        assert_eq!(SAMPLE_RATES.label_to_raw("500"), Some(0x01));
        assert_eq!(SAMPLE_RATES.label_to_raw("250"), Some(0x02));
        assert_eq!(SAMPLE_RATES.label_to_raw("125"), Some(0x03));
    }

    #[test]
    fn g400_dpi_has_single_locked_level() {
        let table = dpi_table(MouseModel::G400);
        assert_eq!(table.label_to_raw("3600_locked"), Some(0x07));
        assert_eq!(table.label_to_raw("400_locked"), None);
    }

    #[test]
    fn g400s_dpi_has_locked_variant_of_every_level() {
        let table = dpi_table(MouseModel::G400s);
        for label in ["400_locked", "800_locked", "1800_locked", "3600_locked"] {
            assert!(table.label_to_raw(label).is_some(), "missing {label}");
        }
    }

    #[test]
    fn describe_raw_falls_back_on_undocumented_values() {
        assert_eq!(SAMPLE_RATES.describe_raw(0x01), "500");
        assert_eq!(SAMPLE_RATES.describe_raw(0x7F), "unknown(127)");
        assert_eq!(dpi_table(MouseModel::G400).describe_raw(0xFF), "unknown(255)");
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert_eq!(SAMPLE_RATES.label_to_raw("666"), None);
        assert_eq!(dpi_table(MouseModel::G400).label_to_raw(""), None);
    }
}
