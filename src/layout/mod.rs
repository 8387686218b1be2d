//! Core data model for header pinout maps.
//!
//! This module contains:
//! - `PinRecord` - One physical pin with its role and symbol
//! - `LegendEntry` - A symbol color explained for the legend block
//! - `LayoutTable` - The full ordered table handed to the renderer
//! - `Widths` - Per-field column widths
//! - Loading and validating tables from YAML layout files

pub mod board;
mod load;
pub(crate) mod validations;
mod widths;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Symbol;

pub use load::LayoutError;
pub use validations::{ValidationError, validate_table};
pub use widths::Widths;

/// Default voltage bias of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pull {
    #[default]
    #[serde(rename = "none")]
    Unset,
    High,
    Low,
}

impl Pull {
    /// Text shown in the pull column; blank when the pin has no bias.
    pub fn label(self) -> &'static str {
        match self {
            Pull::Unset => "",
            Pull::High => "high",
            Pull::Low => "low",
        }
    }
}

impl fmt::Display for Pull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which row of a two-row header a pin sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PinRecord {
    pub pin: u32,
    pub side: Side,
    #[serde(default)]
    pub pull: Pull,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub symbol: Symbol,
}

impl PinRecord {
    pub fn new(pin: u32, side: Side, name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            pin,
            side,
            pull: Pull::Unset,
            name: name.into(),
            description: String::new(),
            symbol,
        }
    }

    pub fn with_pull(mut self, pull: Pull) -> Self {
        self.pull = pull;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Physical row on the header, starting at 1. Pins 1 and 2 share row 1.
    pub fn row(&self) -> u32 {
        self.pin.div_ceil(2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LegendEntry {
    pub symbol: Symbol,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl LegendEntry {
    pub fn new(symbol: Symbol, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            symbol,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// One physical row: the left pin and the right pin, either of which may be
/// missing in a partial table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    pub left: Option<&'a PinRecord>,
    pub right: Option<&'a PinRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutTable {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub widths: Widths,
    pub pins: Vec<PinRecord>,
    #[serde(default)]
    pub legend: Vec<LegendEntry>,
}

impl LayoutTable {
    /// Group pins into physical rows, ordered top to bottom.
    ///
    /// Pins are placed by their `side`, so a table with a missing partner
    /// still yields a row with one empty half.
    pub fn rows(&self) -> Vec<Row<'_>> {
        let mut by_row: BTreeMap<u32, Row<'_>> = BTreeMap::new();
        for record in &self.pins {
            let row = by_row.entry(record.row()).or_insert(Row {
                left: None,
                right: None,
            });
            match record.side {
                Side::Left => row.left = Some(record),
                Side::Right => row.right = Some(record),
            }
        }
        by_row.into_values().collect()
    }

    pub fn get(&self, pin: u32) -> Option<&PinRecord> {
        self.pins.iter().find(|r| r.pin == pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorSpec, Fg};

    fn sym() -> Symbol {
        Symbol::new("●", ColorSpec::fg(Fg::Green))
    }

    #[test]
    fn test_row_numbers() {
        assert_eq!(PinRecord::new(1, Side::Left, "a", sym()).row(), 1);
        assert_eq!(PinRecord::new(2, Side::Right, "a", sym()).row(), 1);
        assert_eq!(PinRecord::new(39, Side::Left, "a", sym()).row(), 20);
        assert_eq!(PinRecord::new(40, Side::Right, "a", sym()).row(), 20);
    }

    #[test]
    fn test_rows_pair_by_physical_position() {
        let table = LayoutTable {
            pins: vec![
                PinRecord::new(4, Side::Right, "d", sym()),
                PinRecord::new(1, Side::Left, "a", sym()),
                PinRecord::new(2, Side::Right, "b", sym()),
                PinRecord::new(3, Side::Left, "c", sym()),
            ],
            ..Default::default()
        };

        let rows = table.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].left.map(|r| r.pin), Some(1));
        assert_eq!(rows[0].right.map(|r| r.pin), Some(2));
        assert_eq!(rows[1].left.map(|r| r.pin), Some(3));
        assert_eq!(rows[1].right.map(|r| r.pin), Some(4));
    }

    #[test]
    fn test_rows_with_missing_partner() {
        let table = LayoutTable {
            pins: vec![
                PinRecord::new(1, Side::Left, "a", sym()),
                PinRecord::new(4, Side::Right, "d", sym()),
            ],
            ..Default::default()
        };

        let rows = table.rows();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].right.is_none());
        assert!(rows[1].left.is_none());
    }

    #[test]
    fn test_pull_labels() {
        assert_eq!(Pull::Unset.label(), "");
        assert_eq!(Pull::High.to_string(), "high");
        assert_eq!(Pull::Low.to_string(), "low");
    }
}
