//! Column widths for the pin fields.
//!
//! A layout file may override any width under its `widths:` key; missing
//! keys keep their defaults.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use super::LayoutTable;
use crate::render::{HEADER_DESCRIPTION, HEADER_NAME, HEADER_PIN, HEADER_PULL, HEADER_SYMBOL};

/// Fixed width of each rendered field, in terminal columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Widths {
    pub symbol: usize,
    pub pin: usize,
    pub pull: usize,
    pub name: usize,
    pub description: usize,
    /// Spaces between the left and right halves of a row.
    pub gutter: usize,
}

impl Default for Widths {
    fn default() -> Self {
        Self {
            symbol: 2,
            pin: 3,
            pull: 4,
            name: 8,
            description: 13,
            gutter: 1,
        }
    }
}

impl Widths {
    /// Widen these widths so that every value and header label in `table`
    /// fits without truncation. Widths never shrink below `self`.
    pub fn fit(&self, table: &LayoutTable) -> Self {
        let mut w = *self;

        w.symbol = w.symbol.max(HEADER_SYMBOL.width());
        w.pin = w.pin.max(HEADER_PIN.width());
        w.pull = w.pull.max(HEADER_PULL.width());
        w.name = w.name.max(HEADER_NAME.width());
        w.description = w.description.max(HEADER_DESCRIPTION.width());

        for record in &table.pins {
            w.symbol = w.symbol.max(record.symbol.width());
            w.pin = w.pin.max(record.pin.to_string().len());
            w.pull = w.pull.max(record.pull.label().width());
            w.name = w.name.max(record.name.width());
            if !record.description.is_empty() {
                // Parentheses are added at render time.
                w.description = w.description.max(record.description.width() + 2);
            }
        }

        w
    }

    /// Visible width of one half of a row (all fields plus separators).
    pub fn half(&self) -> usize {
        self.symbol + self.pin + self.pull + self.name + self.description + 4
    }
}
