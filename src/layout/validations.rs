use std::collections::HashSet;
use thiserror::Error;

use super::{LayoutTable, PinRecord, Side};

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("layout has no pins")]
    NoPins,
    #[error("pin '{name}' has number 0 (pins are numbered from 1)")]
    ZeroPin { name: String },
    #[error("duplicate pin number {0}")]
    DuplicatePin(u32),
    #[error("pin {pin} is on the {side} side but {expected} pins belong on the {expected_side} side")]
    SideMismatch {
        pin: u32,
        side: Side,
        expected: &'static str,
        expected_side: Side,
    },
    #[error("pin {pin} symbol '{glyph}' must be a single visible character")]
    BadPinSymbol { pin: u32, glyph: String },
    #[error("legend entry '{name}' symbol '{glyph}' must be a single visible character")]
    BadLegendSymbol { name: String, glyph: String },
}

/// Validates an externally supplied table.
///
/// Checks that:
/// - The table has at least one pin
/// - Pin numbers are positive and unique
/// - Odd pins sit on the left side and even pins on the right
/// - Every symbol (pins and legend) is a single visible character
pub fn validate_table(table: &LayoutTable) -> Result<(), ValidationError> {
    if table.pins.is_empty() {
        return Err(ValidationError::NoPins);
    }

    let mut seen = HashSet::new();
    for record in &table.pins {
        validate_record(record)?;
        if !seen.insert(record.pin) {
            return Err(ValidationError::DuplicatePin(record.pin));
        }
    }

    for entry in &table.legend {
        if !entry.symbol.is_single_glyph() {
            return Err(ValidationError::BadLegendSymbol {
                name: entry.name.clone(),
                glyph: entry.symbol.glyph.clone(),
            });
        }
    }

    Ok(())
}

fn validate_record(record: &PinRecord) -> Result<(), ValidationError> {
    if record.pin == 0 {
        return Err(ValidationError::ZeroPin {
            name: record.name.clone(),
        });
    }

    let (expected, expected_side) = if record.pin % 2 == 1 {
        ("odd", Side::Left)
    } else {
        ("even", Side::Right)
    };
    if record.side != expected_side {
        return Err(ValidationError::SideMismatch {
            pin: record.pin,
            side: record.side,
            expected,
            expected_side,
        });
    }

    if !record.symbol.is_single_glyph() {
        return Err(ValidationError::BadPinSymbol {
            pin: record.pin,
            glyph: record.symbol.glyph.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorSpec, Symbol};
    use crate::layout::LegendEntry;

    fn dot() -> Symbol {
        Symbol::new("●", ColorSpec::default())
    }

    fn table(pins: Vec<PinRecord>) -> LayoutTable {
        LayoutTable {
            pins,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_table() {
        let t = table(vec![
            PinRecord::new(1, Side::Left, "3v3", dot()),
            PinRecord::new(2, Side::Right, "5v", dot()),
        ]);
        assert!(validate_table(&t).is_ok());
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(validate_table(&table(vec![])), Err(ValidationError::NoPins));
    }

    #[test]
    fn test_zero_pin() {
        let t = table(vec![PinRecord::new(0, Side::Right, "bad", dot())]);
        assert!(matches!(
            validate_table(&t),
            Err(ValidationError::ZeroPin { name }) if name == "bad"
        ));
    }

    #[test]
    fn test_duplicate_pin() {
        let t = table(vec![
            PinRecord::new(3, Side::Left, "a", dot()),
            PinRecord::new(3, Side::Left, "b", dot()),
        ]);
        assert_eq!(validate_table(&t), Err(ValidationError::DuplicatePin(3)));
    }

    #[test]
    fn test_odd_pin_on_right_side() {
        let t = table(vec![PinRecord::new(5, Side::Right, "a", dot())]);
        let err = validate_table(&t).unwrap_err();
        assert!(matches!(err, ValidationError::SideMismatch { pin: 5, .. }));
        assert!(err.to_string().contains("odd pins belong on the left side"));
    }

    #[test]
    fn test_multi_char_symbol() {
        let t = table(vec![PinRecord::new(
            1,
            Side::Left,
            "a",
            Symbol::new("**", ColorSpec::default()),
        )]);
        assert!(matches!(
            validate_table(&t),
            Err(ValidationError::BadPinSymbol { pin: 1, .. })
        ));
    }

    #[test]
    fn test_wide_symbol_is_accepted() {
        let t = table(vec![PinRecord::new(
            1,
            Side::Left,
            "電源",
            Symbol::new("🔴", ColorSpec::default()),
        )]);
        assert!(validate_table(&t).is_ok());
    }

    #[test]
    fn test_zero_width_symbol() {
        let t = table(vec![PinRecord::new(
            1,
            Side::Left,
            "a",
            Symbol::new("\u{200b}", ColorSpec::default()),
        )]);
        assert!(matches!(
            validate_table(&t),
            Err(ValidationError::BadPinSymbol { pin: 1, .. })
        ));
    }

    #[test]
    fn test_bad_legend_symbol() {
        let mut t = table(vec![PinRecord::new(1, Side::Left, "a", dot())]);
        t.legend
            .push(LegendEntry::new(Symbol::new("", ColorSpec::default()), "GPIO", ""));
        assert!(matches!(
            validate_table(&t),
            Err(ValidationError::BadLegendSymbol { name, .. }) if name == "GPIO"
        ));
    }
}
