//! Text rendering for pinout maps.
//!
//! A row is two mirrored halves around a gutter:
//!
//! ```text
//! (description) name pull pin S | S pin pull name (description)
//! ```
//!
//! The left half is right-justified and the right half left-justified, so
//! both columns hug the gutter. Padding is always computed on visible text,
//! so colored and plain output line up identically.

use owo_colors::OwoColorize;
use unicode_width::UnicodeWidthStr;

use crate::color::Symbol;
use crate::layout::{LayoutTable, LegendEntry, PinRecord, Row, Side, Widths};

pub const HEADER_SYMBOL: &str = "";
pub const HEADER_PIN: &str = "Pin";
pub const HEADER_PULL: &str = "Pull";
pub const HEADER_NAME: &str = "Name";
pub const HEADER_DESCRIPTION: &str = "Description";

/// Printed in place of the legend block when no legend data is available.
pub const NO_LEGEND: &str = "No legend available";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub widths: Widths,
    /// Emit ANSI escapes for symbols and styling.
    pub color: bool,
}

impl RenderOptions {
    /// Options with widths fitted to `table`.
    pub fn for_table(table: &LayoutTable, color: bool) -> Self {
        Self {
            widths: table.widths.fit(table),
            color,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            widths: Widths::default(),
            color: true,
        }
    }
}

/// Pad `text` to `width` columns. `visible` is the display width of
/// `text` before any escapes were added.
fn justify(text: &str, visible: usize, width: usize, side: Side) -> String {
    let fill = " ".repeat(width.saturating_sub(visible));
    match side {
        Side::Left => format!("{}{}", fill, text),
        Side::Right => format!("{}{}", text, fill),
    }
}

fn justify_plain(text: &str, width: usize, side: Side) -> String {
    justify(text, text.width(), width, side)
}

/// Wrap a non-empty description in parentheses.
pub fn format_description(description: &str) -> String {
    if description.is_empty() {
        String::new()
    } else {
        format!("({})", description)
    }
}

fn format_symbol(symbol: &Symbol, width: usize, side: Side, color: bool) -> String {
    if color {
        justify(&symbol.painted(), symbol.width(), width, side)
    } else {
        justify_plain(&symbol.glyph, width, side)
    }
}

/// Lay out already-padded fields in the order for `side`.
///
/// Fields arrive in right-side order (symbol first); the left side mirrors it.
fn join_fields(mut fields: [String; 5], side: Side) -> String {
    if side == Side::Left {
        fields.reverse();
    }
    fields.join(" ")
}

/// Render one record as the given half of a row.
pub fn render_half(record: &PinRecord, side: Side, opts: &RenderOptions) -> String {
    let w = &opts.widths;
    join_fields(
        [
            format_symbol(&record.symbol, w.symbol, side, opts.color),
            justify_plain(&record.pin.to_string(), w.pin, side),
            justify_plain(record.pull.label(), w.pull, side),
            justify_plain(&record.name, w.name, side),
            justify_plain(&format_description(&record.description), w.description, side),
        ],
        side,
    )
}

/// Render one record on its own side of the header.
pub fn render_record(record: &PinRecord, opts: &RenderOptions) -> String {
    render_half(record, record.side, opts)
}

fn blank_half(widths: &Widths) -> String {
    " ".repeat(widths.half())
}

fn header_half(side: Side, widths: &Widths) -> String {
    join_fields(
        [
            justify_plain(HEADER_SYMBOL, widths.symbol, side),
            justify_plain(HEADER_PIN, widths.pin, side),
            justify_plain(HEADER_PULL, widths.pull, side),
            justify_plain(HEADER_NAME, widths.name, side),
            justify_plain(HEADER_DESCRIPTION, widths.description, side),
        ],
        side,
    )
}

fn gutter(widths: &Widths) -> String {
    " ".repeat(widths.gutter)
}

/// Column labels for both halves, justified like the data rows.
pub fn render_header(opts: &RenderOptions) -> String {
    let w = &opts.widths;
    let line = format!(
        "{}{}{}",
        header_half(Side::Left, w),
        gutter(w),
        header_half(Side::Right, w)
    );
    if opts.color {
        line.bold().to_string()
    } else {
        line
    }
}

/// Join the two halves of a physical row.
pub fn render_row(row: &Row<'_>, opts: &RenderOptions) -> String {
    let w = &opts.widths;
    let left = row
        .left
        .map(|r| render_half(r, Side::Left, opts))
        .unwrap_or_else(|| blank_half(w));
    let right = row
        .right
        .map(|r| render_half(r, Side::Right, opts))
        .unwrap_or_else(|| blank_half(w));
    format!("{}{}{}", left, gutter(w), right)
}

/// Body of the map: one line per physical row, top to bottom.
pub fn render_map(table: &LayoutTable, opts: &RenderOptions) -> String {
    let mut output = String::new();
    for row in table.rows() {
        output.push_str(&render_row(&row, opts));
        output.push('\n');
    }
    output
}

pub fn render_legend_entry(entry: &LegendEntry, color: bool) -> String {
    let symbol = if color {
        entry.symbol.painted()
    } else {
        entry.symbol.glyph.clone()
    };
    let description = format_description(&entry.description);
    if description.is_empty() {
        format!("{} {}", symbol, entry.name)
    } else {
        format!("{} {} {}", symbol, entry.name, description)
    }
}

/// Legend block, one entry per line.
///
/// With no entries this is the [`NO_LEGEND`] placeholder, or nothing at all
/// when `show_missing` is false.
pub fn render_legend(legend: &[LegendEntry], show_missing: bool, color: bool) -> String {
    if legend.is_empty() {
        return if show_missing {
            format!("{}\n", NO_LEGEND)
        } else {
            String::new()
        };
    }

    let mut output = String::new();
    for entry in legend {
        output.push_str(&render_legend_entry(entry, color));
        output.push('\n');
    }
    output
}

/// Title, legend, header and map.
pub fn render_document(table: &LayoutTable, opts: &RenderOptions, show_legend: bool) -> String {
    let mut output = String::new();

    if !table.title.is_empty() {
        if opts.color {
            output.push_str(&table.title.bold().underline().to_string());
        } else {
            output.push_str(&table.title);
        }
        output.push_str("\n\n");
    }

    if show_legend {
        output.push_str(&render_legend(&table.legend, true, opts.color));
        output.push('\n');
    }

    output.push_str(&render_header(opts));
    output.push('\n');
    output.push_str(&render_map(table, opts));
    output
}
