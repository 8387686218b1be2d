//! Check command - validates a layout file.

use std::io::Write;
use std::path::Path;

use crate::LayoutTable;
use crate::error_fmt::{AppError, IoResultExt, LayoutResultExt};

/// Load and validate a layout file, reporting a one-line summary.
pub fn check(out: &mut dyn Write, path: &Path) -> Result<(), AppError> {
    let table = LayoutTable::load(path).with_path(&path.display().to_string())?;

    writeln!(
        out,
        "ok: {} pins in {} rows, {} legend entries",
        table.pins.len(),
        table.rows().len(),
        table.legend.len()
    )
    .with_context("failed to write check result")?;

    Ok(())
}
