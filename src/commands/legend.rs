//! Legend command - prints only the symbol legend.

use std::io::Write;
use std::path::Path;

use super::shared::load_table;
use crate::error_fmt::{AppError, IoResultExt};
use crate::render;

pub fn legend(out: &mut dyn Write, layout: Option<&Path>, color: bool) -> Result<(), AppError> {
    let table = load_table(layout)?;
    let output = render::render_legend(&table.legend, true, color);
    out.write_all(output.as_bytes())
        .with_context("failed to write legend")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_legend() {
        let mut out = Vec::new();
        legend(&mut out, None, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 8);
        assert!(text.starts_with("● GPIO (general purpose I/O)\n"));
    }

    #[test]
    fn test_layout_without_legend_prints_placeholder() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bare.yml");
        std::fs::write(
            &path,
            "pins:\n  - { pin: 1, side: left, name: VCC, symbol: { glyph: \"#\" } }\n",
        )
        .unwrap();

        let mut out = Vec::new();
        legend(&mut out, Some(&path), true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No legend available\n");
    }
}
