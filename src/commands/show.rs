//! Show command - renders the full pinout document.

use std::io::Write;
use std::path::Path;

use super::shared::load_table;
use crate::error_fmt::{AppError, IoResultExt};
use crate::render::{self, RenderOptions};

/// Render title, legend, header and map for a layout.
pub fn show(
    out: &mut dyn Write,
    layout: Option<&Path>,
    color: bool,
    show_legend: bool,
) -> Result<(), AppError> {
    let table = load_table(layout)?;
    let opts = RenderOptions::for_table(&table, color);

    let output = render::render_document(&table, &opts, show_legend);
    out.write_all(output.as_bytes())
        .with_context("failed to write pinout")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_builtin_plain() {
        let mut out = Vec::new();
        show(&mut out, None, false, true).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Raspberry Pi GPIO header\n"));
        assert!(text.contains("(Power)"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_show_builtin_colored() {
        let mut out = Vec::new();
        show(&mut out, None, true, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("\x1b[0;32m●\x1b[0m"));
        assert!(!text.contains("general purpose"));
    }
}
