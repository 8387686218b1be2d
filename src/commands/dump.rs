//! Dump command - prints the built-in layout as an editable YAML file.

use std::io::Write;

use crate::error_fmt::{AppError, IoResultExt};
use crate::layout::board;

pub fn dump(out: &mut dyn Write) -> Result<(), AppError> {
    let yaml = board::raspberry_pi().to_yaml().map_err(AppError::Dump)?;
    out.write_all(yaml.as_bytes())
        .with_context("failed to write layout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutTable;

    #[test]
    fn test_dump_reloads_to_builtin() {
        let mut out = Vec::new();
        dump(&mut out).unwrap();
        let yaml = String::from_utf8(out).unwrap();

        assert!(yaml.contains("title: Raspberry Pi GPIO header"));
        let table = LayoutTable::from_yaml(&yaml).unwrap();
        assert_eq!(table, board::raspberry_pi());
    }
}
