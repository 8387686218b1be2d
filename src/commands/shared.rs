//! Shared utilities for commands.

use std::path::Path;

use tracing::debug;

use crate::LayoutTable;
use crate::error_fmt::{AppError, LayoutResultExt};
use crate::layout::board;

/// Load the table from `layout`, or fall back to the built-in board.
pub fn load_table(layout: Option<&Path>) -> Result<LayoutTable, AppError> {
    match layout {
        Some(path) => LayoutTable::load(path).with_path(&path.display().to_string()),
        None => {
            debug!("using built-in Raspberry Pi layout");
            Ok(board::raspberry_pi())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_when_no_path() {
        let table = load_table(None).unwrap();
        assert_eq!(table.pins.len(), 40);
    }

    #[test]
    fn test_missing_file_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.yml");
        let err = load_table(Some(&path)).unwrap_err();
        assert!(matches!(err, AppError::Layout { path: p, .. } if p.ends_with("nope.yml")));
    }
}
