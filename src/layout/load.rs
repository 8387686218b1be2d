//! Reading and writing YAML layout files.

use std::path::Path;

use tracing::debug;

use super::{LayoutTable, ValidationError, validate_table};

/// Errors that can occur when loading a layout file.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("failed to read layout file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse layout file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid layout: {0}")]
    Invalid(#[from] ValidationError),
}

impl LayoutTable {
    /// Load and validate a layout from a file path.
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        debug!(path = %path.display(), "loading layout file");
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a layout from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, LayoutError> {
        let table: LayoutTable = serde_yaml::from_str(content)?;
        validate_table(&table)?;
        debug!(
            pins = table.pins.len(),
            legend = table.legend.len(),
            "layout parsed"
        );
        Ok(table)
    }

    /// Serialize this table in layout-file form.
    pub fn to_yaml(&self) -> Result<String, LayoutError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
