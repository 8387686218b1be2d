use std::fmt;
use std::io;

use owo_colors::OwoColorize;

use crate::layout::{LayoutError, ValidationError};

/// Application error with context for actionable error messages.
#[derive(Debug)]
pub enum AppError {
    /// Layout file could not be loaded, with the file path for context
    Layout { path: String, source: LayoutError },
    /// Built-in table could not be serialized
    Dump(LayoutError),
    /// IO error with context
    Io { context: String, source: io::Error },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Layout { path, source } => {
                write!(f, "{}", format_layout_error(source, path))
            }
            AppError::Dump(source) => {
                write!(f, "{}", format_cli_error(&format!("failed to dump layout: {}", source)))
            }
            AppError::Io { context, source } => {
                write!(f, "{}", format_cli_error(&format!("{}: {}", context, source)))
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Extension trait to add file path context to layout results.
pub trait LayoutResultExt<T> {
    fn with_path(self, path: &str) -> Result<T, AppError>;
}

impl<T> LayoutResultExt<T> for Result<T, LayoutError> {
    fn with_path(self, path: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Layout {
            path: path.to_string(),
            source: e,
        })
    }
}

/// Extension trait to add context to IO results.
pub trait IoResultExt<T> {
    fn with_context(self, context: &str) -> Result<T, AppError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn with_context(self, context: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Io {
            context: context.to_string(),
            source: e,
        })
    }
}

// ============================================================================
// Formatting functions (internal implementation)
// ============================================================================

fn format_cli_error(message: &str) -> String {
    format!("{}: {}\n", "error".red().bold(), message)
}

fn format_layout_error(error: &LayoutError, path: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));

    match error {
        LayoutError::Io(io_err) => {
            out.push_str(&format!("cannot read layout file {}\n", path.cyan()));
            out.push('\n');
            out.push_str(&format!("  {}\n", io_err.to_string().dimmed()));
            out.push('\n');
            out.push_str(&format!("  {}:\n", "To fix this".bold()));
            out.push_str("    1. Check the path and file permissions\n");
            out.push_str(&format!(
                "    2. Generate a starting layout: {}\n",
                format!("pinmap dump > {}", path).cyan()
            ));
        }
        LayoutError::Parse(yaml_err) => {
            out.push_str(&format!("invalid YAML in {}\n", path.cyan()));
            out.push('\n');
            out.push_str(&format!("  {}\n", yaml_err.to_string().dimmed()));
            out.push('\n');
            out.push_str(&format!("  {}:\n", "To fix this".bold()));
            out.push_str(&format!(
                "    Compare with the built-in layout: {}\n",
                "pinmap dump".cyan()
            ));
        }
        LayoutError::Invalid(validation) => {
            out.push_str(&format!("invalid layout in {}\n", path.cyan()));
            out.push('\n');
            out.push_str(&format!("  {}\n", validation.to_string().dimmed()));
            out.push('\n');
            out.push_str(&format!("  {}:\n", "To fix this".bold()));
            out.push_str(&format!("    {}\n", validation_hint(validation)));
        }
    }

    out
}

fn validation_hint(error: &ValidationError) -> String {
    match error {
        ValidationError::NoPins => "Add at least one entry under `pins:`".to_string(),
        ValidationError::ZeroPin { name } => {
            format!("Give pin '{}' a number starting from 1", name.yellow())
        }
        ValidationError::DuplicatePin(pin) => {
            format!("Remove or renumber the second entry for pin {}", pin.yellow())
        }
        ValidationError::SideMismatch {
            pin, expected_side, ..
        } => format!(
            "Set `side: {}` on pin {}",
            expected_side.to_string().cyan(),
            pin.yellow()
        ),
        ValidationError::BadPinSymbol { pin, .. } => {
            format!("Use a single character for the `glyph` of pin {}", pin.yellow())
        }
        ValidationError::BadLegendSymbol { name, .. } => format!(
            "Use a single character for the `glyph` of legend entry '{}'",
            name.yellow()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Side;

    fn strip_ansi(s: &str) -> String {
        let re = regex::Regex::new(r"\x1b\[[0-9;]*m").unwrap();
        re.replace_all(s, "").to_string()
    }

    #[test]
    fn test_format_missing_file() {
        let err = AppError::Layout {
            path: "board.yml".to_string(),
            source: LayoutError::Io(io::Error::new(io::ErrorKind::NotFound, "not found")),
        };
        let stripped = strip_ansi(&err.to_string());

        assert!(stripped.starts_with("error: "));
        assert!(stripped.contains("cannot read layout file board.yml"));
        assert!(stripped.contains("To fix this"));
        assert!(stripped.contains("pinmap dump > board.yml"));
    }

    #[test]
    fn test_format_invalid_yaml() {
        let yaml_err = serde_yaml::from_str::<crate::LayoutTable>("pins: [").unwrap_err();
        let err = AppError::Layout {
            path: "board.yml".to_string(),
            source: LayoutError::Parse(yaml_err),
        };
        let stripped = strip_ansi(&err.to_string());

        assert!(stripped.contains("invalid YAML in board.yml"));
        assert!(stripped.contains("pinmap dump"));
    }

    #[test]
    fn test_format_side_mismatch() {
        let err = AppError::Layout {
            path: "board.yml".to_string(),
            source: LayoutError::Invalid(ValidationError::SideMismatch {
                pin: 7,
                side: Side::Right,
                expected: "odd",
                expected_side: Side::Left,
            }),
        };
        let stripped = strip_ansi(&err.to_string());

        assert!(stripped.contains("invalid layout in board.yml"));
        assert!(stripped.contains("pin 7 is on the right side"));
        assert!(stripped.contains("Set `side: left` on pin 7"));
    }

    #[test]
    fn test_format_duplicate_pin() {
        let err = AppError::Layout {
            path: "x.yml".to_string(),
            source: LayoutError::Invalid(ValidationError::DuplicatePin(12)),
        };
        let stripped = strip_ansi(&err.to_string());
        assert!(stripped.contains("duplicate pin number 12"));
        assert!(stripped.contains("second entry for pin 12"));
    }

    #[test]
    fn test_io_with_context() {
        let result: Result<(), io::Error> = Err(io::Error::other("broken pipe"));
        let err = result.with_context("failed to write output").unwrap_err();
        assert_eq!(strip_ansi(&err.to_string()), "error: failed to write output: broken pipe\n");
    }
}
