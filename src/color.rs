//! ANSI/VT100 color codes and colored symbols.
//!
//! Pin symbols are wrapped as `ESC[<bg>;<fg>m<text>ESC[0m`. The code pair is
//! always emitted background first, and `0` stands in for "no color" on
//! either side.

use serde::{Deserialize, Serialize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const RESET: &str = "\x1b[0m";

/// Foreground (text) colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Fg {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    #[default]
    NoColor,
}

/// Background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Bg {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    #[default]
    NoColor,
}

/// Named palette shared by [`Fg`] and [`Bg`]; the two only differ in code offset.
const PALETTE: [(&str, u8); 16] = [
    ("black", 0),
    ("red", 1),
    ("green", 2),
    ("yellow", 3),
    ("blue", 4),
    ("magenta", 5),
    ("cyan", 6),
    ("white", 7),
    ("gray", 60),
    ("bright_red", 61),
    ("bright_green", 62),
    ("bright_yellow", 63),
    ("bright_blue", 64),
    ("bright_magenta", 65),
    ("bright_cyan", 66),
    ("bright_white", 67),
];

/// Normalize user-facing color names: `b_red`, `bright-red` and `BrightRed`
/// all resolve to `bright_red`, `grey` to `gray`.
fn canonical_name(name: &str) -> String {
    let lower = name.trim().to_lowercase().replace('-', "_");
    let lower = match lower.strip_prefix("b_") {
        Some(rest) => format!("bright_{}", rest),
        None => lower,
    };
    let lower = match lower.strip_prefix("bright") {
        Some(rest) if !rest.starts_with('_') && !rest.is_empty() => format!("bright_{}", rest),
        _ => lower,
    };
    if lower == "grey" {
        "gray".to_string()
    } else {
        lower
    }
}

/// Index into [`PALETTE`] for a color name, `None` for "no color" or unknown names.
fn palette_index(name: &str) -> Option<usize> {
    let name = canonical_name(name);
    PALETTE.iter().position(|(n, _)| *n == name)
}

fn is_no_color(name: &str) -> bool {
    matches!(
        canonical_name(name).as_str(),
        "" | "none" | "no_color" | "default"
    )
}

macro_rules! palette_enum {
    ($ty:ident, $base:expr) => {
        impl $ty {
            const ALL: [$ty; 16] = [
                $ty::Black,
                $ty::Red,
                $ty::Green,
                $ty::Yellow,
                $ty::Blue,
                $ty::Magenta,
                $ty::Cyan,
                $ty::White,
                $ty::Gray,
                $ty::BrightRed,
                $ty::BrightGreen,
                $ty::BrightYellow,
                $ty::BrightBlue,
                $ty::BrightMagenta,
                $ty::BrightCyan,
                $ty::BrightWhite,
            ];

            /// Terminal escape code; `0` when no color is set.
            pub fn code(self) -> u8 {
                match Self::ALL.iter().position(|c| *c == self) {
                    Some(i) => $base + PALETTE[i].1,
                    None => 0,
                }
            }

            /// Canonical lowercase name, as written in layout files.
            pub fn name(self) -> &'static str {
                match Self::ALL.iter().position(|c| *c == self) {
                    Some(i) => PALETTE[i].0,
                    None => "none",
                }
            }

            /// Look up a color by name. Returns `None` for unknown names.
            pub fn from_name(name: &str) -> Option<Self> {
                if is_no_color(name) {
                    return Some($ty::NoColor);
                }
                palette_index(name).map(|i| Self::ALL[i])
            }
        }

        impl From<String> for $ty {
            fn from(name: String) -> Self {
                Self::from_name(&name).unwrap_or_else(|| {
                    tracing::warn!(color = %name, "unknown color name, using no color");
                    $ty::NoColor
                })
            }
        }

        impl From<$ty> for String {
            fn from(color: $ty) -> Self {
                color.name().to_string()
            }
        }
    };
}

palette_enum!(Fg, 30);
palette_enum!(Bg, 40);

/// A foreground/background pair.
///
/// `escape` overrides the ANSI wrapping with a template in which `{bg}`,
/// `{fg}` and `{text}` are substituted. The template should only add
/// zero-width control sequences, since padding is measured on the text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorSpec {
    pub fg: Fg,
    pub bg: Bg,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escape: Option<String>,
}

impl ColorSpec {
    pub const fn new(fg: Fg, bg: Bg) -> Self {
        Self {
            fg,
            bg,
            escape: None,
        }
    }

    pub const fn fg(fg: Fg) -> Self {
        Self::new(fg, Bg::NoColor)
    }

    pub fn with_escape(mut self, template: impl Into<String>) -> Self {
        self.escape = Some(template.into());
        self
    }

    /// Wrap `text` in this color's escape sequence, resetting afterwards.
    pub fn paint(&self, text: &str) -> String {
        match &self.escape {
            Some(template) => template
                .replace("{bg}", &self.bg.code().to_string())
                .replace("{fg}", &self.fg.code().to_string())
                .replace("{text}", text),
            None => format!("\x1b[{};{}m{}{}", self.bg.code(), self.fg.code(), text, RESET),
        }
    }
}

/// A single display character with its color.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Symbol {
    pub glyph: String,
    #[serde(default)]
    pub color: ColorSpec,
}

impl Symbol {
    pub fn new(glyph: impl Into<String>, color: ColorSpec) -> Self {
        Self {
            glyph: glyph.into(),
            color,
        }
    }

    /// Display width of the glyph in terminal columns.
    pub fn width(&self) -> usize {
        self.glyph.width()
    }

    /// True when the glyph is one character that takes up screen space.
    pub fn is_single_glyph(&self) -> bool {
        let mut chars = self.glyph.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.width().unwrap_or(0) > 0,
            _ => false,
        }
    }

    /// The glyph wrapped in its color escape sequence.
    pub fn painted(&self) -> String {
        self.color.paint(&self.glyph)
    }
}
