pub mod color;
pub mod commands;
pub mod error_fmt;
pub mod layout;
pub mod render;

// Re-export commonly used types for convenience
pub use color::{Bg, ColorSpec, Fg, Symbol};
pub use layout::{
    LayoutError, LayoutTable, LegendEntry, PinRecord, Pull, Row, Side, ValidationError, Widths,
};
pub use render::RenderOptions;
