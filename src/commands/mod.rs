//! CLI command implementations.
//!
//! Each command writes to the supplied output stream and uses the layout
//! module for loading tables.

mod check;
mod dump;
mod legend;
pub mod shared;
mod show;

pub use check::check;
pub use dump::dump;
pub use legend::legend;
pub use show::show;
