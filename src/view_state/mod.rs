//! View-state layer - column layout and display text
//!
//! Pure computations between the window and the renderer.
//!
//! # Module Structure
//!
//! - `layout`: ColumnLayout - per-column widths and offsets over a window
//! - `text`: placeholder substitution and display-width measurement
//! - `viewport`: which rows land on which terminal lines

pub mod layout;
pub mod text;
pub mod viewport;

pub use layout::{compute_offsets, compute_widths, ColumnLayout};
pub use text::{display_text, display_width, CONTROL_PLACEHOLDER};
pub use viewport::RowViewport;
