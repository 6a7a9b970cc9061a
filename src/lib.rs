//! csvpeek
//!
//! TUI pager for browsing arbitrarily large delimited-text files without
//! loading them into memory.
//!
//! The pure core (`window`, `view_state`, `state`) builds bounded windows of
//! rows by re-scanning a forward-only [`source::RecordSource`] and lays them
//! out as a text grid. The impure shell (`view`, `logging`, the binary) owns
//! the terminal, the log file and the command line.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
pub mod window;
