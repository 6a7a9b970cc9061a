//! Navigation state machine (pure).
//!
//! All state transitions are testable without a terminal.

pub mod navigator;

pub use navigator::{
    Navigator, PagerSettings, Transition, DEFAULT_BUFFER_SIZE, DEFAULT_PAGE_SIZE,
};
