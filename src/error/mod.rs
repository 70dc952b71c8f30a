//! Error types shared across the crate.

mod types;

pub use types::{CursorError, LayoutError, Result};
