//! Row arithmetic for laying out runs of equally sized widgets.
//!
//! Cursors call into these helpers when centring a row inside a container or
//! splitting a container's width evenly. The implementation details live in the
//! private `core` module.

mod core;

pub use self::core::{row_offset, row_span, uniform_width};
