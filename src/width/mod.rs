//! Label width helpers.
//!
//! Estimates how much horizontal room a widget label needs so a field can be
//! offset to the right of its label without hand-tuned constants.

mod utils;

pub use utils::{display_width, label_width};
