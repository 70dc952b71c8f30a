//! Relative widget placement for retained-mode GUI toolkits.
//!
//! Widgets are placed through a [`Cursor`]: each placement calls a toolkit
//! factory with an absolute rectangle and hands back cursors to the right of and
//! below the new widget. The toolkit owns the widgets and its current-group
//! context; this crate only does the coordinate arithmetic.

pub mod config;
pub mod container;
pub mod cursor;
pub mod error;
pub mod events;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod width;

pub use config::Spacing;
pub use container::Container;
pub use cursor::{Cursor, Flow, Placement};
pub use error::{CursorError, LayoutError, Result};
pub use events::{EventKind, lookup_event};
pub use geometry::{Position, Rect, Size};
pub use layout::{row_offset, row_span, uniform_width};
pub use logging::{LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult};
pub use width::{display_width, label_width};
