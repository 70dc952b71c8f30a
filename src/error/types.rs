use thiserror::Error;

use crate::logging::LoggingError;

/// Unified result type for the widget cursor crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced by configuration and tracing. Placement itself never fails here;
/// toolkit errors travel through `Cursor::try_place` in their own type.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("spacing `{field}` must not be negative (got {value})")]
    InvalidSpacing { field: &'static str, value: i32 },
    #[error("configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Cursor(#[from] CursorError),
}

/// Misuse of a cursor's derived-flow helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("cursor at ({x}, {y}) has no flow axis to advance along")]
    NoFlowAxis { x: i32, y: i32 },
}
