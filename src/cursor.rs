//! Relative placement cursors.
//!
//! A [`Cursor`] is the origin for the next widget. Placing a widget through a
//! cursor hands the absolute rectangle to a toolkit factory and returns two new
//! cursors, one to the right of the widget and one below it, so a form can be laid
//! out by chaining placements instead of computing coordinates by hand:
//!
//! ```
//! use widget_cursor::{Cursor, Rect, Size};
//!
//! let button = Size::new(80, 20);
//! let make = |rect: Rect, label: &str| (rect, label.to_string());
//!
//! let (_, right, below) = Cursor::new(10, 10).place(make, button, "One");
//! let (two, _, _) = right.place(make, button, "Two");
//! let (three, _, _) = below.place(make, button, "Three");
//!
//! assert_eq!(two.0.x, 95);
//! assert_eq!(three.0.y, 35);
//! ```

use std::ops::{Add, Sub};

use serde_json::json;

use crate::config::Spacing;
use crate::error::CursorError;
use crate::geometry::{Position, Rect, Size};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv, json_str};
use crate::width::label_width;

/// Log target used for placement traces.
pub const PLACE_TARGET: &str = "widget_cursor::place";

/// Axis a derived cursor advances along when nudged by a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flow {
    /// Constructed directly; no preferred axis.
    #[default]
    Free,
    /// Produced to the right of a placed widget; advances along x.
    Right,
    /// Produced below a placed widget; advances along y.
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    origin: Position,
    spacing: Spacing,
    flow: Flow,
}

/// Geometry of a placement without the widget itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub rect: Rect,
    pub right: Cursor,
    pub down: Cursor,
}

impl Cursor {
    pub fn new(x: i32, y: i32) -> Self {
        Self::at(Position::new(x, y))
    }

    pub fn at(origin: Position) -> Self {
        Self {
            origin,
            spacing: Spacing::default(),
            flow: Flow::Free,
        }
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_flow(mut self, flow: Flow) -> Self {
        self.flow = flow;
        self
    }

    pub fn position(&self) -> Position {
        self.origin
    }

    pub fn x(&self) -> i32 {
        self.origin.x
    }

    pub fn y(&self) -> i32 {
        self.origin.y
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    pub fn flow(&self) -> Flow {
        self.flow
    }

    /// Move along the flow axis by `delta` pixels.
    pub fn advance(self, delta: i32) -> Result<Self, CursorError> {
        let offset = match self.flow {
            Flow::Right => Size::new(delta, 0),
            Flow::Down => Size::new(0, delta),
            Flow::Free => {
                return Err(CursorError::NoFlowAxis {
                    x: self.origin.x,
                    y: self.origin.y,
                });
            }
        };
        Ok(self + offset)
    }

    /// Shift right far enough to leave room for a label drawn left of the widget.
    pub fn label_gutter(self, label: &str, char_px: i32) -> Self {
        self + Size::new(label_width(label, char_px).saturating_add(self.spacing.pad), 0)
    }

    /// Rectangle and follow-up cursors for a widget of `size` placed here.
    pub fn placement(&self, size: Size) -> Placement {
        let pad = self.spacing.pad;
        let right = Self {
            origin: self.origin + Size::new(size.width.saturating_add(pad), 0),
            spacing: self.spacing,
            flow: Flow::Right,
        };
        let down = Self {
            origin: self.origin + Size::new(0, size.height.saturating_add(pad)),
            spacing: self.spacing,
            flow: Flow::Down,
        };
        Placement {
            rect: Rect::at(self.origin, size),
            right,
            down,
        }
    }

    /// Create a widget through `factory` at this cursor.
    ///
    /// The factory is called exactly once with the absolute rectangle and the
    /// label; its return value is passed back untouched together with the
    /// "right of" and "below" cursors.
    pub fn place<W, F>(
        &self,
        factory: F,
        size: impl Into<Size>,
        label: &str,
    ) -> (W, Cursor, Cursor)
    where
        F: FnOnce(Rect, &str) -> W,
    {
        let placement = self.placement(size.into());
        let widget = factory(placement.rect, label);
        (widget, placement.right, placement.down)
    }

    /// Like [`Cursor::place`] for factories that can fail. Errors come back unchanged.
    pub fn try_place<W, E, F>(
        &self,
        factory: F,
        size: impl Into<Size>,
        label: &str,
    ) -> Result<(W, Cursor, Cursor), E>
    where
        F: FnOnce(Rect, &str) -> Result<W, E>,
    {
        let placement = self.placement(size.into());
        let widget = factory(placement.rect, label)?;
        Ok((widget, placement.right, placement.down))
    }

    /// [`Cursor::place`] plus a debug trace of the placed rectangle.
    pub fn place_with<W, F>(
        &self,
        logger: &Logger,
        factory: F,
        size: impl Into<Size>,
        label: &str,
    ) -> (W, Cursor, Cursor)
    where
        F: FnOnce(Rect, &str) -> W,
    {
        let placement = self.placement(size.into());
        let widget = factory(placement.rect, label);

        if logger.enabled(LogLevel::Debug) {
            let rect = placement.rect;
            let event = event_with_fields(
                LogLevel::Debug,
                PLACE_TARGET,
                "widget_placed",
                [
                    json_str("label", label),
                    json_kv("x", json!(rect.x)),
                    json_kv("y", json!(rect.y)),
                    json_kv("width", json!(rect.width)),
                    json_kv("height", json!(rect.height)),
                ],
            );
            let _ = logger.log_event(event);
        }

        (widget, placement.right, placement.down)
    }
}

impl From<(i32, i32)> for Cursor {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for Cursor {
    fn from(origin: Position) -> Self {
        Self::at(origin)
    }
}

impl Add<Size> for Cursor {
    type Output = Self;
    fn add(self, rhs: Size) -> Self {
        Self {
            origin: self.origin + rhs,
            ..self
        }
    }
}

impl Sub<Size> for Cursor {
    type Output = Self;
    fn sub(self, rhs: Size) -> Self {
        Self {
            origin: self.origin - rhs,
            ..self
        }
    }
}

impl Add<(i32, i32)> for Cursor {
    type Output = Self;
    fn add(self, rhs: (i32, i32)) -> Self {
        self + Size::from(rhs)
    }
}

impl Sub<(i32, i32)> for Cursor {
    type Output = Self;
    fn sub(self, rhs: (i32, i32)) -> Self {
        self - Size::from(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemorySink;
    use std::cell::Cell;

    #[derive(Debug, PartialEq, Eq)]
    struct Widget {
        rect: Rect,
        label: String,
    }

    fn widget(rect: Rect, label: &str) -> Widget {
        Widget {
            rect,
            label: label.to_string(),
        }
    }

    #[test]
    fn placement_derives_right_and_down() {
        let origin = Cursor::new(80, 20);
        let (field, right, down) = origin.place(widget, (180, 20), "Datetime:");

        assert_eq!(field.rect, Rect::new(80, 20, 180, 20));
        assert_eq!(field.label, "Datetime:");
        assert_eq!(right.position(), Position::new(80 + 180 + 5, 20));
        assert_eq!(down.position(), Position::new(80, 20 + 20 + 5));
        assert_eq!(right.flow(), Flow::Right);
        assert_eq!(down.flow(), Flow::Down);
    }

    #[test]
    fn derived_cursors_inherit_spacing() {
        let spacing = Spacing::new(12, 3);
        let origin = Cursor::new(0, 0).with_spacing(spacing);
        let (_, right, down) = origin.place(widget, (50, 10), "x");
        assert_eq!(right.position(), Position::new(62, 0));
        assert_eq!(down.position(), Position::new(0, 22));
        assert_eq!(right.spacing(), spacing);
        assert_eq!(down.spacing(), spacing);
    }

    #[test]
    fn factory_called_once_and_handle_returned() {
        let calls = Cell::new(0);
        let (handle, _, _) = Cursor::new(1, 2).place(
            |rect: Rect, _: &str| {
                calls.set(calls.get() + 1);
                rect.x * 1000 + rect.y
            },
            (3, 4),
            "",
        );
        assert_eq!(calls.get(), 1);
        assert_eq!(handle, 1002);
    }

    #[test]
    fn try_place_passes_factory_errors_through() {
        let result: Result<(Widget, Cursor, Cursor), String> = Cursor::new(0, 0).try_place(
            |_: Rect, label: &str| Err(format!("cannot build {label}")),
            (10, 10),
            "Broken",
        );
        assert_eq!(result.unwrap_err(), "cannot build Broken");

        let ok: Result<_, String> = Cursor::new(0, 0).try_place(
            |rect: Rect, label: &str| Ok(widget(rect, label)),
            (10, 10),
            "Fine",
        );
        let (built, right, _) = ok.unwrap();
        assert_eq!(built.label, "Fine");
        assert_eq!(right.x(), 15);
    }

    #[test]
    fn chaining_builds_a_grid() {
        let size = Size::new(80, 20);
        let (_, right, below) = Cursor::new(10, 10).place(widget, size, "a");
        let (b, _, _) = right.place(widget, size, "b");
        let (c, right_of_c, _) = below.place(widget, size, "c");
        let (d, _, _) = right_of_c.place(widget, size, "d");

        assert_eq!(b.rect.origin(), Position::new(95, 10));
        assert_eq!(c.rect.origin(), Position::new(10, 35));
        assert_eq!(d.rect.origin(), Position::new(95, 35));
    }

    #[test]
    fn placement_near_max_saturates() {
        let (rect, right, down) =
            Cursor::new(i32::MAX - 10, 0).place(|rect: Rect, _: &str| rect, (20, 20), "x");
        assert_eq!(rect, Rect::new(i32::MAX - 10, 0, 20, 20));
        assert_eq!(right.position(), Position::new(i32::MAX, 0));
        assert_eq!(down.position(), Position::new(i32::MAX - 10, 25));

        let (_, _, down) = Cursor::new(0, i32::MAX).place(
            |rect: Rect, _: &str| rect,
            (i32::MAX, i32::MAX),
            "y",
        );
        assert_eq!(down.y(), i32::MAX);
    }

    #[test]
    fn cursor_at_origin_places_at_zero() {
        let (built, _, _) = Cursor::at(Position::ORIGIN).place(widget, Size::ZERO, "empty");
        assert_eq!(built.rect, Rect::default());
    }

    #[test]
    fn advance_follows_flow_axis() {
        let (_, right, down) = Cursor::new(10, 10).place(widget, (20, 20), "");
        assert_eq!(down.advance(40).unwrap().position(), Position::new(10, 75));
        assert_eq!(right.advance(-5).unwrap().position(), Position::new(30, 10));
        assert_eq!(
            Cursor::new(3, 4).advance(1),
            Err(CursorError::NoFlowAxis { x: 3, y: 4 })
        );
    }

    #[test]
    fn offsets_keep_flow_and_spacing() {
        let cursor = Cursor::new(5, 5)
            .with_flow(Flow::Down)
            .with_spacing(Spacing::uniform(2));
        let moved = cursor + (80, 20);
        assert_eq!(moved.position(), Position::new(85, 25));
        assert_eq!(moved.flow(), Flow::Down);
        assert_eq!(moved.spacing(), Spacing::uniform(2));
        assert_eq!((moved - (80, 20)).position(), cursor.position());
    }

    #[test]
    fn label_gutter_leaves_room_for_label() {
        let cursor = Cursor::new(5, 5).label_gutter("Input:", 8);
        assert_eq!(cursor.position(), Position::new(5 + 48 + 5, 5));
    }

    #[test]
    fn place_with_emits_single_trace() {
        let sink = MemorySink::new();
        let logger = Logger::new(sink.clone());
        let (_, _, _) = Cursor::new(110, 110).place_with(&logger, widget, (80, 20), "Quit");

        let events = sink.events();
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.target, PLACE_TARGET);
        assert_eq!(event.fields["label"], "Quit");
        assert_eq!(event.fields["x"], 110);
        assert_eq!(event.fields["y"], 110);
        assert_eq!(event.fields["width"], 80);
        assert_eq!(event.fields["height"], 20);
    }

    #[test]
    fn place_with_respects_logger_level() {
        let sink = MemorySink::new();
        let logger = Logger::new(sink.clone()).with_min_level(LogLevel::Info);
        let (built, _, _) = Cursor::new(0, 0).place_with(&logger, widget, (1, 1), "quiet");
        assert_eq!(built.label, "quiet");
        assert!(sink.is_empty());
    }
}
