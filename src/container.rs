//! Anchors derived from a container's total size.
//!
//! Window and group contents are laid out in coordinates relative to the
//! container, so every anchor here is computed from its size alone.

use std::num::NonZeroU16;

use crate::config::Spacing;
use crate::cursor::Cursor;
use crate::geometry::{Position, Size};
use crate::layout::{row_offset, uniform_width};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Container {
    size: Size,
    spacing: Spacing,
}

impl Container {
    pub fn new(size: impl Into<Size>) -> Self {
        Self {
            size: size.into(),
            spacing: Spacing::default(),
        }
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    fn cursor(&self, x: i32, y: i32) -> Cursor {
        Cursor::at(Position::new(x, y)).with_spacing(self.spacing)
    }

    /// Inset origin for the first widget, one margin in from both edges.
    pub fn top_left(&self) -> Cursor {
        self.cursor(self.spacing.margin, self.spacing.margin)
    }

    /// Left-aligned origin for a row of widgets `height` tall sitting on the bottom margin.
    pub fn bottom(&self, height: i32) -> Cursor {
        let margin = self.spacing.margin;
        self.cursor(margin, self.size.height.saturating_sub(height).saturating_sub(margin))
    }

    /// Origin for `count` widgets of `widget` size centred along the bottom edge.
    ///
    /// Rows wider than the container yield a negative x; nothing is clamped.
    pub fn bottom_centre(&self, widget: impl Into<Size>, count: NonZeroU16) -> Cursor {
        let widget = widget.into();
        let x = row_offset(self.size.width, count, self.spacing.pad, widget.width);
        let y = self
            .size
            .height
            .saturating_sub(widget.height)
            .saturating_sub(self.spacing.margin);
        self.cursor(x, y)
    }

    /// Origin for `count` widgets of `widget` size centred horizontally at height `y`.
    ///
    /// The row's y is passed in rather than inherited. Helpers that reused the
    /// receiver's own y would put the row at the container height, below the
    /// visible area, so ported calls need an explicit value here.
    pub fn centre(&self, widget: impl Into<Size>, count: NonZeroU16, y: i32) -> Cursor {
        let widget = widget.into();
        let x = row_offset(self.size.width, count, self.spacing.pad, widget.width);
        self.cursor(x, y)
    }

    /// Width each of `count` equal widgets gets when spread across the container.
    pub fn fill_width(&self, count: NonZeroU16) -> i32 {
        uniform_width(self.size.width, count, self.spacing.pad)
    }
}

impl Size {
    /// Treat this size as a container laid out with `spacing`.
    pub fn container(self, spacing: Spacing) -> Container {
        Container::new(self).with_spacing(spacing)
    }
}

impl From<Size> for Container {
    fn from(size: Size) -> Self {
        Self::new(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn n(value: u16) -> NonZeroU16 {
        NonZeroU16::new(value).unwrap()
    }

    #[test]
    fn bottom_centre_single_button() {
        let window = Container::new((300, 140)).with_spacing(Spacing::new(5, 10));
        let origin = window.bottom_centre((80, 20), n(1));
        assert_eq!(origin.position(), Position::new(110, 110));
    }

    #[test]
    fn bottom_centre_default_margin() {
        let origin = Container::new((300, 140)).bottom_centre((80, 20), n(1));
        assert_eq!(origin.position(), Position::new(110, 115));
    }

    #[test]
    fn bottom_centre_three_buttons_spans_row() {
        let spacing = Spacing::new(5, 10);
        let window = Size::new(300, 140).container(spacing);
        let origin = window.bottom_centre((80, 20), n(3));

        let span = 3 * 80 + 2 * spacing.pad;
        assert_eq!(origin.x(), (300 - span) / 2);

        let make = |rect: Rect, _: &str| rect;
        let (first, right, _) = origin.place(make, (80, 20), "Ok");
        let (_, right, _) = right.place(make, (80, 20), "Apply");
        let (last, _, _) = right.place(make, (80, 20), "Cancel");
        assert_eq!(first.x, 300 - last.right());
    }

    #[test]
    fn overflowing_row_is_not_clamped() {
        let origin = Container::new((100, 50)).bottom_centre((80, 20), n(2));
        assert!(origin.x() < 0);
    }

    #[test]
    fn huge_row_offset_is_negative_not_panicking() {
        let origin = Container::new((300, 140)).bottom_centre((40_000, 20), n(60_000));
        assert_eq!(origin.x(), -1_200_149_847);
        assert_eq!(origin.y(), 115);
    }

    #[test]
    fn top_left_and_bottom_use_margin() {
        let window = Container::new((400, 300)).with_spacing(Spacing::new(5, 8));
        assert_eq!(window.top_left().position(), Position::new(8, 8));
        assert_eq!(window.bottom(20).position(), Position::new(8, 272));
        assert_eq!(window.top_left().spacing(), window.spacing());
    }

    #[test]
    fn centre_keeps_requested_height() {
        let origin = Container::new((300, 140)).centre((80, 20), n(1), 60);
        assert_eq!(origin.position(), Position::new(110, 60));
    }

    #[test]
    fn fill_width_splits_evenly() {
        let window = Container::new((300, 140));
        assert_eq!(window.fill_width(n(3)), 94);
    }
}
