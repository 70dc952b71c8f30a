//! Spacing configuration used when deriving cursors.
//!
//! `pad` separates neighbouring widgets and is the step applied when a placement
//! produces its "right of" and "below" cursors. `margin` keeps widgets away from a
//! container edge. Both can be loaded from JSON so a whole form can be restyled
//! without touching the layout code.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Default gap between widgets, in pixels.
pub const DEFAULT_PAD: i32 = 5;
/// Default gap between a widget and its container edge, in pixels.
pub const DEFAULT_MARGIN: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    /// Gap between adjacent widgets.
    pub pad: i32,
    /// Gap between a widget and the container edge.
    pub margin: i32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            pad: DEFAULT_PAD,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl Spacing {
    pub const fn new(pad: i32, margin: i32) -> Self {
        Self { pad, margin }
    }

    /// Same value for pad and margin.
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value)
    }

    pub fn with_pad(mut self, pad: i32) -> Self {
        self.pad = pad;
        self
    }

    pub fn with_margin(mut self, margin: i32) -> Self {
        self.margin = margin;
        self
    }

    /// Parse spacing from JSON. Missing fields fall back to the defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let spacing: Spacing = serde_json::from_str(raw)?;
        spacing.validate()
    }

    /// Reject negative gaps.
    pub fn validate(self) -> Result<Self> {
        if self.pad < 0 {
            return Err(LayoutError::InvalidSpacing {
                field: "pad",
                value: self.pad,
            });
        }
        if self.margin < 0 {
            return Err(LayoutError::InvalidSpacing {
                field: "margin",
                value: self.margin,
            });
        }
        Ok(self)
    }
}
