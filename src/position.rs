// SPDX-License-Identifier: MPL-2.0
//! Anchor position resolution.
//!
//! Pure geometry: given an anchor corner, the host window bounds, and a
//! toast size, compute where the toast's rectangle sits. Bounds are passed
//! in fresh on every call so the stack follows host window moves and
//! resizes.

use crate::notification::Anchor;
use iced::{Point, Rectangle, Size};
use serde::{Deserialize, Serialize};

/// Fixed padding between a toast and the host window edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for Insets {
    fn default() -> Self {
        // The top inset clears the host's menu and tool bars.
        Self {
            left: 10.0,
            right: 10.0,
            top: 80.0,
            bottom: 30.0,
        }
    }
}

/// Computes the origin of a toast anchored to `anchor` within `bounds`.
#[must_use]
pub fn anchor_origin(anchor: Anchor, bounds: Rectangle, size: Size, insets: &Insets) -> Point {
    let top = bounds.y + insets.top;
    let bottom = bounds.y + bounds.height - size.height - insets.bottom;
    let left = bounds.x + insets.left;
    let right = bounds.x + bounds.width - size.width - insets.right;
    let center = bounds.x + (bounds.width - size.width) / 2.0;

    match anchor {
        Anchor::TopLeft => Point::new(left, top),
        Anchor::TopCenter => Point::new(center, top),
        Anchor::TopRight => Point::new(right, top),
        Anchor::BottomLeft => Point::new(left, bottom),
        Anchor::BottomCenter => Point::new(center, bottom),
        Anchor::BottomRight => Point::new(right, bottom),
    }
}

/// Computes the full anchored rectangle for a toast of `size`.
#[must_use]
pub fn anchor_rect(anchor: Anchor, bounds: Rectangle, size: Size, insets: &Insets) -> Rectangle {
    let origin = anchor_origin(anchor, bounds, size, insets);
    Rectangle::new(origin, size)
}
