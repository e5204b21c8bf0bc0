// Copyright The Glide Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integer geometry used by the layout engine.
//!
//! All layout happens on whole pixels. Intermediate arithmetic (weights and
//! proportional shares) is done in `f64` and converted back by the callers.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Children are arranged left to right (a row).
    Horizontal,
    /// Children are arranged top to bottom (a column).
    Vertical,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    pub width: i32,
    pub height: i32,
}

impl Dimension {
    pub const ZERO: Dimension = Dimension { width: 0, height: 0 };

    pub const fn new(width: i32, height: i32) -> Self {
        Dimension { width, height }
    }

    /// The same value on both axes.
    pub const fn square(side: i32) -> Self {
        Dimension { width: side, height: side }
    }

    /// The extent along the given axis.
    pub fn along(self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// The extent across the given axis.
    pub fn across(self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.height,
            Orientation::Vertical => self.width,
        }
    }

    pub fn from_axes(orientation: Orientation, along: i32, across: i32) -> Self {
        match orientation {
            Orientation::Horizontal => Dimension::new(along, across),
            Orientation::Vertical => Dimension::new(across, along),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Insets {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Insets {
    pub const ZERO: Insets = Insets { top: 0, left: 0, bottom: 0, right: 0 };

    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Insets { top, left, bottom, right }
    }

    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const ZERO: Rect = Rect { x: 0, y: 0, width: 0, height: 0 };

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn size(&self) -> Dimension {
        Dimension::new(self.width, self.height)
    }

    pub fn max_x(&self) -> i32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> i32 {
        self.y + self.height
    }

    /// Where the rect begins along the axis.
    pub fn start(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }

    /// Where the rect ends along the axis.
    pub fn end(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.max_x(),
            Orientation::Vertical => self.max_y(),
        }
    }

    pub fn extent(&self, orientation: Orientation) -> i32 {
        self.size().along(orientation)
    }

    /// Returns a rect spanning `start..start + extent` along the axis, keeping
    /// this rect's position and extent on the cross axis.
    pub fn with_span(&self, orientation: Orientation, start: i32, extent: i32) -> Rect {
        match orientation {
            Orientation::Horizontal => Rect::new(start, self.y, extent, self.height),
            Orientation::Vertical => Rect::new(self.x, start, self.width, extent),
        }
    }

    /// Whether the point lies inside the rect. The max edges are exclusive.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.width > 0
            && self.height > 0
            && x >= self.x
            && y >= self.y
            && x < self.max_x()
            && y < self.max_y()
    }

    /// Whether the two rects touch or overlap. Edges are inclusive, so rects
    /// that share a border count as overlapping.
    pub fn touches(&self, other: &Rect) -> bool {
        self.x <= other.max_x()
            && self.max_x() >= other.x
            && self.y <= other.max_y()
            && self.max_y() >= other.y
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {}x{}", self.x, self.y, self.width, self.height)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn span_keeps_cross_axis() {
        let r = Rect::new(10, 20, 300, 40);
        assert_eq!(r.with_span(Orientation::Horizontal, 50, 7), Rect::new(50, 20, 7, 40));
        assert_eq!(r.with_span(Orientation::Vertical, 25, 5), Rect::new(10, 25, 300, 5));
    }

    #[test]
    fn contains_excludes_max_edges() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains(0, 0));
        assert!(r.contains(9, 9));
        assert!(!r.contains(10, 5));
        assert!(!Rect::new(0, 0, 0, 10).contains(0, 0));
    }

    #[test]
    fn touching_rects_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.touches(&Rect::new(10, 0, 5, 5)));
        assert!(!a.touches(&Rect::new(11, 0, 5, 5)));
    }
}
