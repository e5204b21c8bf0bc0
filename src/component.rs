// Copyright The Glide Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The collaborators the layout engine drives.
//!
//! The engine never paints or handles input. It only asks components for
//! their sizes and tells them where to go.

use serde::{Deserialize, Serialize};

use crate::geometry::{Dimension, Insets, Rect};

/// A child bound to a Leaf node by name.
pub trait Component {
    fn preferred_size(&self) -> Dimension;
    fn minimum_size(&self) -> Dimension;
    fn maximum_size(&self) -> Dimension;
    fn set_preferred_size(&mut self, size: Dimension);
    fn set_bounds(&mut self, bounds: Rect);
    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);
}

/// The area being laid out.
pub trait Container {
    fn size(&self) -> Dimension;
    fn insets(&self) -> Insets;

    /// The usable area after removing the insets.
    fn inner_bounds(&self) -> Rect {
        let size = self.size();
        let insets = self.insets();
        Rect::new(
            insets.left,
            insets.top,
            size.width - insets.horizontal(),
            size.height - insets.vertical(),
        )
    }
}

/// A component that only records what it is told.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Panel {
    pub preferred: Dimension,
    pub minimum: Dimension,
    pub maximum: Dimension,
    pub visible: bool,
    #[serde(skip)]
    pub bounds: Rect,
}

impl Default for Panel {
    fn default() -> Self {
        Panel {
            preferred: Dimension::ZERO,
            minimum: Dimension::ZERO,
            maximum: Dimension::new(i32::MAX, i32::MAX),
            visible: true,
            bounds: Rect::ZERO,
        }
    }
}

impl Panel {
    pub fn new(preferred: Dimension) -> Self {
        Panel { preferred, ..Default::default() }
    }

    pub fn with_minimum(mut self, minimum: Dimension) -> Self {
        self.minimum = minimum;
        self
    }

    pub fn with_maximum(mut self, maximum: Dimension) -> Self {
        self.maximum = maximum;
        self
    }
}

impl Component for Panel {
    fn preferred_size(&self) -> Dimension {
        self.preferred
    }

    fn minimum_size(&self) -> Dimension {
        self.minimum
    }

    fn maximum_size(&self) -> Dimension {
        self.maximum
    }

    fn set_preferred_size(&mut self, size: Dimension) {
        self.preferred = size;
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// A fixed-size container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub size: Dimension,
    #[serde(default)]
    pub insets: Insets,
}

impl Frame {
    pub fn new(width: i32, height: i32) -> Self {
        Frame {
            size: Dimension::new(width, height),
            insets: Insets::ZERO,
        }
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }
}

impl Container for Frame {
    fn size(&self) -> Dimension {
        self.size
    }

    fn insets(&self) -> Insets {
        self.insets
    }
}
