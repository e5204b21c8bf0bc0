// Copyright The Glide Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::MultiSplitLayout;
use crate::component::{Component, Container};
use crate::config::LayoutMode;
use crate::geometry::{Dimension, Orientation};
use crate::model::{NodeId, NodeKind};

impl<C: Component> MultiSplitLayout<C> {
    /// The preferred size of a node, aggregated from its components.
    pub fn preferred_node_size(&self, node: NodeId) -> Dimension {
        match self.model.kind(node) {
            NodeKind::Leaf { .. } => self
                .visible_component(node)
                .map(|c| c.preferred_size())
                .unwrap_or(Dimension::ZERO),
            NodeKind::Divider => self.divider_node_size(node),
            &NodeKind::Split { orientation, .. } => {
                self.stack_children(node, orientation, |n| self.preferred_node_size(n))
            }
        }
    }

    /// The minimum size of a node under the current [`LayoutMode`].
    ///
    /// The node must be visible.
    pub fn minimum_node_size(&self, node: NodeId) -> Dimension {
        debug_assert!(self.model.is_visible(node), "minimum size of hidden node");
        match self.model.kind(node) {
            NodeKind::Leaf { .. } => match self.layout_mode {
                LayoutMode::IgnoreMinimum => Dimension::ZERO,
                LayoutMode::UserMinimum => Dimension::square(self.user_min_size),
                LayoutMode::Natural => self
                    .visible_component(node)
                    .map(|c| c.minimum_size())
                    .unwrap_or(Dimension::ZERO),
            },
            NodeKind::Divider => self.divider_node_size(node),
            &NodeKind::Split { orientation, .. } => {
                self.stack_children(node, orientation, |n| self.minimum_node_size(n))
            }
        }
    }

    /// The maximum size of a node.
    ///
    /// The node must be visible. Dividers do not limit a split on its cross
    /// axis.
    pub fn maximum_node_size(&self, node: NodeId) -> Dimension {
        debug_assert!(self.model.is_visible(node), "maximum size of hidden node");
        match self.model.kind(node) {
            NodeKind::Leaf { .. } => self
                .visible_component(node)
                .map(|c| c.maximum_size())
                .unwrap_or(Dimension::ZERO),
            NodeKind::Divider => self.divider_node_size(node),
            &NodeKind::Split { orientation, .. } => {
                let mut along = 0i32;
                let mut across = i32::MAX;
                for &child in self.model.children(node) {
                    if !self.model.is_visible(child) {
                        continue;
                    }
                    if self.model.is_divider(child) {
                        along = along.saturating_add(self.divider_size);
                        continue;
                    }
                    let size = self.maximum_node_size(child);
                    along = along.saturating_add(size.along(orientation));
                    across = across.min(size.across(orientation));
                }
                Dimension::from_axes(orientation, along, across)
            }
        }
    }

    /// The preferred size of the whole model, including the container's insets.
    pub fn preferred_layout_size(&self, container: &impl Container) -> Dimension {
        let size = match self.model.root() {
            Some(root) => self.preferred_node_size(root),
            None => Dimension::ZERO,
        };
        with_insets(container, size)
    }

    /// The minimum size of the whole model, including the container's insets.
    pub fn minimum_layout_size(&self, container: &impl Container) -> Dimension {
        let size = match self.model.root() {
            Some(root) if self.model.is_visible(root) => self.minimum_node_size(root),
            _ => Dimension::ZERO,
        };
        with_insets(container, size)
    }

    fn divider_node_size(&self, divider: NodeId) -> Dimension {
        if self.model.is_visible(divider) {
            Dimension::square(self.divider_size)
        } else {
            Dimension::ZERO
        }
    }

    /// Sums the visible children along the axis and takes the largest across it.
    fn stack_children(
        &self,
        split: NodeId,
        orientation: Orientation,
        size_of: impl Fn(NodeId) -> Dimension,
    ) -> Dimension {
        let mut along = 0;
        let mut across = 0;
        for &child in self.model.children(split) {
            if !self.model.is_visible(child) {
                continue;
            }
            let size = size_of(child);
            along += size.along(orientation);
            across = across.max(size.across(orientation));
        }
        Dimension::from_axes(orientation, along, across)
    }
}

fn with_insets(container: &impl Container, size: Dimension) -> Dimension {
    let insets = container.insets();
    Dimension::new(
        size.width + insets.horizontal(),
        size.height + insets.vertical(),
    )
}
