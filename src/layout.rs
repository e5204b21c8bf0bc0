// Copyright The Glide Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The multi-split layout manager.
//!
//! [`MultiSplitLayout`] positions a set of named components according to a
//! [`Model`]. Leaves are bound to components by name; dividers sit between
//! siblings and may be kept at fixed positions across layouts.

mod pass;
mod size;

use itertools::Itertools;
use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use crate::component::{Component, Container};
use crate::config::{DEFAULT_DIVIDER_SIZE, DEFAULT_USER_MIN_SIZE, LayoutMode, Settings};
use crate::geometry::Rect;
use crate::model::{Model, ModelError, NodeId, NodeKind};

/// Total weight of a split's children may exceed 1.0 by this much.
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// A structural problem found while validating a model before layout.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{kind} (node {node:?})")]
pub struct InvalidLayout {
    pub kind: InvalidLayoutKind,
    pub node: NodeId,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidLayoutKind {
    #[error("a divider cannot be the root of a model")]
    DividerRoot,
    #[error("split must have more than two children")]
    TooFewChildren,
    #[error("expected a split or a leaf")]
    ExpectedContent,
    #[error("expected a divider")]
    ExpectedDivider,
    #[error("split children's weights exceed 1.0")]
    WeightOverflow,
}

#[derive(Debug)]
pub struct MultiSplitLayout<C> {
    model: Model,
    children: FxHashMap<String, C>,
    divider_size: i32,
    floating_dividers: bool,
    remove_dividers: bool,
    layout_by_weight: bool,
    layout_mode: LayoutMode,
    user_min_size: i32,
}

impl<C: Component> Default for MultiSplitLayout<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Component> MultiSplitLayout<C> {
    /// Creates a layout whose model is a single leaf named "default".
    pub fn new() -> Self {
        let mut model = Model::new();
        let leaf = model.leaf("default");
        // A leaf is always a valid root.
        let _ = model.set_root(leaf);
        Self::from_model(model)
    }

    pub fn from_model(model: Model) -> Self {
        MultiSplitLayout {
            model,
            children: FxHashMap::default(),
            divider_size: DEFAULT_DIVIDER_SIZE,
            floating_dividers: true,
            remove_dividers: true,
            layout_by_weight: false,
            layout_mode: LayoutMode::default(),
            user_min_size: DEFAULT_USER_MIN_SIZE,
        }
    }

    pub fn with_settings(model: Model, settings: &Settings) -> Result<Self, ModelError> {
        let mut layout = Self::from_model(model);
        layout.apply_settings(settings)?;
        Ok(layout)
    }

    pub fn apply_settings(&mut self, settings: &Settings) -> Result<(), ModelError> {
        self.set_divider_size(settings.divider_size)?;
        self.set_floating_dividers(settings.floating_dividers);
        self.set_remove_dividers(settings.remove_dividers);
        self.set_layout_by_weight(settings.layout_by_weight);
        self.set_layout_mode(settings.layout_mode);
        self.set_user_min_size(settings.user_min_size);
        Ok(())
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn has_model(&self) -> bool {
        !self.model.is_empty()
    }

    /// Replaces the model. Components stay registered.
    pub fn set_model(&mut self, model: Model) {
        debug!(empty = model.is_empty(), "replacing model");
        self.model = model;
    }

    pub fn divider_size(&self) -> i32 {
        self.divider_size
    }

    pub fn set_divider_size(&mut self, size: i32) -> Result<(), ModelError> {
        if size < 0 {
            return Err(ModelError::InvalidDividerSize(size));
        }
        debug!(old = self.divider_size, new = size, "divider_size");
        self.divider_size = size;
        Ok(())
    }

    pub fn floating_dividers(&self) -> bool {
        self.floating_dividers
    }

    pub fn set_floating_dividers(&mut self, floating: bool) {
        if self.floating_dividers != floating {
            debug!(floating, "floating_dividers");
        }
        self.floating_dividers = floating;
    }

    pub fn remove_dividers(&self) -> bool {
        self.remove_dividers
    }

    pub fn set_remove_dividers(&mut self, remove: bool) {
        debug!(remove, "remove_dividers");
        self.remove_dividers = remove;
    }

    pub fn layout_by_weight_enabled(&self) -> bool {
        self.layout_by_weight
    }

    pub fn set_layout_by_weight(&mut self, enabled: bool) {
        debug!(enabled, "layout_by_weight");
        self.layout_by_weight = enabled;
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        debug!(?mode, "layout_mode");
        self.layout_mode = mode;
    }

    pub fn user_min_size(&self) -> i32 {
        self.user_min_size
    }

    pub fn set_user_min_size(&mut self, size: i32) {
        debug!(size, "user_min_size");
        self.user_min_size = size;
    }

    /// Binds `component` to the leaf named `name`, returning any component
    /// previously bound to it.
    pub fn add_layout_component(&mut self, name: impl Into<String>, component: C) -> Option<C> {
        self.children.insert(name.into(), component)
    }

    /// Unbinds the component bound to `name`. The model is not changed.
    pub fn remove_layout_component(&mut self, name: &str) -> Option<C> {
        self.children.remove(name)
    }

    pub fn component(&self, name: &str) -> Option<&C> {
        self.children.get(name)
    }

    pub fn component_mut(&mut self, name: &str) -> Option<&mut C> {
        self.children.get_mut(name)
    }

    pub fn components(&self) -> impl Iterator<Item = (&str, &C)> {
        self.children.iter().map(|(name, c)| (name.as_str(), c))
    }

    /// The component bound to a leaf, if any.
    pub fn component_for_node(&self, node: NodeId) -> Option<&C> {
        match self.model.kind(node) {
            NodeKind::Leaf { name } => self.children.get(name.as_str()),
            _ => None,
        }
    }

    fn component_for_node_mut(&mut self, node: NodeId) -> Option<&mut C> {
        match self.model.kind(node) {
            NodeKind::Leaf { name } => self.children.get_mut(name.as_str()),
            _ => None,
        }
    }

    fn visible_component(&self, node: NodeId) -> Option<&C> {
        self.component_for_node(node).filter(|c| c.is_visible())
    }

    pub fn node_for_name(&self, name: &str) -> Option<NodeId> {
        self.model.node_for_name(name)
    }

    /// Checks that every split reachable through visible content is well
    /// formed.
    pub fn check_layout(&self) -> Result<(), InvalidLayout> {
        match self.model.root() {
            Some(root) if self.model.is_divider(root) => {
                Err(InvalidLayout { kind: InvalidLayoutKind::DividerRoot, node: root })
            }
            Some(root) => self.check_node(root),
            None => Ok(()),
        }
    }

    fn check_node(&self, node: NodeId) -> Result<(), InvalidLayout> {
        if !self.model.is_split(node) {
            return Ok(());
        }
        let fail = |kind, node| -> Result<(), InvalidLayout> { Err(InvalidLayout { kind, node }) };
        let children = self.model.children(node);
        if children.len() <= 2 {
            return fail(InvalidLayoutKind::TooFewChildren, node);
        }
        let mut total_weight = 0.0;
        for (index, &child) in children.iter().enumerate().step_by(2) {
            if self.model.is_divider(child) {
                return fail(InvalidLayoutKind::ExpectedContent, child);
            }
            if let Some(&divider) = children.get(index + 1) {
                if !self.model.is_divider(divider) {
                    return fail(InvalidLayoutKind::ExpectedDivider, divider);
                }
                if index + 2 == children.len() {
                    return fail(InvalidLayoutKind::ExpectedContent, divider);
                }
            }
            if self.model.is_visible(child) {
                total_weight += self.model.weight(child);
                self.check_node(child)?;
            }
        }
        if total_weight > 1.0 + WEIGHT_TOLERANCE {
            return fail(InvalidLayoutKind::WeightOverflow, node);
        }
        Ok(())
    }

    /// Lays out the model within the container's bounds minus its insets.
    ///
    /// Nodes and components are both assigned their new bounds. An empty
    /// model does nothing.
    #[instrument(skip_all)]
    pub fn layout_container(&mut self, container: &impl Container) -> Result<(), InvalidLayout> {
        self.check_layout()?;
        let Some(root) = self.model.root() else {
            return Ok(());
        };
        if self.floating_dividers && self.layout_by_weight {
            self.do_layout_by_weight(container);
        }
        let bounds = container.inner_bounds();
        debug!(%bounds, "layout");
        self.layout1(root, bounds);
        self.layout2(root, bounds);
        Ok(())
    }

    /// Sizes every node from its weight and then lays out the container.
    pub fn layout_by_weight(&mut self, container: &impl Container) -> Result<(), InvalidLayout> {
        self.check_layout()?;
        self.do_layout_by_weight(container);
        self.layout_container(container)
    }

    /// Shows or hides the leaf named `name` and its component.
    ///
    /// Dividers around the leaf are hidden or restored to match, and splits
    /// left with no visible content are hidden in their parents. Divider
    /// positions are fixed afterwards.
    pub fn display_node(&mut self, name: &str, visible: bool) {
        if let Some(node) = self.model.node_for_name(name) {
            if let Some(component) = self.children.get_mut(name) {
                component.set_visible(visible);
            }
            self.model.set_visible(node, visible);
            if let Some(parent) = self.model.parent(node) {
                if visible {
                    self.model.restore_dividers(parent);
                } else {
                    self.model.hide(parent, node);
                    let mut split = parent;
                    loop {
                        self.model.check_dividers(split);
                        if self.model.is_visible(split) {
                            break;
                        }
                        let Some(grandparent) = self.model.parent(split) else { break };
                        self.model.hide(grandparent, split);
                        split = grandparent;
                    }
                }
            }
            debug!(name, visible, "display_node");
        }
        self.set_floating_dividers(false);
    }

    /// Removes the leaf named `name` along with its adjacent divider and
    /// unbinds its component, returning the component.
    ///
    /// With `remove_dividers` set, splits left with fewer than two children
    /// are collapsed into their parents.
    pub fn remove_layout_node(&mut self, name: &str) -> Option<C> {
        let component = self.children.remove(name);
        let Some(root) = self.model.root() else {
            return component;
        };
        let node = if self.model.is_split(root) {
            self.model.node_for_name(name)
        } else {
            (self.model.name(root) == Some(name)).then_some(root)
        };
        let Some(node) = node else {
            return component;
        };
        debug!(name, "remove_layout_node");
        let Some(mut split) = self.model.parent(node) else {
            self.model.clear_root();
            self.model.free(node);
            return component;
        };
        if let Some(divider) = self.model.remove_child(split, node) {
            self.model.free(divider);
        }
        self.model.free(node);

        while self.remove_dividers && self.model.children(split).len() < 2 {
            let parent = self.model.parent(split);
            let only = self.model.children(split).first().copied();
            if only.is_some() {
                // Detach so freeing the split leaves the child alive.
                let _ = self.model.set_children(split, vec![]);
            }
            match (parent, only) {
                (Some(parent), Some(only)) => self.model.replace(parent, split, only),
                (Some(parent), None) => {
                    if let Some(divider) = self.model.remove_child(parent, split) {
                        self.model.free(divider);
                    }
                }
                (None, Some(only)) => {
                    if self.model.set_root(only).is_err() {
                        self.model.clear_root();
                        self.model.free(only);
                    }
                }
                (None, None) => self.model.clear_root(),
            }
            self.model.free(split);
            match parent {
                Some(parent) => split = parent,
                None => break,
            }
        }
        self.sweep_dividers();
        component
    }

    /// Runs `check_dividers` over every split, innermost first, so a split
    /// that lost its last visible child also loses the divider beside it.
    fn sweep_dividers(&mut self) {
        let Some(root) = self.model.root() else { return };
        let splits: Vec<_> =
            self.model.traverse_preorder(root).filter(|&n| self.model.is_split(n)).collect();
        for split in splits.into_iter().rev() {
            self.model.check_dividers(split);
        }
    }

    /// The visible divider containing the point, if any.
    pub fn divider_at(&self, x: i32, y: i32) -> Option<NodeId> {
        let root = self.model.root()?;
        self.divider_at_node(root, x, y)
    }

    fn divider_at_node(&self, node: NodeId, x: i32, y: i32) -> Option<NodeId> {
        if self.model.is_divider(node) {
            return self.model.bounds(node).contains(x, y).then_some(node);
        }
        let child = self
            .model
            .children(node)
            .iter()
            .copied()
            .filter(|&c| self.model.is_visible(c))
            .find(|&c| self.model.bounds(c).contains(x, y))?;
        self.divider_at_node(child, x, y)
    }

    /// Every divider whose bounds touch `rect`, edges included.
    pub fn dividers_that_overlap(&self, rect: Rect) -> Vec<NodeId> {
        let Some(root) = self.model.root() else {
            return vec![];
        };
        let mut dividers = vec![];
        self.collect_overlapping_dividers(root, &rect, &mut dividers);
        dividers
    }

    fn collect_overlapping_dividers(&self, node: NodeId, rect: &Rect, out: &mut Vec<NodeId>) {
        if !self.model.is_split(node) || !self.model.bounds(node).touches(rect) {
            return;
        }
        let (dividers, splits): (Vec<_>, Vec<_>) = self
            .model
            .children(node)
            .iter()
            .copied()
            .filter(|&c| !self.model.is_leaf(c))
            .partition(|&c| self.model.is_divider(c));
        out.extend(dividers.into_iter().filter(|&d| self.model.bounds(d).touches(rect)));
        for split in splits {
            self.collect_overlapping_dividers(split, rect, out);
        }
    }

    /// Names of the leaves without a bound component.
    pub fn unbound_leaves(&self) -> Vec<&str> {
        self.model
            .leaves()
            .filter_map(|n| self.model.name(n))
            .filter(|name| !self.children.contains_key(*name))
            .sorted()
            .dedup()
            .collect_vec()
    }
}
