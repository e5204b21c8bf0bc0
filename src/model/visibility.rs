// Copyright The Glide Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keeps divider visibility consistent with the content around it.
//!
//! A visible divider must always sit between two visible content nodes, and
//! at most one visible divider may separate two content nodes that are
//! adjacent once hidden nodes are skipped.

use tracing::trace;

use super::tree::{Model, NodeId};

impl Model {
    /// Hides `target` and the divider next to it: the following divider if
    /// there is one, otherwise the preceding one.
    pub fn hide(&mut self, split: NodeId, target: NodeId) {
        debug_assert_eq!(self.parent(target), Some(split));
        let divider = self
            .next_sibling(target)
            .filter(|&n| self.is_divider(n))
            .or_else(|| self.previous_sibling(target).filter(|&n| self.is_divider(n)));
        if let Some(divider) = divider {
            trace!(?divider, "hiding adjacent divider");
            self.set_visible(divider, false);
        }
        self.set_visible(target, false);
    }

    /// Hides dividers that no longer separate two visible content nodes.
    pub fn check_dividers(&mut self, split: NodeId) {
        let children = self.children(split).to_vec();
        let mut content_since_divider = false;
        let mut trailing = None;
        for child in children {
            if self.is_divider(child) {
                if !self.is_visible(child) {
                    continue;
                }
                if content_since_divider {
                    trailing = Some(child);
                    content_since_divider = false;
                } else {
                    trace!(divider = ?child, "hiding redundant divider");
                    self.set_visible(child, false);
                }
            } else if self.is_visible(child) {
                content_since_divider = true;
                trailing = None;
            }
        }
        if let Some(divider) = trailing {
            trace!(?divider, "hiding trailing divider");
            self.set_visible(divider, false);
        }
    }

    /// Re-enables every divider that has visible content on both sides, in
    /// `split` and then in each of its ancestors.
    pub fn restore_dividers(&mut self, split: NodeId) {
        let mut current = Some(split);
        while let Some(split) = current {
            let children = self.children(split).to_vec();
            for (index, &child) in children.iter().enumerate() {
                if !self.is_divider(child) || index == 0 {
                    continue;
                }
                let before = children[index - 1];
                let after = children[index + 1..]
                    .iter()
                    .any(|&n| !self.is_divider(n) && self.is_visible(n));
                if self.is_visible(before) && after {
                    self.set_visible(child, true);
                }
            }
            current = self.parent(split);
        }
    }

    /// The last visible child of `split` with a positive weight.
    pub fn last_weighted_child(&self, split: NodeId) -> Option<NodeId> {
        self.children(split)
            .iter()
            .copied()
            .filter(|&n| self.is_visible(n) && self.weight(n) > 0.0)
            .last()
    }
}
