// Copyright The Glide Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::iter;

use slotmap::SlotMap;
use tracing::debug;

use crate::geometry::{Orientation, Rect};

slotmap::new_key_type! {
    pub struct NodeId;
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Bound by name to a component.
    Leaf { name: String },
    /// A fixed-thickness separator between two content siblings.
    Divider,
    /// Children alternate content and dividers: `[c, d, c, d, ..., c]`.
    Split {
        children: Vec<NodeId>,
        orientation: Orientation,
        name: Option<String>,
    },
}

#[derive(Clone, Debug)]
struct Node {
    parent: Option<NodeId>,
    bounds: Rect,
    weight: f64,
    visible: bool,
    kind: NodeKind,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Node {
            parent: None,
            bounds: Rect::ZERO,
            weight: 0.0,
            visible: true,
            kind,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("invalid weight {0}; weights must be between 0.0 and 1.0")]
    InvalidWeight(f64),
    #[error("dividers have no weight")]
    DividerWeight,
    #[error("dividers have no name")]
    DividerName,
    #[error("a divider cannot be the root of a model")]
    InvalidRoot,
    #[error("node {0:?} is not a split")]
    NotASplit(NodeId),
    #[error("invalid divider size {0}")]
    InvalidDividerSize(i32),
}

/// The node hierarchy of a multi-split layout.
///
/// Nodes are stored in an arena; a split owns its children and every node
/// keeps a non-owning reference to its parent. Detached nodes may exist in
/// the arena while a tree is being assembled.
#[derive(Clone, Debug, Default)]
pub struct Model {
    nodes: SlotMap<NodeId, Node>,
    root: Option<NodeId>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leaf(&mut self, name: impl Into<String>) -> NodeId {
        self.nodes.insert(Node::new(NodeKind::Leaf { name: name.into() }))
    }

    pub fn divider(&mut self) -> NodeId {
        self.nodes.insert(Node::new(NodeKind::Divider))
    }

    /// Creates a split holding exactly `children`, dividers included.
    pub fn split(
        &mut self,
        orientation: Orientation,
        children: impl IntoIterator<Item = NodeId>,
    ) -> NodeId {
        let split = self.nodes.insert(Node::new(NodeKind::Split {
            children: vec![],
            orientation,
            name: None,
        }));
        self.assign_children(split, children.into_iter().collect());
        split
    }

    /// Creates a row from content nodes, inserting a divider between each.
    pub fn row(&mut self, contents: impl IntoIterator<Item = NodeId>) -> NodeId {
        self.split_of(Orientation::Horizontal, contents)
    }

    /// Creates a column from content nodes, inserting a divider between each.
    pub fn column(&mut self, contents: impl IntoIterator<Item = NodeId>) -> NodeId {
        self.split_of(Orientation::Vertical, contents)
    }

    fn split_of(
        &mut self,
        orientation: Orientation,
        contents: impl IntoIterator<Item = NodeId>,
    ) -> NodeId {
        let split = self.split(orientation, []);
        for child in contents {
            self.push_child(split, child);
        }
        split
    }

    /// Appends a content node to a split, preceded by a new divider unless the
    /// split is empty.
    pub fn push_child(&mut self, split: NodeId, child: NodeId) {
        let mut children = self.children(split).to_vec();
        if !children.is_empty() {
            let divider = self.divider();
            children.push(divider);
        }
        children.push(child);
        self.assign_children(split, children);
    }

    pub fn set_children(&mut self, split: NodeId, children: Vec<NodeId>) -> Result<(), ModelError> {
        if !self.is_split(split) {
            return Err(ModelError::NotASplit(split));
        }
        self.assign_children(split, children);
        Ok(())
    }

    fn assign_children(&mut self, split: NodeId, children: Vec<NodeId>) {
        for &child in &children {
            self.nodes[child].parent = Some(split);
        }
        let old = match &mut self.nodes[split].kind {
            NodeKind::Split { children: current, .. } => std::mem::replace(current, children),
            _ => unreachable!("assign_children on a non-split"),
        };
        for child in old {
            if self.nodes[child].parent == Some(split) && !self.children(split).contains(&child) {
                self.nodes[child].parent = None;
            }
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn set_root(&mut self, root: NodeId) -> Result<(), ModelError> {
        if self.is_divider(root) {
            return Err(ModelError::InvalidRoot);
        }
        self.nodes[root].parent = None;
        self.root = Some(root);
        Ok(())
    }

    pub(crate) fn clear_root(&mut self) {
        self.root = None;
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn kind(&self, node: NodeId) -> &NodeKind {
        &self.nodes[node].kind
    }

    pub fn is_leaf(&self, node: NodeId) -> bool {
        matches!(self.nodes[node].kind, NodeKind::Leaf { .. })
    }

    pub fn is_divider(&self, node: NodeId) -> bool {
        matches!(self.nodes[node].kind, NodeKind::Divider)
    }

    pub fn is_split(&self, node: NodeId) -> bool {
        matches!(self.nodes[node].kind, NodeKind::Split { .. })
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node].parent
    }

    /// The children of a split; empty for leaves and dividers.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        match &self.nodes[node].kind {
            NodeKind::Split { children, .. } => children,
            _ => &[],
        }
    }

    pub fn orientation(&self, node: NodeId) -> Option<Orientation> {
        match self.nodes[node].kind {
            NodeKind::Split { orientation, .. } => Some(orientation),
            _ => None,
        }
    }

    pub fn is_row_layout(&self, split: NodeId) -> bool {
        self.orientation(split) == Some(Orientation::Horizontal)
    }

    /// A divider is vertical when it separates the children of a row.
    pub fn is_vertical_divider(&self, divider: NodeId) -> bool {
        self.parent(divider).is_some_and(|parent| self.is_row_layout(parent))
    }

    pub fn name(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node].kind {
            NodeKind::Leaf { name } => Some(name),
            NodeKind::Split { name, .. } => name.as_deref(),
            NodeKind::Divider => None,
        }
    }

    pub fn set_name(&mut self, node: NodeId, new_name: impl Into<String>) -> Result<(), ModelError> {
        match &mut self.nodes[node].kind {
            NodeKind::Leaf { name } => *name = new_name.into(),
            NodeKind::Split { name, .. } => *name = Some(new_name.into()),
            NodeKind::Divider => return Err(ModelError::DividerName),
        }
        Ok(())
    }

    pub fn bounds(&self, node: NodeId) -> Rect {
        self.nodes[node].bounds
    }

    pub fn set_bounds(&mut self, node: NodeId, bounds: Rect) {
        self.nodes[node].bounds = bounds;
    }

    pub fn weight(&self, node: NodeId) -> f64 {
        self.nodes[node].weight
    }

    pub fn set_weight(&mut self, node: NodeId, weight: f64) -> Result<(), ModelError> {
        if self.is_divider(node) {
            return Err(ModelError::DividerWeight);
        }
        if !(0.0..=1.0).contains(&weight) {
            return Err(ModelError::InvalidWeight(weight));
        }
        self.nodes[node].weight = weight;
        Ok(())
    }

    /// Splits are visible exactly when one of their content children is.
    pub fn is_visible(&self, node: NodeId) -> bool {
        match &self.nodes[node].kind {
            NodeKind::Split { children, .. } => {
                children.iter().any(|&c| !self.is_divider(c) && self.is_visible(c))
            }
            _ => self.nodes[node].visible,
        }
    }

    pub fn set_visible(&mut self, node: NodeId, visible: bool) {
        self.nodes[node].visible = visible;
    }

    fn sibling_at_offset(&self, node: NodeId, offset: isize) -> Option<NodeId> {
        let parent = self.parent(node)?;
        let siblings = self.children(parent);
        let index = siblings.iter().position(|&n| n == node)?;
        let index = index.checked_add_signed(offset)?;
        siblings.get(index).copied()
    }

    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.sibling_at_offset(node, 1)
    }

    pub fn previous_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.sibling_at_offset(node, -1)
    }

    /// Detaches `node` from `split` together with its adjacent divider (the
    /// following one if there is one, else the preceding one), returning the
    /// divider that was detached.
    pub fn remove_child(&mut self, split: NodeId, node: NodeId) -> Option<NodeId> {
        let divider = self
            .next_sibling(node)
            .filter(|&n| self.is_divider(n))
            .or_else(|| self.previous_sibling(node).filter(|&n| self.is_divider(n)));
        let children = self
            .children(split)
            .iter()
            .copied()
            .filter(|&c| c != node && Some(c) != divider)
            .collect();
        self.assign_children(split, children);
        divider
    }

    /// Puts `replacement` at `target`'s position in `split`.
    pub fn replace(&mut self, split: NodeId, target: NodeId, replacement: NodeId) {
        let children = self
            .children(split)
            .iter()
            .map(|&c| if c == target { replacement } else { c })
            .collect();
        self.assign_children(split, children);
    }

    /// Drops a node and everything under it from the arena.
    pub(crate) fn free(&mut self, node: NodeId) {
        let doomed: Vec<_> = self.traverse_preorder(node).collect();
        debug!(count = doomed.len(), "freeing nodes");
        for n in doomed {
            self.nodes.remove(n);
        }
    }

    pub fn traverse_preorder(&self, from: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = vec![from];
        iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(self.children(node).iter().rev());
            Some(node)
        })
    }

    /// Finds the first leaf with the given name.
    pub fn node_for_name(&self, name: &str) -> Option<NodeId> {
        let root = self.root?;
        self.traverse_preorder(root)
            .find(|&n| matches!(&self.nodes[n].kind, NodeKind::Leaf { name: leaf } if leaf == name))
    }

    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.root
            .into_iter()
            .flat_map(|root| self.traverse_preorder(root))
            .filter(|&n| self.is_leaf(n))
    }

    pub fn draw_tree(&self) -> String {
        let Some(root) = self.root else {
            return String::from("(empty)\n");
        };
        let tree = self.get_ascii_tree(root);
        let mut out = String::new();
        ascii_tree::write_tree(&mut out, &tree).unwrap();
        out
    }

    fn get_ascii_tree(&self, node: NodeId) -> ascii_tree::Tree {
        let hidden = if self.is_visible(node) { "" } else { " (hidden)" };
        let bounds = self.bounds(node);
        match &self.nodes[node].kind {
            NodeKind::Leaf { name } => ascii_tree::Tree::Leaf(vec![format!(
                "{name:?} weight={} {bounds}{hidden}",
                self.weight(node)
            )]),
            NodeKind::Divider => ascii_tree::Tree::Leaf(vec![format!("divider {bounds}{hidden}")]),
            NodeKind::Split { children, orientation, name } => {
                let kind = match orientation {
                    Orientation::Horizontal => "ROW",
                    Orientation::Vertical => "COLUMN",
                };
                let name = name.as_deref().map(|n| format!(" {n:?}")).unwrap_or_default();
                let desc = format!(
                    "{kind}{name} weight={} {bounds}{hidden}",
                    self.weight(node)
                );
                let children = children.iter().map(|&c| self.get_ascii_tree(c)).collect();
                ascii_tree::Tree::Node(desc, children)
            }
        }
    }
}
