// Copyright The Glide Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The two layout passes.
//!
//! The first pass positions every node at its preferred size, or between
//! its fixed dividers, ignoring the space that is actually available. The
//! second pass grows or shrinks each split to fit its final bounds.

use tracing::trace;

use super::MultiSplitLayout;
use crate::component::{Component, Container};
use crate::config::LayoutMode;
use crate::geometry::{Orientation, Rect};
use crate::model::NodeId;

/// Rounds half to even.
fn rint(value: f64) -> i32 {
    value.round_ties_even() as i32
}

impl<C: Component> MultiSplitLayout<C> {
    pub(super) fn layout1(&mut self, node: NodeId, bounds: Rect) {
        let Some(orientation) = self.model.orientation(node) else {
            if self.model.is_leaf(node) {
                self.model.set_bounds(node, bounds);
            }
            return;
        };
        let children = self.model.children(node).to_vec();
        let previous_end = self.model.bounds(node).end(orientation);
        let mut pos = bounds.start(orientation);
        let mut init_split = false;

        for pair in children.chunks(2) {
            let child = pair[0];
            if !self.model.is_visible(child) {
                continue;
            }
            let divider = pair.get(1).copied().filter(|&d| self.model.is_visible(d));

            let extent = if self.floating_dividers {
                self.preferred_node_size(child).along(orientation)
            } else if let Some(divider) = divider {
                let distance = self.model.bounds(divider).start(orientation) - pos;
                if distance > 0 {
                    distance
                } else {
                    init_split = true;
                    self.preferred_node_size(child).along(orientation)
                }
            } else {
                let distance = previous_end - pos;
                if distance > 0 {
                    distance
                } else {
                    self.preferred_node_size(child).along(orientation)
                }
            };
            let child_bounds = bounds.with_span(orientation, pos, extent);
            self.layout1(child, child_bounds);

            if let Some(divider) = divider {
                if init_split || self.floating_dividers {
                    let divider_bounds =
                        bounds.with_span(orientation, child_bounds.end(orientation), self.divider_size);
                    self.model.set_bounds(divider, divider_bounds);
                }
                pos = self.model.bounds(divider).end(orientation);
            }
        }
        self.minimize_split_bounds(node, bounds);
    }

    /// Shrinks a split along its axis to end where its last visible child
    /// ends.
    fn minimize_split_bounds(&mut self, split: NodeId, bounds: Rect) {
        let Some(orientation) = self.model.orientation(split) else { return };
        let Some(&last) = self.laid_out_children(split).last() else {
            return;
        };
        let last_end = self.model.bounds(last).end(orientation);
        let start = bounds.start(orientation).min(last_end);
        let end = bounds.start(orientation).max(last_end);
        self.model.set_bounds(split, bounds.with_span(orientation, start, end - start));
    }

    /// The visible children of a split in layout order. A divider is only
    /// laid out after visible content.
    fn laid_out_children(&self, split: NodeId) -> Vec<NodeId> {
        let mut out = vec![];
        for pair in self.model.children(split).chunks(2) {
            if !self.model.is_visible(pair[0]) {
                continue;
            }
            out.push(pair[0]);
            if let Some(&divider) = pair.get(1).filter(|&&d| self.model.is_visible(d)) {
                out.push(divider);
            }
        }
        out
    }

    pub(super) fn layout2(&mut self, node: NodeId, bounds: Rect) {
        let Some(orientation) = self.model.orientation(node) else {
            if let Some(component) = self.component_for_node_mut(node) {
                component.set_bounds(bounds);
            }
            self.model.set_bounds(node, bounds);
            return;
        };
        let current = self.model.bounds(node).extent(orientation);
        if current <= bounds.extent(orientation) {
            self.layout_grow(node, orientation, bounds);
            self.model.set_bounds(node, bounds);
        } else {
            self.layout_shrink(node, orientation, bounds);
        }
    }

    /// Hands the extra space to weighted children. The last weighted child
    /// takes whatever rounding left over and the last child fills the rest.
    fn layout_grow(&mut self, split: NodeId, orientation: Orientation, bounds: Rect) {
        let extra = bounds.extent(orientation) - self.model.bounds(split).extent(orientation);
        let last_weighted = self.model.last_weighted_child(split);
        let children = self.laid_out_children(split);
        trace!(?split, extra, "grow");

        let mut available = extra;
        let mut pos = bounds.start(orientation);
        for (index, &child) in children.iter().enumerate() {
            let current = self.model.bounds(child).extent(orientation);
            let weight = self.model.weight(child);
            let extent = if index + 1 == children.len() {
                bounds.end(orientation) - pos
            } else if available > 0 && weight > 0.0 {
                let allocated = if Some(child) == last_weighted {
                    available
                } else {
                    rint(weight * f64::from(extra))
                };
                available -= allocated;
                current + allocated
            } else {
                current
            };
            self.layout2(child, bounds.with_span(orientation, pos, extent));
            pos = self.model.bounds(child).end(orientation);
        }
    }

    /// Takes space away from children without going under their minimum
    /// size. Only weighted children shrink while they have enough slack;
    /// otherwise everything shrinks in proportion to its current size.
    fn layout_shrink(&mut self, split: NodeId, orientation: Orientation, bounds: Rect) {
        let children = self.laid_out_children(split);

        let mut total = 0;
        let mut weighted_minimum = 0;
        let mut weighted_total = 0;
        for &child in &children {
            let current = self.model.bounds(child).extent(orientation);
            total += current;
            if self.model.weight(child) > 0.0 {
                weighted_minimum += self.shrink_floor(child, orientation).min(current);
                weighted_total += current;
            }
        }

        let extra = self.model.bounds(split).extent(orientation) - bounds.extent(orientation);
        let only_weighted = weighted_total - weighted_minimum > extra;
        trace!(?split, extra, only_weighted, "shrink");

        let mut available = extra;
        let mut pos = bounds.start(orientation);
        for (index, &child) in children.iter().enumerate() {
            let current = self.model.bounds(child).extent(orientation);
            let floor = self.shrink_floor(child, orientation);
            let is_divider = self.model.is_divider(child);
            let share = if only_weighted {
                self.model.weight(child)
            } else if total > 0 {
                f64::from(current) / f64::from(total)
            } else {
                0.0
            };

            let resized = if index + 1 == children.len() {
                Some(bounds.end(orientation) - pos)
            } else if available > 0 && share > 0.0 {
                Some(current - rint(share * f64::from(extra)))
            } else {
                None
            };
            let extent = match resized {
                Some(_) if is_divider => self.divider_size,
                Some(extent) => extent.max(floor),
                None => current,
            };
            self.layout2(child, bounds.with_span(orientation, pos, extent));
            if resized.is_some() {
                available -= current - self.model.bounds(child).extent(orientation);
            }
            pos = self.model.bounds(child).end(orientation);
        }
        self.minimize_split_bounds(split, bounds);
    }

    /// How far a node may shrink along the axis.
    fn shrink_floor(&self, node: NodeId, orientation: Orientation) -> i32 {
        match self.layout_mode {
            LayoutMode::UserMinimum if !self.model.is_divider(node) => self.user_min_size,
            LayoutMode::UserMinimum => self.divider_size,
            LayoutMode::Natural => self.minimum_node_size(node).along(orientation),
            LayoutMode::IgnoreMinimum => 0,
        }
    }

    /// Sizes every visible node from its weight. Leaves also get the result
    /// as their component's preferred size, so a following layout with
    /// floating dividers starts from it.
    pub(super) fn do_layout_by_weight(&mut self, container: &impl Container) {
        let Some(root) = self.model.root() else { return };
        let bounds = container.inner_bounds();
        if self.model.is_split(root) {
            self.layout_split_by_weight(root, bounds);
        } else {
            self.model.set_bounds(root, bounds);
        }
    }

    fn layout_split_by_weight(&mut self, split: NodeId, bounds: Rect) {
        let Some(orientation) = self.model.orientation(split) else { return };
        self.model.set_bounds(split, bounds);
        let children: Vec<_> = self
            .model
            .children(split)
            .iter()
            .copied()
            .filter(|&c| self.model.is_visible(c))
            .collect();

        let mut distributable = 1.0;
        let mut unweighted = 0;
        let mut divider_space = 0;
        for &child in &children {
            if self.model.is_divider(child) {
                divider_space += self.divider_size;
                continue;
            }
            let weight = self.model.weight(child);
            if weight > 0.0 {
                distributable -= weight;
            } else {
                unweighted += 1;
            }
        }
        let extent = f64::from(bounds.extent(orientation) - divider_space);
        let unweighted_share = if unweighted > 0 {
            extent * distributable / f64::from(unweighted)
        } else {
            0.0
        };

        let mut pos = bounds.start(orientation);
        for child in children {
            if self.model.is_divider(child) {
                pos += self.divider_size;
                continue;
            }
            let weight = self.model.weight(child);
            let mut along = if weight > 0.0 { (extent * weight) as i32 } else { unweighted_share as i32 };
            if self.layout_mode == LayoutMode::UserMinimum {
                along = along.max(self.user_min_size);
            }
            let child_bounds = bounds.with_span(orientation, pos, along);
            if self.model.is_split(child) {
                self.layout_split_by_weight(child, child_bounds);
            } else {
                self.model.set_bounds(child, child_bounds);
                if let Some(component) = self.component_for_node_mut(child) {
                    component.set_preferred_size(child_bounds.size());
                }
            }
            pos += along;
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use test_log::test;

    use super::super::tests::{bounds_of, layout_of};
    use super::*;
    use crate::component::{Frame, Panel};
    use crate::geometry::{Dimension, Insets};

    fn divider_after(layout: &MultiSplitLayout<Panel>, name: &str) -> Rect {
        let node = layout.node_for_name(name).unwrap();
        let divider = layout.model().next_sibling(node).unwrap();
        layout.model().bounds(divider)
    }

    fn two_panels(left: Panel, right: Panel) -> MultiSplitLayout<Panel> {
        layout_of(
            "(ROW (LEAF name=left weight=0.0) (LEAF name=right weight=1.0))",
            &[("left", left), ("right", right)],
        )
    }

    /// Every visible split's laid out children cover it exactly, end to end.
    fn assert_tiles(layout: &MultiSplitLayout<Panel>, split: NodeId) {
        let model = layout.model();
        let Some(orientation) = model.orientation(split) else { return };
        let bounds = model.bounds(split);
        let mut pos = bounds.start(orientation);
        for child in layout.laid_out_children(split) {
            let child_bounds = model.bounds(child);
            assert_eq!(child_bounds.start(orientation), pos, "gap before {child:?}");
            assert_eq!(
                child_bounds.with_span(orientation, 0, 0),
                bounds.with_span(orientation, 0, 0),
                "cross axis of {child:?}"
            );
            pos = child_bounds.end(orientation);
            assert_tiles(layout, child);
        }
        assert_eq!(pos, bounds.end(orientation));
    }

    fn all_bounds(layout: &MultiSplitLayout<Panel>) -> Vec<Rect> {
        let root = layout.model().root().unwrap();
        layout.model().traverse_preorder(root).map(|n| layout.model().bounds(n)).collect_vec()
    }

    #[test]
    fn grows_the_weighted_child() {
        let mut layout = two_panels(
            Panel::new(Dimension::new(100, 50)),
            Panel::new(Dimension::new(50, 50)),
        );
        layout.layout_container(&Frame::new(400, 200)).unwrap();

        assert_eq!(bounds_of(&layout, "left"), Rect::new(0, 0, 100, 200));
        assert_eq!(divider_after(&layout, "left"), Rect::new(100, 0, 7, 200));
        assert_eq!(bounds_of(&layout, "right"), Rect::new(107, 0, 293, 200));
        assert_eq!(layout.component("left").unwrap().bounds, Rect::new(0, 0, 100, 200));
        assert_eq!(layout.component("right").unwrap().bounds, Rect::new(107, 0, 293, 200));
        let root = layout.model().root().unwrap();
        assert_eq!(layout.model().bounds(root), Rect::new(0, 0, 400, 200));
    }

    #[test]
    fn layout_is_idempotent() {
        let mut layout = layout_of(
            "(COLUMN (ROW weight=1.0 left (COLUMN middle.top middle middle.bottom) right) bottom)",
            &[
                ("left", Panel::new(Dimension::new(80, 200))),
                ("middle.top", Panel::new(Dimension::new(120, 40))),
                ("middle", Panel::new(Dimension::new(100, 100))),
                ("middle.bottom", Panel::new(Dimension::new(120, 40))),
                ("right", Panel::new(Dimension::new(60, 200))),
                ("bottom", Panel::new(Dimension::new(400, 50))),
            ],
        );
        let frame = Frame::new(640, 480);
        layout.layout_container(&frame).unwrap();
        let first = all_bounds(&layout);
        layout.layout_container(&frame).unwrap();
        assert_eq!(all_bounds(&layout), first);
        assert_tiles(&layout, layout.model().root().unwrap());
    }

    #[test]
    fn nested_splits_tile_their_bounds() {
        let mut layout = layout_of(
            "(COLUMN (ROW weight=1.0 left (COLUMN middle.top middle middle.bottom) right) bottom)",
            &[
                ("left", Panel::new(Dimension::new(80, 200))),
                ("middle.top", Panel::new(Dimension::new(120, 40))),
                ("middle", Panel::new(Dimension::new(100, 100))),
                ("middle.bottom", Panel::new(Dimension::new(120, 40))),
                ("right", Panel::new(Dimension::new(60, 200))),
                ("bottom", Panel::new(Dimension::new(400, 50))),
            ],
        );
        for (width, height) in [(640, 480), (300, 200), (1000, 1000)] {
            layout.layout_container(&Frame::new(width, height)).unwrap();
            assert_tiles(&layout, layout.model().root().unwrap());
        }
    }

    #[test]
    fn growing_never_shrinks_children() {
        let mut layout = two_panels(
            Panel::new(Dimension::new(100, 50)),
            Panel::new(Dimension::new(50, 50)),
        );
        layout.layout_container(&Frame::new(400, 200)).unwrap();
        let before = [bounds_of(&layout, "left"), bounds_of(&layout, "right")];
        layout.layout_container(&Frame::new(500, 200)).unwrap();
        let after = [bounds_of(&layout, "left"), bounds_of(&layout, "right")];
        for (before, after) in before.iter().zip(&after) {
            assert!(after.width >= before.width, "{before} -> {after}");
        }
        assert_eq!(after[1], Rect::new(107, 0, 393, 200));
    }

    #[test]
    fn shrinks_to_minimum_sizes() {
        let mut layout = two_panels(
            Panel::new(Dimension::new(100, 50)).with_minimum(Dimension::new(80, 10)),
            Panel::new(Dimension::new(50, 50)).with_minimum(Dimension::new(10, 10)),
        );
        layout.layout_container(&Frame::new(50, 200)).unwrap();

        assert_eq!(bounds_of(&layout, "left"), Rect::new(0, 0, 80, 200));
        assert_eq!(divider_after(&layout, "left"), Rect::new(80, 0, 7, 200));
        assert_eq!(bounds_of(&layout, "right"), Rect::new(87, 0, 10, 200));
        let root = layout.model().root().unwrap();
        assert_eq!(layout.model().bounds(root).width, 97);
    }

    #[test]
    fn only_weighted_children_shrink_while_they_have_slack() {
        let mut layout = two_panels(
            Panel::new(Dimension::new(100, 50)).with_minimum(Dimension::new(80, 10)),
            Panel::new(Dimension::new(300, 50)).with_minimum(Dimension::new(10, 10)),
        );
        layout.layout_container(&Frame::new(250, 200)).unwrap();
        assert_eq!(bounds_of(&layout, "left"), Rect::new(0, 0, 100, 200));
        assert_eq!(bounds_of(&layout, "right"), Rect::new(107, 0, 143, 200));
    }

    #[test]
    fn shrink_floor_follows_layout_mode() {
        let mut layout = two_panels(
            Panel::new(Dimension::new(100, 50)).with_minimum(Dimension::new(80, 10)),
            Panel::new(Dimension::new(50, 50)).with_minimum(Dimension::new(10, 10)),
        );
        layout.set_layout_mode(LayoutMode::IgnoreMinimum);
        layout.layout_container(&Frame::new(50, 200)).unwrap();
        // 107 to take: left gives up rint(100/157 * 107) = 68, right fills the rest.
        assert_eq!(bounds_of(&layout, "left"), Rect::new(0, 0, 32, 200));
        assert_eq!(bounds_of(&layout, "right"), Rect::new(39, 0, 11, 200));

        layout.set_layout_mode(LayoutMode::UserMinimum);
        layout.set_user_min_size(40);
        layout.set_floating_dividers(true);
        layout.layout_container(&Frame::new(50, 200)).unwrap();
        assert_eq!(bounds_of(&layout, "left"), Rect::new(0, 0, 40, 200));
        assert_eq!(bounds_of(&layout, "right"), Rect::new(47, 0, 40, 200));
    }

    #[test]
    fn zero_weight_last_child_keeps_its_size() {
        let mut layout = layout_of(
            "(ROW (LEAF name=a weight=1.0) b)",
            &[
                ("a", Panel::new(Dimension::new(100, 50))),
                ("b", Panel::new(Dimension::new(100, 50))),
            ],
        );
        layout.layout_container(&Frame::new(500, 100)).unwrap();
        assert_eq!(bounds_of(&layout, "a"), Rect::new(0, 0, 393, 100));
        assert_eq!(bounds_of(&layout, "b"), Rect::new(400, 0, 100, 100));

        layout.layout_container(&Frame::new(150, 100)).unwrap();
        assert_eq!(bounds_of(&layout, "a").width, 43);
        assert_eq!(bounds_of(&layout, "b"), Rect::new(50, 0, 100, 100));
    }

    #[test]
    fn fixed_dividers_survive_hiding_and_showing() {
        let panel = Panel::new(Dimension::new(100, 50));
        let mut layout = layout_of(
            "(ROW a b c)",
            &[("a", panel.clone()), ("b", panel.clone()), ("c", panel)],
        );
        let frame = Frame::new(400, 100);
        layout.layout_container(&frame).unwrap();
        let before = all_bounds(&layout);
        assert_eq!(bounds_of(&layout, "c"), Rect::new(214, 0, 186, 100));

        layout.display_node("b", false);
        layout.layout_container(&frame).unwrap();
        assert_eq!(bounds_of(&layout, "a"), Rect::new(0, 0, 100, 100));
        assert_eq!(bounds_of(&layout, "c"), Rect::new(107, 0, 293, 100));
        assert_tiles(&layout, layout.model().root().unwrap());

        layout.display_node("b", true);
        layout.layout_container(&frame).unwrap();
        assert_eq!(all_bounds(&layout), before);
    }

    #[test]
    fn removed_nodes_leave_no_stale_bounds() {
        let panel = Panel::new(Dimension::new(100, 50));
        let mut layout = layout_of(
            "(ROW a b c)",
            &[("a", panel.clone()), ("b", panel.clone()), ("c", panel)],
        );
        let frame = Frame::new(400, 100);
        layout.layout_container(&frame).unwrap();
        let removed = layout.remove_layout_node("b").unwrap();
        assert_eq!(removed.bounds, Rect::new(107, 0, 100, 100));

        layout.layout_container(&frame).unwrap();
        assert_eq!(bounds_of(&layout, "c"), Rect::new(107, 0, 293, 100));
        assert_tiles(&layout, layout.model().root().unwrap());
    }

    #[test]
    fn removing_next_to_a_hidden_leaf_keeps_dividers_thin() {
        let panel = Panel::new(Dimension::new(100, 50));
        let frame = Frame::new(400, 100);
        for (hidden, removed) in [("c", "b"), ("b", "c")] {
            let mut layout = layout_of(
                "(ROW a b c)",
                &[("a", panel.clone()), ("b", panel.clone()), ("c", panel.clone())],
            );
            layout.layout_container(&frame).unwrap();
            layout.display_node(hidden, false);
            layout.layout_container(&frame).unwrap();
            layout.remove_layout_node(removed);
            layout.layout_container(&frame).unwrap();

            let model = layout.model();
            let root = model.root().unwrap();
            for divider in model.children(root).iter().filter(|&&n| model.is_divider(n)) {
                assert!(
                    !model.is_visible(*divider) || model.bounds(*divider).width == 7,
                    "{hidden} hidden, {removed} removed: {:?}",
                    model.bounds(*divider)
                );
            }
            assert_eq!(bounds_of(&layout, "a"), Rect::new(0, 0, 400, 100));
            assert_tiles(&layout, root);
        }
    }

    #[test]
    fn insets_offset_the_layout() {
        let mut layout = two_panels(
            Panel::new(Dimension::new(100, 50)),
            Panel::new(Dimension::new(50, 50)),
        );
        let frame = Frame::new(400, 200).with_insets(Insets::new(10, 20, 10, 20));
        layout.layout_container(&frame).unwrap();
        assert_eq!(bounds_of(&layout, "left"), Rect::new(20, 10, 100, 180));
        assert_eq!(bounds_of(&layout, "right"), Rect::new(127, 10, 253, 180));
    }

    #[test]
    fn lays_out_by_weight() {
        let panel = Panel::new(Dimension::new(10, 10));
        let mut layout = layout_of(
            "(ROW (LEAF name=a weight=0.25) b c)",
            &[("a", panel.clone()), ("b", panel.clone()), ("c", panel)],
        );
        layout.layout_by_weight(&Frame::new(414, 100)).unwrap();
        assert_eq!(bounds_of(&layout, "a"), Rect::new(0, 0, 100, 100));
        assert_eq!(bounds_of(&layout, "b"), Rect::new(107, 0, 150, 100));
        assert_eq!(bounds_of(&layout, "c"), Rect::new(264, 0, 150, 100));
        assert_eq!(layout.component("b").unwrap().preferred, Dimension::new(150, 100));
    }

    #[test]
    fn weights_apply_inside_nested_splits() {
        let panel = Panel::new(Dimension::new(10, 10));
        let mut layout = layout_of(
            "(ROW (LEAF name=a weight=0.5) (COLUMN b (LEAF name=c weight=0.5)))",
            &[("a", panel.clone()), ("b", panel.clone()), ("c", panel)],
        );
        layout.do_layout_by_weight(&Frame::new(207, 100));

        let root = layout.model().root().unwrap();
        let column = layout.model().children(root)[2];
        assert_eq!(bounds_of(&layout, "a"), Rect::new(0, 0, 100, 100));
        assert_eq!(layout.model().bounds(column), Rect::new(107, 0, 100, 100));
        // 93 px are left once the column's divider is taken out.
        assert_eq!(bounds_of(&layout, "b"), Rect::new(107, 0, 100, 46));
        assert_eq!(bounds_of(&layout, "c"), Rect::new(107, 53, 100, 46));
        assert_eq!(layout.component("c").unwrap().preferred, Dimension::new(100, 46));
    }

    #[test]
    fn layout_by_weight_setting_applies_while_floating() {
        let panel = Panel::new(Dimension::new(10, 10));
        let mut layout = layout_of(
            "(COLUMN (LEAF name=a weight=0.5) b)",
            &[("a", panel.clone()), ("b", panel)],
        );
        layout.set_layout_by_weight(true);
        layout.layout_container(&Frame::new(100, 207)).unwrap();
        assert_eq!(bounds_of(&layout, "a"), Rect::new(0, 0, 100, 100));
        assert_eq!(bounds_of(&layout, "b"), Rect::new(0, 107, 100, 100));
    }

    #[test]
    fn user_minimum_applies_to_weighted_sizes() {
        let panel = Panel::new(Dimension::new(10, 10));
        let mut layout = layout_of(
            "(ROW (LEAF name=a weight=0.9) b)",
            &[("a", panel.clone()), ("b", panel)],
        );
        layout.set_layout_mode(LayoutMode::UserMinimum);
        layout.set_user_min_size(30);
        layout.do_layout_by_weight(&Frame::new(107, 50));
        assert_eq!(bounds_of(&layout, "a").width, 90);
        assert_eq!(bounds_of(&layout, "b"), Rect::new(97, 0, 30, 50));
    }

    #[test]
    fn finds_dividers_by_point_and_area() {
        let mut layout = two_panels(
            Panel::new(Dimension::new(100, 50)),
            Panel::new(Dimension::new(50, 50)),
        );
        layout.layout_container(&Frame::new(400, 200)).unwrap();
        let left = layout.node_for_name("left").unwrap();
        let divider = layout.model().next_sibling(left).unwrap();

        assert_eq!(layout.divider_at(103, 50), Some(divider));
        assert_eq!(layout.divider_at(100, 0), Some(divider));
        assert_eq!(layout.divider_at(107, 50), None);
        assert_eq!(layout.divider_at(50, 50), None);

        assert_eq!(layout.dividers_that_overlap(Rect::new(90, 0, 20, 10)), [divider]);
        // Sharing an edge counts.
        assert_eq!(layout.dividers_that_overlap(Rect::new(80, 0, 20, 10)), [divider]);
        assert!(layout.dividers_that_overlap(Rect::new(0, 0, 50, 10)).is_empty());
    }

    #[test]
    fn finds_dividers_in_nested_splits() {
        let panel = Panel::new(Dimension::new(100, 100));
        let mut layout = layout_of(
            "(ROW a (COLUMN b c))",
            &[("a", panel.clone()), ("b", panel.clone()), ("c", panel)],
        );
        layout.layout_container(&Frame::new(207, 207)).unwrap();
        let b = layout.node_for_name("b").unwrap();
        let inner = layout.model().next_sibling(b).unwrap();
        assert_eq!(layout.model().bounds(inner), Rect::new(107, 100, 100, 7));
        assert_eq!(layout.divider_at(150, 103), Some(inner));
        assert!(!layout.model().is_vertical_divider(inner));
    }
}
