// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node arena: handles, styles, children, and measure callbacks.

use alloc::boxed::Box;
use alloc::vec::Vec;
use kurbo::Size;
use smallvec::SmallVec;

use crate::error::LayoutError;
use crate::spec::MeasureSpec;
use crate::style::LayoutStyle;

/// Identifier for a node in a [`LayoutTree`].
///
/// Handles are generational: once a node is removed, its old handle stops
/// resolving even if the slot is reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Intrinsic sizing for leaf nodes.
///
/// Called during measurement with one [`MeasureSpec`] per axis. Axes with an
/// explicit size in the node's style arrive as [`MeasureSpec::Exactly`].
///
/// Any `Fn(MeasureSpec, MeasureSpec) -> Result<Size, LayoutError>` closure
/// implements this trait, so host state can be captured directly.
pub trait Measure {
    /// Reports the preferred size under the given constraints.
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Result<Size, LayoutError>;
}

impl<F> Measure for F
where
    F: Fn(MeasureSpec, MeasureSpec) -> Result<Size, LayoutError>,
{
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Result<Size, LayoutError> {
        self(width, height)
    }
}

pub(crate) struct Node {
    generation: u32,
    pub(crate) style: LayoutStyle,
    pub(crate) children: SmallVec<[NodeId; 4]>,
    pub(crate) measure: Option<Box<dyn Measure>>,
}

impl core::fmt::Debug for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node")
            .field("generation", &self.generation)
            .field("style", &self.style)
            .field("children", &self.children)
            .field("has_measure", &self.measure.is_some())
            .finish_non_exhaustive()
    }
}

/// Arena of layout nodes.
///
/// Nodes hold a [`LayoutStyle`], an ordered list of children, and optionally a
/// [`Measure`] callback. Any node can serve as the root of a computation; see
/// [`LayoutTree::compute`].
///
/// The arena does not track parents. A node may be listed as a child of more
/// than one container, in which case it is arranged once per appearance and
/// the last placement is reported.
///
/// ## Example
///
/// ```rust
/// use kurbo::Size;
/// use understory_flex::{DirectionContext, LayoutError, LayoutStyle, LayoutTree, MeasureSpec};
///
/// let mut tree = LayoutTree::new();
/// let leaf = tree.insert(LayoutStyle::default()).unwrap();
/// tree.set_measure(leaf, |_w: MeasureSpec, _h: MeasureSpec| {
///     Ok::<_, LayoutError>(Size::new(40.0, 10.0))
/// })
/// .unwrap();
/// let root = tree.insert(LayoutStyle::default()).unwrap();
/// tree.set_children(root, &[leaf]).unwrap();
///
/// let layout = tree
///     .compute(root, DirectionContext::LTR, MeasureSpec::AtMost(100.0), MeasureSpec::Unspecified)
///     .unwrap();
/// assert_eq!(layout.measured(root), Some(Size::new(40.0, 10.0)));
/// ```
#[derive(Default)]
pub struct LayoutTree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl core::fmt::Debug for LayoutTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LayoutTree")
            .field("nodes_total", &self.nodes.len())
            .field("nodes_alive", &self.len())
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl LayoutTree {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a childless node with the given style.
    pub fn insert(&mut self, style: LayoutStyle) -> Result<NodeId, LayoutError> {
        style.validate()?;
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            (idx, generation)
        } else {
            self.nodes.push(None);
            self.generations.push(1);
            (self.nodes.len() - 1, 1)
        };
        self.nodes[idx] = Some(Node {
            generation,
            style,
            children: SmallVec::new(),
            measure: None,
        });
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices."
        )]
        let id = NodeId::new(idx as u32, generation);
        Ok(id)
    }

    /// Remove a node and free its slot.
    ///
    /// Children are not removed with it. Containers that still list `id`
    /// fail with [`LayoutError::StaleNode`] at the next [`LayoutTree::compute`].
    pub fn remove(&mut self, id: NodeId) -> Result<(), LayoutError> {
        if !self.is_alive(id) {
            return Err(LayoutError::StaleNode(id));
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
        Ok(())
    }

    /// Returns `true` if `id` refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Returns `true` if there are no live nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Style of a live node.
    #[must_use]
    pub fn style(&self, id: NodeId) -> Option<&LayoutStyle> {
        self.node(id).map(|n| &n.style)
    }

    /// Replace the style of a live node.
    pub fn set_style(&mut self, id: NodeId, style: LayoutStyle) -> Result<(), LayoutError> {
        style.validate()?;
        self.node_mut(id)?.style = style;
        Ok(())
    }

    /// Children of a live node, in layout order. Empty for stale handles.
    #[must_use]
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Replace the ordered children of `id`.
    ///
    /// Every child must be live and distinct from `id`. Deeper cycles are
    /// detected by [`LayoutTree::compute`].
    pub fn set_children(&mut self, id: NodeId, children: &[NodeId]) -> Result<(), LayoutError> {
        if !self.is_alive(id) {
            return Err(LayoutError::StaleNode(id));
        }
        for &child in children {
            if child == id {
                return Err(LayoutError::SelfChild(id));
            }
            if !self.is_alive(child) {
                return Err(LayoutError::StaleNode(child));
            }
        }
        let node = self.node_mut(id)?;
        node.children.clear();
        node.children.extend_from_slice(children);
        Ok(())
    }

    /// Attach a measure callback. It is consulted only while `id` has no children.
    pub fn set_measure(
        &mut self,
        id: NodeId,
        measure: impl Measure + 'static,
    ) -> Result<(), LayoutError> {
        self.node_mut(id)?.measure = Some(Box::new(measure));
        Ok(())
    }

    /// Detach the measure callback of `id`, if any.
    pub fn clear_measure(&mut self, id: NodeId) -> Result<(), LayoutError> {
        self.node_mut(id)?.measure = None;
        Ok(())
    }

    /// Returns `true` if `id` is live and has a measure callback.
    #[must_use]
    pub fn has_measure(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.measure.is_some())
    }

    pub(crate) fn slot_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes
            .get(id.idx())
            .and_then(Option::as_ref)
            .filter(|n| n.generation == id.1)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, LayoutError> {
        self.nodes
            .get_mut(id.idx())
            .and_then(Option::as_mut)
            .filter(|n| n.generation == id.1)
            .ok_or(LayoutError::StaleNode(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_handle_goes_stale_on_reuse() {
        let mut tree = LayoutTree::new();
        let a = tree.insert(LayoutStyle::default()).unwrap();
        tree.remove(a).unwrap();
        let b = tree.insert(LayoutStyle::default()).unwrap();
        assert_eq!(a.idx(), b.idx());
        assert_ne!(a, b);
        assert!(!tree.is_alive(a));
        assert!(tree.is_alive(b));
        assert_eq!(tree.remove(a), Err(LayoutError::StaleNode(a)));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn set_children_rejects_self_and_stale() {
        let mut tree = LayoutTree::new();
        let a = tree.insert(LayoutStyle::default()).unwrap();
        let b = tree.insert(LayoutStyle::default()).unwrap();
        assert_eq!(tree.set_children(a, &[a]), Err(LayoutError::SelfChild(a)));
        tree.remove(b).unwrap();
        assert_eq!(tree.set_children(a, &[b]), Err(LayoutError::StaleNode(b)));
        assert!(tree.children_of(a).is_empty());
    }

    #[test]
    fn insert_validates_style() {
        let mut tree = LayoutTree::new();
        let style = LayoutStyle {
            width: Some(-1.0),
            ..LayoutStyle::default()
        };
        assert_eq!(tree.insert(style), Err(LayoutError::NegativeSize));
        assert!(tree.is_empty());
    }

    #[test]
    fn measure_can_be_cleared() {
        let mut tree = LayoutTree::new();
        let a = tree.insert(LayoutStyle::default()).unwrap();
        tree.set_measure(a, |_: MeasureSpec, _: MeasureSpec| {
            Ok::<_, LayoutError>(Size::ZERO)
        })
        .unwrap();
        assert!(tree.has_measure(a));
        tree.clear_measure(a).unwrap();
        assert!(!tree.has_measure(a));
    }
}
