// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output of a layout computation.

use hashbrown::HashMap;
use kurbo::{Rect, Size};

use crate::tree::NodeId;

/// Measured size and arranged rectangle of one node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeLayout {
    /// Size reported by the measure pass.
    pub measured: Size,
    /// Rectangle assigned by the arrange pass, relative to the computation origin.
    pub rect: Rect,
}

/// Per-node results of [`LayoutTree::compute`](crate::LayoutTree::compute).
///
/// Covers every node reachable from the root. The root is arranged at the
/// origin with its measured size.
#[derive(Clone, Debug)]
pub struct LayoutResult {
    root: NodeId,
    nodes: HashMap<NodeId, NodeLayout>,
}

impl LayoutResult {
    pub(crate) fn new(root: NodeId, nodes: HashMap<NodeId, NodeLayout>) -> Self {
        Self { root, nodes }
    }

    /// The root this result was computed for.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Layout of `id`, if it was reached.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&NodeLayout> {
        self.nodes.get(&id)
    }

    /// Measured size of `id`.
    #[must_use]
    pub fn measured(&self, id: NodeId) -> Option<Size> {
        self.get(id).map(|l| l.measured)
    }

    /// Arranged rectangle of `id`.
    #[must_use]
    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.get(id).map(|l| l.rect)
    }

    /// Number of nodes laid out.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no node was laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all laid-out nodes in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeLayout)> + '_ {
        self.nodes.iter().map(|(id, l)| (*id, l))
    }
}
