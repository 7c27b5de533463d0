// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable slots and the pool that owns them.

use alloc::vec::Vec;
use kurbo::Rect;

use crate::error::RecycleError;

/// A widget reference plus the rectangle it was last placed at.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderNode<W> {
    bounds: Rect,
    /// The widget bound to this node, if any.
    ///
    /// Bind callbacks set this. It survives unbinding so the next bind can
    /// reuse it.
    pub widget: Option<W>,
}

impl<W> Default for RenderNode<W> {
    fn default() -> Self {
        Self {
            bounds: Rect::ZERO,
            widget: None,
        }
    }
}

impl<W> RenderNode<W> {
    /// Bounds assigned by the last update.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Assign bounds. Width and height must be finite and non-negative.
    pub fn set_bounds(&mut self, bounds: Rect) -> Result<(), RecycleError> {
        validate_rect(bounds)?;
        self.bounds = bounds;
        Ok(())
    }
}

pub(crate) fn validate_rect(rect: Rect) -> Result<(), RecycleError> {
    if ![rect.x0, rect.y0, rect.x1, rect.y1]
        .into_iter()
        .all(f64::is_finite)
    {
        return Err(RecycleError::NonFinite("bounds"));
    }
    if rect.width() < 0.0 || rect.height() < 0.0 {
        return Err(RecycleError::Negative("bounds size"));
    }
    Ok(())
}

/// One reusable position in a [`SlotPool`].
///
/// `U` is per-slot host state. It is created with `U::default()` when the slot
/// is reserved and is never touched by the engine afterwards, so bind
/// callbacks can keep recycling bookkeeping there.
#[derive(Clone, Debug)]
pub struct Slot<W, U = ()> {
    pub(crate) index: Option<usize>,
    /// Widget and bounds.
    pub node: RenderNode<W>,
    /// Host state.
    pub user: U,
}

impl<W, U: Default> Default for Slot<W, U> {
    fn default() -> Self {
        Self {
            index: None,
            node: RenderNode::default(),
            user: U::default(),
        }
    }
}

impl<W, U> Slot<W, U> {
    /// Item index currently bound to this slot.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    /// Returns `true` if an item is bound.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.index.is_some()
    }
}

/// Populates slots with widgets for item indices.
///
/// On every update, the view walks the visible items in order and hands item
/// `first + k` to slot `k`. Slot positions are not stable across scrolling:
/// the pool is a scratch array refilled from the start each time. A binder
/// that wants to keep per-item widget identity should key its own cache by
/// index, or keep state in [`Slot::user`].
///
/// `bind` must leave [`RenderNode::widget`] set before returning `Ok`.
///
/// Closures of the form `FnMut(&mut Slot<W, U>, usize) -> Result<(), RecycleError>`
/// implement this trait with a no-op `unbind`.
pub trait Bind<W, U = ()> {
    /// Bind item `index` into `slot`.
    fn bind(&mut self, slot: &mut Slot<W, U>, index: usize) -> Result<(), RecycleError>;

    /// Called when `slot`, last bound to `previous_index`, falls out of the
    /// visible range. The widget is left in place.
    fn unbind(&mut self, slot: &mut Slot<W, U>, previous_index: usize) {
        let _ = (slot, previous_index);
    }
}

impl<W, U, F> Bind<W, U> for F
where
    F: FnMut(&mut Slot<W, U>, usize) -> Result<(), RecycleError>,
{
    fn bind(&mut self, slot: &mut Slot<W, U>, index: usize) -> Result<(), RecycleError> {
        self(slot, index)
    }
}

/// Fixed-capacity array of slots, the first `visible_count` of which hold the
/// current window.
#[derive(Clone, Debug)]
pub struct SlotPool<W, U = ()> {
    slots: Vec<Slot<W, U>>,
    visible: usize,
}

impl<W, U> Default for SlotPool<W, U> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            visible: 0,
        }
    }
}

impl<W, U> SlotPool<W, U> {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reserved slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots holding the current window.
    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.visible
    }

    /// All reserved slots.
    #[must_use]
    pub fn slots(&self) -> &[Slot<W, U>] {
        &self.slots
    }

    /// Slots holding the current window, in item order.
    #[must_use]
    pub fn visible_slots(&self) -> &[Slot<W, U>] {
        &self.slots[..self.visible]
    }

    /// Render nodes of the current window, in item order.
    pub fn visible_nodes(&self) -> impl ExactSizeIterator<Item = &RenderNode<W>> + '_ {
        self.visible_slots().iter().map(|s| &s.node)
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Slot<W, U>] {
        &mut self.slots
    }

    pub(crate) fn set_visible(&mut self, count: usize) {
        debug_assert!(count <= self.slots.len(), "visible count exceeds capacity");
        self.visible = count;
    }

    /// Marks slots from `start` onward as unbound, reporting each previously
    /// bound one to `binder`.
    pub(crate) fn unbind_from(
        &mut self,
        start: usize,
        mut binder: Option<&mut (dyn Bind<W, U> + 'static)>,
    ) {
        for slot in self.slots.iter_mut().skip(start) {
            if let Some(previous) = slot.index.take()
                && let Some(binder) = binder.as_deref_mut()
            {
                binder.unbind(slot, previous);
            }
        }
    }

    /// Drop every slot.
    pub(crate) fn clear(&mut self) {
        self.slots = Vec::new();
        self.visible = 0;
    }
}

impl<W, U: Default> SlotPool<W, U> {
    /// Grow the pool to at least `capacity` slots. Never shrinks.
    ///
    /// Existing slots keep their contents. New slots start unbound with a
    /// default payload. On failure the pool is unchanged.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), RecycleError> {
        let Some(additional) = capacity.checked_sub(self.slots.len()) else {
            return Ok(());
        };
        self.slots
            .try_reserve_exact(additional)
            .map_err(|_| RecycleError::CapacityOverflow(capacity))?;
        self.slots.resize_with(capacity, Slot::default);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn reserve_grows_but_never_shrinks() {
        let mut pool = SlotPool::<u32>::new();
        pool.reserve(4).unwrap();
        assert_eq!(pool.capacity(), 4);
        pool.slots_mut()[1].node.widget = Some(7);
        pool.reserve(2).unwrap();
        assert_eq!(pool.capacity(), 4);
        pool.reserve(6).unwrap();
        assert_eq!(pool.capacity(), 6);
        assert_eq!(pool.slots()[1].node.widget, Some(7));
        assert!(pool.slots().iter().all(|s| !s.is_bound()));
    }

    #[test]
    fn impossible_capacity_overflows() {
        let mut pool = SlotPool::<u64>::new();
        let err = pool.reserve(usize::MAX).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
        assert_eq!(pool.capacity(), 0);
    }

    #[test]
    fn render_node_rejects_inverted_rect() {
        let mut node = RenderNode::<()>::default();
        let err = node.set_bounds(Rect::new(10.0, 0.0, 5.0, 5.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        node.set_bounds(Rect::new(0.0, 0.0, 0.0, 5.0)).unwrap();
        assert_eq!(node.bounds().height(), 5.0);
    }

    #[test]
    fn unbind_from_reports_previous_indices() {
        struct Recorder(Vec<(usize, usize)>);
        impl Bind<u32> for Recorder {
            fn bind(&mut self, _: &mut Slot<u32>, _: usize) -> Result<(), RecycleError> {
                Ok(())
            }
            fn unbind(&mut self, slot: &mut Slot<u32>, previous_index: usize) {
                self.0.push((slot.node.widget.unwrap_or(0) as usize, previous_index));
            }
        }

        let mut pool = SlotPool::<u32>::new();
        pool.reserve(3).unwrap();
        for (k, slot) in (0_u32..).zip(pool.slots_mut()) {
            slot.index = Some(10 + k as usize);
            slot.node.widget = Some(k);
        }
        let mut recorder = Recorder(Vec::new());
        pool.unbind_from(1, Some(&mut recorder));
        assert_eq!(recorder.0, [(1, 11), (2, 12)]);
        assert_eq!(pool.slots()[0].index(), Some(10));
        assert!(!pool.slots()[2].is_bound());
    }
}
