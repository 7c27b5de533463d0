// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recycling view: scroll state, visible range, and slot reconciliation.

use alloc::boxed::Box;
use kurbo::{Rect, Size};

use crate::error::{RecycleError, non_negative};
use crate::grid::{GridCell, GridStyle};
use crate::list::ListStyle;
use crate::model::{ScrollAxis, VisibleRange, WindowModel};
use crate::slot::{Bind, RenderNode, Slot, SlotPool, validate_rect};

/// Alignment mode when scrolling a specific index into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Align the start (top/leading edge) of the item with the viewport.
    Start,
    /// Center the item within the viewport.
    Center,
    /// Align the end (bottom/trailing edge) of the item with the viewport.
    End,
    /// Move just enough to make the item fully visible, preferring the
    /// smallest change from the current scroll offset.
    Nearest,
}

/// A scrolling window over `item_count` fixed-size items backed by a pool of
/// reusable slots.
///
/// The view:
/// - stores the style, bounds, item count, and a scroll offset that is kept
///   within `[0, max(0, content_extent - viewport)]` after every mutation,
/// - computes which items intersect the viewport (plus overscan),
/// - on [`update`](Self::update), binds those items into slots `0..n` through
///   a [`Bind`] implementation and positions each slot's render node.
///
/// Use the [`ListView`] and [`GridView`] aliases.
///
/// ## Example
///
/// ```rust
/// use kurbo::{Insets, Rect};
/// use understory_virtual_list::{ListStyle, ListView, Slot};
///
/// let style = ListStyle {
///     padding: Insets::new(16.0, 88.0, 16.0, 88.0),
///     spacing: 16.0,
///     item_extent: 80.0,
///     ..ListStyle::default()
/// };
/// let mut view: ListView<String> = ListView::new(style, 100, 16).unwrap();
/// view.set_bounds(Rect::new(0.0, 0.0, 360.0, 600.0)).unwrap();
/// view.set_bind_fn(|slot: &mut Slot<String>, index| {
///     slot.node.widget = Some(format!("row {index}"));
///     Ok(())
/// });
///
/// assert_eq!(view.content_extent(), Ok(9760.0));
/// view.update().unwrap();
/// assert_eq!(view.visible_range().map(|r| r.first), Some(0));
///
/// view.set_scroll(9160.0).unwrap();
/// view.update().unwrap();
/// assert_eq!(view.visible_range().map(|r| r.last), Some(99));
/// ```
pub struct RecyclingView<M, W, U = ()> {
    style: M,
    bounds: Rect,
    scroll: f64,
    item_count: usize,
    range: Option<VisibleRange>,
    pool: SlotPool<W, U>,
    binder: Option<Box<dyn Bind<W, U>>>,
}

/// A vertical or horizontal list.
pub type ListView<W, U = ()> = RecyclingView<ListStyle, W, U>;

/// A grid of `span` items per line.
pub type GridView<W, U = ()> = RecyclingView<GridStyle, W, U>;

impl<M: core::fmt::Debug, W, U> core::fmt::Debug for RecyclingView<M, W, U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecyclingView")
            .field("style", &self.style)
            .field("bounds", &self.bounds)
            .field("scroll", &self.scroll)
            .field("item_count", &self.item_count)
            .field("range", &self.range)
            .field("capacity", &self.pool.capacity())
            .field("visible_count", &self.pool.visible_count())
            .field("has_binder", &self.binder.is_some())
            .finish_non_exhaustive()
    }
}

impl<M: WindowModel, W, U: Default> RecyclingView<M, W, U> {
    /// Create a view over `item_count` items with `capacity` slots reserved.
    ///
    /// Bounds start empty, so nothing is visible until
    /// [`set_bounds`](Self::set_bounds) is called.
    pub fn new(style: M, item_count: usize, capacity: usize) -> Result<Self, RecycleError> {
        style.validate()?;
        let mut view = Self {
            style,
            bounds: Rect::ZERO,
            scroll: 0.0,
            item_count,
            range: None,
            pool: SlotPool::new(),
            binder: None,
        };
        if capacity > 0 {
            view.reserve(capacity)?;
        }
        Ok(view)
    }

    /// Grow the slot pool to at least `capacity` slots.
    ///
    /// Always clears the current window: every bound slot is unbound and
    /// [`visible_range`](Self::visible_range) becomes `None` until the next
    /// [`update`](Self::update).
    pub fn reserve(&mut self, capacity: usize) -> Result<(), RecycleError> {
        self.pool.reserve(capacity)?;
        self.reset_window(0);
        Ok(())
    }
}

impl<M: WindowModel, W, U> RecyclingView<M, W, U> {
    /// Current style.
    #[must_use]
    pub fn style(&self) -> &M {
        &self.style
    }

    /// Replace the style and re-clamp the scroll offset.
    pub fn set_style(&mut self, style: M) -> Result<(), RecycleError> {
        style.validate()?;
        self.scroll = clamp_scroll(&style, self.item_count, self.bounds, self.scroll)?;
        self.style = style;
        Ok(())
    }

    /// Number of items.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Replace the item count and re-clamp the scroll offset.
    pub fn set_item_count(&mut self, item_count: usize) -> Result<(), RecycleError> {
        self.scroll = clamp_scroll(&self.style, item_count, self.bounds, self.scroll)?;
        self.item_count = item_count;
        Ok(())
    }

    /// Bounds of the view.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Move or resize the view and re-clamp the scroll offset.
    pub fn set_bounds(&mut self, bounds: Rect) -> Result<(), RecycleError> {
        validate_rect(bounds)?;
        self.scroll = clamp_scroll(&self.style, self.item_count, bounds, self.scroll)?;
        self.bounds = bounds;
        Ok(())
    }

    /// Scroll axis of the style.
    #[must_use]
    pub fn axis(&self) -> ScrollAxis {
        self.style.axis()
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    /// Set the scroll offset, clamped to the scrollable range.
    pub fn set_scroll(&mut self, offset: f64) -> Result<(), RecycleError> {
        if !offset.is_finite() {
            return Err(RecycleError::NonFinite("scroll offset"));
        }
        self.scroll = clamp_scroll(&self.style, self.item_count, self.bounds, offset)?;
        Ok(())
    }

    /// Scroll by `delta`, clamped to the scrollable range.
    pub fn scroll_by(&mut self, delta: f64) -> Result<(), RecycleError> {
        if !delta.is_finite() {
            return Err(RecycleError::NonFinite("scroll delta"));
        }
        self.set_scroll(self.scroll + delta)
    }

    /// Extent of the viewport along the scroll axis.
    #[must_use]
    pub fn viewport_extent(&self) -> f64 {
        self.axis().main(self.bounds.size())
    }

    /// Total content extent along the scroll axis, including padding.
    pub fn content_extent(&self) -> Result<f64, RecycleError> {
        self.style.strip(self.item_count).content_extent()
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> Result<f64, RecycleError> {
        max_scroll(&self.style, self.item_count, self.bounds)
    }

    /// Full content size: content extent along the scroll axis and
    /// [`WindowModel::cross_extent`] across it.
    pub fn content_size(&self) -> Result<Size, RecycleError> {
        let main = self.content_extent()?;
        let cross = self.style.cross_extent();
        Ok(match self.axis() {
            ScrollAxis::Vertical => Size::new(cross, main),
            ScrollAxis::Horizontal => Size::new(main, cross),
        })
    }

    /// Items that the next [`update`](Self::update) would realize.
    pub fn compute_range(&self) -> Result<Option<VisibleRange>, RecycleError> {
        let scroll = clamp_scroll(&self.style, self.item_count, self.bounds, self.scroll)?;
        let lines = self.style.strip(self.item_count).visible_range(
            scroll,
            self.viewport_extent(),
            self.style.overscan(),
        )?;
        Ok(lines.and_then(|lines| self.style.items_on_lines(lines, self.item_count)))
    }

    /// Number of slots the next [`update`](Self::update) needs.
    pub fn required_slots(&self) -> Result<usize, RecycleError> {
        Ok(self.compute_range()?.map_or(0, |r| r.len()))
    }

    /// Slots that let [`update`](Self::update) succeed at any scroll offset
    /// with the current style, bounds, and item count.
    ///
    /// [`required_slots`](Self::required_slots) at offset zero undercounts,
    /// since the window there has no leading overscan or partial line.
    pub fn max_required_slots(&self) -> Result<usize, RecycleError> {
        let lines = self
            .style
            .strip(self.item_count)
            .max_visible(self.viewport_extent(), self.style.overscan())?;
        let Some(last) = lines.checked_sub(1) else {
            return Ok(0);
        };
        Ok(self
            .style
            .items_on_lines(VisibleRange::new(0, last), self.item_count)
            .map_or(0, |r| r.len()))
    }

    /// Items realized by the last successful [`update`](Self::update).
    #[must_use]
    pub const fn visible_range(&self) -> Option<VisibleRange> {
        self.range
    }

    /// Number of realized items.
    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.pool.visible_count()
    }

    /// Render nodes of the realized items, in item order.
    pub fn visible_nodes(&self) -> impl ExactSizeIterator<Item = &RenderNode<W>> + '_ {
        self.pool.visible_nodes()
    }

    /// Slots holding the realized items, in item order.
    #[must_use]
    pub fn visible_slots(&self) -> &[Slot<W, U>] {
        self.pool.visible_slots()
    }

    /// The slot pool.
    #[must_use]
    pub const fn pool(&self) -> &SlotPool<W, U> {
        &self.pool
    }

    /// Number of reserved slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Install the bind implementation.
    pub fn set_binder(&mut self, binder: impl Bind<W, U> + 'static) {
        self.binder = Some(Box::new(binder));
    }

    /// Install a bind closure.
    pub fn set_bind_fn<F>(&mut self, bind: F)
    where
        F: FnMut(&mut Slot<W, U>, usize) -> Result<(), RecycleError> + 'static,
    {
        self.set_binder(bind);
    }

    /// Returns `true` if a binder is installed.
    #[must_use]
    pub fn has_binder(&self) -> bool {
        self.binder.is_some()
    }

    /// Bounds of item `index` at the current scroll offset.
    pub fn item_bounds(&self, index: usize) -> Result<Rect, RecycleError> {
        self.check_index(index)?;
        self.style.item_bounds(self.bounds, self.scroll, index)
    }

    /// Re-clamp the scroll offset, recompute the window, and rebind slots.
    ///
    /// Item `first + k` is bound into slot `k`. Slots past the window are
    /// unbound. Calling this twice with unchanged inputs leaves the scroll
    /// offset and window unchanged.
    ///
    /// Fails before any bind call if the pool is empty
    /// ([`RecycleError::NoSlots`]) or too small
    /// ([`RecycleError::InsufficientCapacity`]), or if no binder is installed
    /// ([`RecycleError::NoBinder`]) while items are visible. Once the window
    /// has been computed, any failure leaves it empty with every slot unbound.
    pub fn update(&mut self) -> Result<(), RecycleError> {
        self.style.validate()?;
        validate_rect(self.bounds)?;
        self.scroll = clamp_scroll(&self.style, self.item_count, self.bounds, self.scroll)?;
        let Some(range) = self.compute_range()? else {
            self.reset_window(0);
            return Ok(());
        };
        let result = self.bind_window(range);
        if result.is_err() {
            self.reset_window(0);
        }
        result
    }

    /// Returns `true` if item `index` lies entirely inside the viewport.
    #[must_use]
    pub fn is_index_fully_visible(&self, index: usize) -> bool {
        self.item_span(index).is_some_and(|(start, end)| {
            start >= self.scroll && end <= self.scroll + self.viewport_extent()
        })
    }

    /// Returns `true` if item `index` overlaps the viewport at all.
    #[must_use]
    pub fn is_index_partially_visible(&self, index: usize) -> bool {
        self.item_span(index).is_some_and(|(start, end)| {
            end > self.scroll && start < self.scroll + self.viewport_extent()
        })
    }

    /// Scrolls so that item `index` is brought into view using the given alignment.
    ///
    /// Out-of-range indices are clamped to the last item. An empty view
    /// scrolls to zero.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) -> Result<(), RecycleError> {
        let Some(last) = self.item_count.checked_sub(1) else {
            return self.set_scroll(0.0);
        };
        let Some((item_start, item_end)) = self.item_span(index.min(last)) else {
            return self.set_scroll(0.0);
        };
        let viewport = self.viewport_extent();
        let current = self.scroll;

        let offset = match align {
            ScrollAlign::Start => item_start,
            ScrollAlign::End => item_end - viewport,
            ScrollAlign::Center => (item_start + item_end - viewport) * 0.5,
            ScrollAlign::Nearest => {
                if item_start >= current && item_end <= current + viewport {
                    current
                } else if item_start < current {
                    item_start
                } else {
                    item_end - viewport
                }
            }
        };
        self.set_scroll(offset.max(0.0))
    }

    /// Unbind every slot, drop the pool and binder, and reset the item count
    /// and scroll offset to zero. Style and bounds are kept.
    pub fn release(&mut self) {
        self.reset_window(0);
        self.pool.clear();
        self.binder = None;
        self.item_count = 0;
        self.scroll = 0.0;
    }

    /// Start and end of item `index` along the scroll axis, in content space.
    fn item_span(&self, index: usize) -> Option<(f64, f64)> {
        if index >= self.item_count {
            return None;
        }
        let strip = self.style.strip(self.item_count);
        let start = strip.offset_of(self.style.line_of(index));
        Some((start, start + strip.extent))
    }

    fn check_index(&self, index: usize) -> Result<(), RecycleError> {
        if index < self.item_count {
            Ok(())
        } else {
            Err(RecycleError::IndexOutOfBounds {
                index,
                count: self.item_count,
            })
        }
    }

    fn bind_window(&mut self, range: VisibleRange) -> Result<(), RecycleError> {
        self.range = None;
        self.pool.set_visible(0);

        let required = range.len();
        let capacity = self.pool.capacity();
        if capacity == 0 {
            return Err(RecycleError::NoSlots);
        }
        if capacity < required {
            return Err(RecycleError::InsufficientCapacity { required, capacity });
        }
        let Some(binder) = self.binder.as_deref_mut() else {
            return Err(RecycleError::NoBinder);
        };

        for (k, (slot, index)) in self
            .pool
            .slots_mut()
            .iter_mut()
            .zip(range.indices())
            .enumerate()
        {
            binder.bind(slot, index)?;
            slot.index = Some(index);
            if slot.node.widget.is_none() {
                return Err(RecycleError::Unbound { slot: k });
            }
            let bounds = self.style.item_bounds(self.bounds, self.scroll, index)?;
            slot.node.set_bounds(bounds)?;
        }

        self.pool.unbind_from(required, Some(binder));
        self.pool.set_visible(required);
        self.range = Some(range);
        Ok(())
    }

    fn reset_window(&mut self, start: usize) {
        self.range = None;
        self.pool.set_visible(0);
        self.pool.unbind_from(start, self.binder.as_deref_mut());
    }
}

impl<W, U> GridView<W, U> {
    /// Number of lines holding the items.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.style.line_count(self.item_count)
    }

    /// Line and in-line position of item `index`.
    pub fn cell_position(&self, index: usize) -> Result<GridCell, RecycleError> {
        self.check_index(index)?;
        Ok(self.style.cell_position(index))
    }
}

fn max_scroll<M: WindowModel>(style: &M, item_count: usize, bounds: Rect) -> Result<f64, RecycleError> {
    let content = style.strip(item_count).content_extent()?;
    let viewport = non_negative(style.axis().main(bounds.size()), "viewport")?;
    Ok((content - viewport).max(0.0))
}

fn clamp_scroll<M: WindowModel>(
    style: &M,
    item_count: usize,
    bounds: Rect,
    offset: f64,
) -> Result<f64, RecycleError> {
    Ok(offset.max(0.0).min(max_scroll(style, item_count, bounds)?))
}
