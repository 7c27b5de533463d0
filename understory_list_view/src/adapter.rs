// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List and grid widgets backed by a [`RecyclingView`].

use kurbo::{Rect, Size};
use tracing::{debug, trace};
use understory_flex::MeasureSpec;
use understory_virtual_list::{GridStyle, ListStyle, RecyclingView, ScrollAxis, WindowModel};

use crate::{
    Color, InputEvent, Painter, SemanticFlags, SemanticRole, Semantics, Widget, WidgetError,
    WidgetFlags,
};

/// A widget that scrolls a recycled window of items.
///
/// The adapter owns the [`RecyclingView`] and translates the [`Widget`]
/// contract onto it: layout sets the view bounds, scroll input moves the
/// offset, and destroy releases the slot pool. Item widgets are drawn by the
/// host from [`RecyclingView::visible_nodes`] after [`update`](Self::update).
pub struct RecyclerWidget<M, W, U = ()> {
    view: RecyclingView<M, W, U>,
    background: Color,
    flags: WidgetFlags,
}

/// A vertical or horizontal list widget.
pub type ListWidget<W, U = ()> = RecyclerWidget<ListStyle, W, U>;

/// A grid widget.
pub type GridWidget<W, U = ()> = RecyclerWidget<GridStyle, W, U>;

impl<M: core::fmt::Debug, W, U> core::fmt::Debug for RecyclerWidget<M, W, U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecyclerWidget")
            .field("view", &self.view)
            .field("background", &self.background)
            .field("flags", &self.flags)
            .finish()
    }
}

impl<M: WindowModel, W, U: Default> RecyclerWidget<M, W, U> {
    /// Creates a widget over a fresh view with `capacity` slots.
    pub fn new(style: M, item_count: usize, capacity: usize) -> Result<Self, WidgetError> {
        Ok(Self::from_view(RecyclingView::new(style, item_count, capacity)?))
    }
}

impl<M: WindowModel, W, U> RecyclerWidget<M, W, U> {
    /// Wraps an existing view. The background is transparent.
    #[must_use]
    pub const fn from_view(view: RecyclingView<M, W, U>) -> Self {
        Self {
            view,
            background: Color::TRANSPARENT,
            flags: WidgetFlags::empty(),
        }
    }

    /// The underlying view.
    #[must_use]
    pub const fn view(&self) -> &RecyclingView<M, W, U> {
        &self.view
    }

    /// The underlying view, mutably.
    pub const fn view_mut(&mut self) -> &mut RecyclingView<M, W, U> {
        &mut self.view
    }

    /// Background fill color.
    #[must_use]
    pub const fn background(&self) -> Color {
        self.background
    }

    /// Set the background fill color. Every channel must lie in `[0, 1]`.
    pub fn set_background(&mut self, color: Color) -> Result<(), WidgetError> {
        self.background = color.validate()?;
        Ok(())
    }

    /// Replace the widget flags.
    pub const fn set_flags(&mut self, flags: WidgetFlags) {
        self.flags = flags;
    }

    /// Rebind the visible window; see [`RecyclingView::update`].
    pub fn update(&mut self) -> Result<(), WidgetError> {
        self.view.update()?;
        trace!(
            range = ?self.view.visible_range(),
            scroll = self.view.scroll_offset(),
            "recycler update"
        );
        Ok(())
    }
}

impl<M: WindowModel, W, U> Widget for RecyclerWidget<M, W, U> {
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Result<Size, WidgetError> {
        let width = width.validate()?;
        let height = height.validate()?;
        let content = self.view.content_size()?;
        Ok(Size::new(width.apply(content.width)?, height.apply(content.height)?))
    }

    fn layout(&mut self, bounds: Rect) -> Result<(), WidgetError> {
        self.view.set_bounds(bounds)?;
        trace!(?bounds, scroll = self.view.scroll_offset(), "recycler layout");
        Ok(())
    }

    fn paint(&self, painter: &mut dyn Painter) -> Result<(), WidgetError> {
        self.view.style().validate()?;
        if self.background.a <= 0.0 {
            return Ok(());
        }
        painter.fill_rect(self.view.bounds(), self.background)
    }

    fn event(&mut self, event: &InputEvent) -> Result<bool, WidgetError> {
        if self.flags.contains(WidgetFlags::DISABLED) {
            return Ok(false);
        }
        let InputEvent::PointerScroll(pointer) = event else {
            return Ok(false);
        };
        let delta = match self.view.axis() {
            ScrollAxis::Vertical => pointer.scroll_delta.y,
            ScrollAxis::Horizontal => pointer.scroll_delta.x,
        };
        if delta == 0.0 {
            return Ok(false);
        }
        self.view.scroll_by(delta)?;
        debug!(delta, offset = self.view.scroll_offset(), "recycler scrolled");
        Ok(true)
    }

    fn semantics(&self) -> Semantics {
        let mut flags = SemanticFlags::empty();
        if self.flags.contains(WidgetFlags::DISABLED) {
            flags |= SemanticFlags::DISABLED;
        }
        Semantics {
            role: SemanticRole::None,
            flags,
        }
    }

    fn destroy(&mut self) {
        self.view.release();
    }

    fn flags(&self) -> WidgetFlags {
        self.flags
    }
}
