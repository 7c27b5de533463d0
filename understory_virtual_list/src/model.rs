// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared vocabulary for windowed views: scroll axis, visible ranges, and the
//! [`WindowModel`] trait implemented by list and grid styles.

use core::ops::RangeInclusive;

use kurbo::{Rect, Size};

use crate::error::RecycleError;
use crate::fixed::FixedStrip;

/// Axis along which a view scrolls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollAxis {
    /// Content scrolls up and down.
    #[default]
    Vertical,
    /// Content scrolls left and right.
    Horizontal,
}

impl ScrollAxis {
    /// Extent of `size` along this axis.
    #[must_use]
    pub fn main(self, size: Size) -> f64 {
        match self {
            Self::Vertical => size.height,
            Self::Horizontal => size.width,
        }
    }
}

/// A non-empty, inclusive range of item indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VisibleRange {
    /// First index in the range.
    pub first: usize,
    /// Last index in the range, inclusive.
    pub last: usize,
}

impl VisibleRange {
    /// Creates a range covering `first..=last`.
    #[must_use]
    pub const fn new(first: usize, last: usize) -> Self {
        debug_assert!(first <= last, "VisibleRange requires first <= last");
        Self { first, last }
    }

    /// Number of indices in the range.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.last - self.first + 1
    }

    /// Always `false`; present for symmetry with [`len`](Self::len).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if `index` lies within the range.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.first <= index && index <= self.last
    }

    /// The range as a standard inclusive range.
    #[must_use]
    pub const fn indices(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }
}

/// Item geometry for a windowed view over fixed-size items.
///
/// [`ListStyle`](crate::ListStyle) and [`GridStyle`](crate::GridStyle)
/// implement this. A view maps items onto *lines* along the scroll axis: one
/// item per line for a list, `span` items per line for a grid. Scrolling,
/// content extent, and visibility are all computed over lines.
pub trait WindowModel {
    /// Checks the style fields.
    fn validate(&self) -> Result<(), RecycleError>;

    /// Scroll axis.
    fn axis(&self) -> ScrollAxis;

    /// Extra lines realized before and after the visible window.
    fn overscan(&self) -> usize;

    /// The strip of lines along the scroll axis for `count` items.
    fn strip(&self, count: usize) -> FixedStrip;

    /// Line holding item `index`.
    fn line_of(&self, index: usize) -> usize;

    /// Items on lines `lines`, clamped to `count`.
    fn items_on_lines(&self, lines: VisibleRange, count: usize) -> Option<VisibleRange>;

    /// Bounds of item `index` inside a view at `bounds` scrolled to `scroll`.
    ///
    /// `index` has already been checked against the item count.
    fn item_bounds(&self, bounds: Rect, scroll: f64, index: usize) -> Result<Rect, RecycleError>;

    /// Extent of the content across the scroll axis, including padding.
    fn cross_extent(&self) -> f64;
}
