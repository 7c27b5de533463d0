// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-dimensional list geometry.

use kurbo::{Insets, Rect};

use crate::error::{RecycleError, non_negative};
use crate::fixed::FixedStrip;
use crate::model::{ScrollAxis, VisibleRange, WindowModel};

/// Style of a [`ListView`](crate::ListView).
///
/// Items fill the view across the scroll axis (minus padding) and have a
/// fixed `item_extent` along it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListStyle {
    /// Scroll axis.
    pub orientation: ScrollAxis,
    /// Padding around the content: `x0` left, `y0` top, `x1` right, `y1` bottom.
    pub padding: Insets,
    /// Gap between consecutive items.
    pub spacing: f64,
    /// Extent of each item along the scroll axis.
    pub item_extent: f64,
    /// Extra items realized on each side of the visible window.
    pub overscan: usize,
}

impl ListStyle {
    /// Default item extent.
    pub const DEFAULT_ITEM_EXTENT: f64 = 48.0;
    /// Default overscan.
    pub const DEFAULT_OVERSCAN: usize = 1;

    /// Padding before and after the content along the scroll axis.
    fn main_padding(&self) -> (f64, f64) {
        let p = self.padding;
        match self.orientation {
            ScrollAxis::Vertical => (p.y0, p.y1),
            ScrollAxis::Horizontal => (p.x0, p.x1),
        }
    }
}

impl Default for ListStyle {
    fn default() -> Self {
        Self {
            orientation: ScrollAxis::Vertical,
            padding: Insets::ZERO,
            spacing: 0.0,
            item_extent: Self::DEFAULT_ITEM_EXTENT,
            overscan: Self::DEFAULT_OVERSCAN,
        }
    }
}

pub(crate) fn validate_padding(padding: Insets) -> Result<(), RecycleError> {
    non_negative(padding.x0, "left padding")?;
    non_negative(padding.y0, "top padding")?;
    non_negative(padding.x1, "right padding")?;
    non_negative(padding.y1, "bottom padding")?;
    Ok(())
}

impl WindowModel for ListStyle {
    fn validate(&self) -> Result<(), RecycleError> {
        non_negative(self.spacing, "spacing")?;
        non_negative(self.item_extent, "item extent")?;
        validate_padding(self.padding)
    }

    fn axis(&self) -> ScrollAxis {
        self.orientation
    }

    fn overscan(&self) -> usize {
        self.overscan
    }

    fn strip(&self, count: usize) -> FixedStrip {
        let (padding_start, padding_end) = self.main_padding();
        FixedStrip {
            count,
            extent: self.item_extent,
            spacing: self.spacing,
            padding_start,
            padding_end,
        }
    }

    fn line_of(&self, index: usize) -> usize {
        index
    }

    fn items_on_lines(&self, lines: VisibleRange, count: usize) -> Option<VisibleRange> {
        (lines.first < count).then(|| VisibleRange::new(lines.first, lines.last.min(count - 1)))
    }

    fn item_bounds(&self, bounds: Rect, scroll: f64, index: usize) -> Result<Rect, RecycleError> {
        let stride = self.item_extent + self.spacing;
        if stride <= 0.0 {
            return Err(RecycleError::NonPositive("item stride"));
        }
        let p = self.padding;
        let along = index as f64 * stride - scroll;
        let (x, y, width, height) = match self.orientation {
            ScrollAxis::Vertical => (
                bounds.x0 + p.x0,
                bounds.y0 + p.y0 + along,
                bounds.width() - p.x0 - p.x1,
                self.item_extent,
            ),
            ScrollAxis::Horizontal => (
                bounds.x0 + p.x0 + along,
                bounds.y0 + p.y0,
                self.item_extent,
                bounds.height() - p.y0 - p.y1,
            ),
        };
        if width < 0.0 || height < 0.0 {
            return Err(RecycleError::Negative("item size"));
        }
        Ok(Rect::new(x, y, x + width, y + height))
    }

    fn cross_extent(&self) -> f64 {
        let p = self.padding;
        match self.orientation {
            ScrollAxis::Vertical => p.x0 + p.x1,
            ScrollAxis::Horizontal => p.y0 + p.y1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_list_constants() {
        let style = ListStyle::default();
        assert_eq!(style.item_extent, 48.0);
        assert_eq!(style.spacing, 0.0);
        assert_eq!(style.overscan, 1);
        assert_eq!(style.orientation, ScrollAxis::Vertical);
        assert!(style.validate().is_ok());
    }

    #[test]
    fn vertical_item_bounds_fill_cross_axis() {
        let style = ListStyle {
            padding: Insets::new(16.0, 88.0, 16.0, 88.0),
            spacing: 16.0,
            item_extent: 80.0,
            ..ListStyle::default()
        };
        let bounds = Rect::new(0.0, 0.0, 360.0, 600.0);
        let rect = style.item_bounds(bounds, 100.0, 2).unwrap();
        assert_eq!(rect, Rect::new(16.0, 180.0, 344.0, 260.0));
    }

    #[test]
    fn horizontal_item_bounds_scroll_along_x() {
        let style = ListStyle {
            orientation: ScrollAxis::Horizontal,
            padding: Insets::new(4.0, 2.0, 4.0, 2.0),
            item_extent: 20.0,
            ..ListStyle::default()
        };
        let bounds = Rect::new(10.0, 10.0, 110.0, 50.0);
        let rect = style.item_bounds(bounds, 5.0, 1).unwrap();
        assert_eq!(rect, Rect::new(29.0, 12.0, 49.0, 48.0));
        assert_eq!(style.cross_extent(), 4.0);
    }

    #[test]
    fn padding_wider_than_bounds_is_range_error() {
        let style = ListStyle {
            padding: Insets::new(60.0, 0.0, 60.0, 0.0),
            ..ListStyle::default()
        };
        let err = style
            .item_bounds(Rect::new(0.0, 0.0, 100.0, 100.0), 0.0, 0)
            .unwrap_err();
        assert_eq!(err, RecycleError::Negative("item size"));
    }

    #[test]
    fn negative_padding_fails_validation() {
        let style = ListStyle {
            padding: Insets::new(0.0, 0.0, -1.0, 0.0),
            ..ListStyle::default()
        };
        assert_eq!(
            style.validate(),
            Err(RecycleError::Negative("right padding"))
        );
    }
}
