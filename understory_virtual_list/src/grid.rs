// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid geometry: fixed-size cells packed `span` to a line.
//!
//! The scroll axis runs over *lines* while items are indexed as a flat
//! sequence. With vertical scrolling a line is a row and `span` is the column
//! count; with horizontal scrolling a line is a column and `span` is the row
//! count.

use kurbo::{Insets, Rect};

use crate::error::{RecycleError, non_negative};
use crate::fixed::FixedStrip;
use crate::list::validate_padding;
use crate::model::{ScrollAxis, VisibleRange, WindowModel};

/// Style of a [`GridView`](crate::GridView).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStyle {
    /// Scroll axis.
    pub scroll_axis: ScrollAxis,
    /// Items per line. Must be at least 1.
    pub span: usize,
    /// Padding around the content: `x0` left, `y0` top, `x1` right, `y1` bottom.
    pub padding: Insets,
    /// Horizontal gap between cells.
    pub spacing_x: f64,
    /// Vertical gap between cells.
    pub spacing_y: f64,
    /// Cell width.
    pub item_width: f64,
    /// Cell height.
    pub item_height: f64,
    /// Extra lines realized on each side of the visible window.
    pub overscan: usize,
}

impl GridStyle {
    /// Default items per line.
    pub const DEFAULT_SPAN: usize = 2;
    /// Default cell width and height.
    pub const DEFAULT_ITEM_SIZE: f64 = 64.0;
    /// Default overscan, in lines.
    pub const DEFAULT_OVERSCAN: usize = 1;

    /// Number of lines needed for `count` items.
    #[must_use]
    pub fn line_count(&self, count: usize) -> usize {
        count.div_ceil(self.span.max(1))
    }

    /// Line and in-line position of item `index`.
    ///
    /// ```rust
    /// use understory_virtual_list::{GridCell, GridStyle};
    ///
    /// let style = GridStyle { span: 4, ..GridStyle::default() };
    /// assert_eq!(style.line_count(10), 3);
    /// assert_eq!(style.cell_position(9), GridCell { line: 2, cell: 1 });
    /// ```
    #[must_use]
    pub fn cell_position(&self, index: usize) -> GridCell {
        let span = self.span.max(1);
        GridCell {
            line: index / span,
            cell: index % span,
        }
    }

    /// `(item, spacing)` along the scroll axis.
    fn main_metrics(&self) -> (f64, f64) {
        match self.scroll_axis {
            ScrollAxis::Vertical => (self.item_height, self.spacing_y),
            ScrollAxis::Horizontal => (self.item_width, self.spacing_x),
        }
    }
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            scroll_axis: ScrollAxis::Vertical,
            span: Self::DEFAULT_SPAN,
            padding: Insets::ZERO,
            spacing_x: 0.0,
            spacing_y: 0.0,
            item_width: Self::DEFAULT_ITEM_SIZE,
            item_height: Self::DEFAULT_ITEM_SIZE,
            overscan: Self::DEFAULT_OVERSCAN,
        }
    }
}

/// Position of an item within a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Line along the scroll axis (row for vertical scrolling).
    pub line: usize,
    /// Position within the line (column for vertical scrolling).
    pub cell: usize,
}

impl WindowModel for GridStyle {
    fn validate(&self) -> Result<(), RecycleError> {
        if self.span == 0 {
            return Err(RecycleError::NonPositive("span"));
        }
        non_negative(self.spacing_x, "horizontal spacing")?;
        non_negative(self.spacing_y, "vertical spacing")?;
        non_negative(self.item_width, "item width")?;
        non_negative(self.item_height, "item height")?;
        validate_padding(self.padding)
    }

    fn axis(&self) -> ScrollAxis {
        self.scroll_axis
    }

    fn overscan(&self) -> usize {
        self.overscan
    }

    fn strip(&self, count: usize) -> FixedStrip {
        let (extent, spacing) = self.main_metrics();
        let p = self.padding;
        let (padding_start, padding_end) = match self.scroll_axis {
            ScrollAxis::Vertical => (p.y0, p.y1),
            ScrollAxis::Horizontal => (p.x0, p.x1),
        };
        FixedStrip {
            count: self.line_count(count),
            extent,
            spacing,
            padding_start,
            padding_end,
        }
    }

    fn line_of(&self, index: usize) -> usize {
        self.cell_position(index).line
    }

    fn items_on_lines(&self, lines: VisibleRange, count: usize) -> Option<VisibleRange> {
        let span = self.span.max(1);
        let first = lines.first.checked_mul(span)?;
        let last = lines
            .last
            .saturating_add(1)
            .saturating_mul(span)
            .saturating_sub(1)
            .min(count.checked_sub(1)?);
        (first <= last).then(|| VisibleRange::new(first, last))
    }

    fn item_bounds(&self, bounds: Rect, scroll: f64, index: usize) -> Result<Rect, RecycleError> {
        if self.item_width <= 0.0 {
            return Err(RecycleError::NonPositive("item width"));
        }
        if self.item_height <= 0.0 {
            return Err(RecycleError::NonPositive("item height"));
        }
        let GridCell { line, cell } = self.cell_position(index);
        let (row, col, scroll_x, scroll_y) = match self.scroll_axis {
            ScrollAxis::Vertical => (line, cell, 0.0, scroll),
            ScrollAxis::Horizontal => (cell, line, scroll, 0.0),
        };
        let x = bounds.x0 + self.padding.x0 + col as f64 * (self.item_width + self.spacing_x)
            - scroll_x;
        let y = bounds.y0 + self.padding.y0 + row as f64 * (self.item_height + self.spacing_y)
            - scroll_y;
        Ok(Rect::new(x, y, x + self.item_width, y + self.item_height))
    }

    fn cross_extent(&self) -> f64 {
        let span = self.span as f64;
        let p = self.padding;
        match self.scroll_axis {
            ScrollAxis::Vertical => {
                p.x0 + p.x1 + self.item_width * span + self.spacing_x * (span - 1.0)
            }
            ScrollAxis::Horizontal => {
                p.y0 + p.y1 + self.item_height * span + self.spacing_y * (span - 1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_grid_constants() {
        let style = GridStyle::default();
        assert_eq!(style.span, 2);
        assert_eq!((style.item_width, style.item_height), (64.0, 64.0));
        assert_eq!((style.spacing_x, style.spacing_y), (0.0, 0.0));
        assert_eq!(style.overscan, 1);
        assert!(style.validate().is_ok());
    }

    #[test]
    fn zero_span_is_rejected() {
        let style = GridStyle {
            span: 0,
            ..GridStyle::default()
        };
        assert_eq!(style.validate(), Err(RecycleError::NonPositive("span")));
    }

    #[test]
    fn lines_expand_to_items_clamped_to_count() {
        let style = GridStyle {
            span: 4,
            ..GridStyle::default()
        };
        assert_eq!(
            style.items_on_lines(VisibleRange::new(1, 2), 10),
            Some(VisibleRange::new(4, 9))
        );
        assert_eq!(
            style.items_on_lines(VisibleRange::new(0, 0), 10),
            Some(VisibleRange::new(0, 3))
        );
        assert_eq!(style.items_on_lines(VisibleRange::new(3, 3), 10), None);
    }

    #[test]
    fn vertical_grid_bounds_use_row_and_column() {
        let style = GridStyle {
            span: 4,
            padding: Insets::uniform(8.0),
            spacing_x: 4.0,
            spacing_y: 2.0,
            item_width: 20.0,
            item_height: 10.0,
            ..GridStyle::default()
        };
        let rect = style
            .item_bounds(Rect::new(0.0, 0.0, 200.0, 100.0), 3.0, 9)
            .unwrap();
        // Line 2, column 1.
        assert_eq!(rect, Rect::new(32.0, 29.0, 52.0, 39.0));
        assert_eq!(style.cross_extent(), 16.0 + 80.0 + 12.0);
    }

    #[test]
    fn horizontal_grid_transposes_lines() {
        let style = GridStyle {
            scroll_axis: ScrollAxis::Horizontal,
            span: 3,
            item_width: 10.0,
            item_height: 10.0,
            ..GridStyle::default()
        };
        let rect = style
            .item_bounds(Rect::new(0.0, 0.0, 100.0, 30.0), 5.0, 4)
            .unwrap();
        // Column 1, row 1.
        assert_eq!(rect, Rect::new(5.0, 10.0, 15.0, 20.0));
        assert_eq!(style.strip(7).count, 3);
    }

    #[test]
    fn zero_item_size_is_rejected_for_bounds() {
        let style = GridStyle {
            item_height: 0.0,
            ..GridStyle::default()
        };
        assert_eq!(
            style.item_bounds(Rect::ZERO, 0.0, 0),
            Err(RecycleError::NonPositive("item height"))
        );
    }
}
