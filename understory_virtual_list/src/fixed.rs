// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-stride strip math along the scroll axis.

use crate::error::{RecycleError, non_negative};
use crate::model::VisibleRange;

/// Tolerance subtracted from the trailing viewport edge so an item that ends
/// exactly at the edge is not counted as visible.
pub const EDGE_EPSILON: f64 = 1e-4;

/// A dense strip of `count` equally sized entries along one axis.
///
/// Entries are items for a list and lines for a grid. Entry `i` starts at
/// `padding_start + i * (extent + spacing)`.
///
/// ```rust
/// use understory_virtual_list::FixedStrip;
///
/// // 200 rows of 48 with 0 spacing and 8 of padding at each end.
/// let strip = FixedStrip { count: 200, extent: 48.0, spacing: 0.0, padding_start: 8.0, padding_end: 8.0 };
/// assert_eq!(strip.content_extent(), Ok(9616.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedStrip {
    /// Number of entries.
    pub count: usize,
    /// Extent of each entry.
    pub extent: f64,
    /// Gap between consecutive entries.
    pub spacing: f64,
    /// Space before the first entry.
    pub padding_start: f64,
    /// Space after the last entry.
    pub padding_end: f64,
}

impl FixedStrip {
    /// Distance between the starts of consecutive entries.
    #[must_use]
    pub fn stride(&self) -> f64 {
        self.extent + self.spacing
    }

    /// Total extent of the strip including padding.
    ///
    /// An empty strip is just its padding. A non-empty strip requires a
    /// positive entry extent.
    pub fn content_extent(&self) -> Result<f64, RecycleError> {
        non_negative(self.extent, "item extent")?;
        non_negative(self.spacing, "spacing")?;
        let padding = non_negative(self.padding_start, "leading padding")?
            + non_negative(self.padding_end, "trailing padding")?;
        if self.count == 0 {
            return Ok(padding);
        }
        if self.extent <= 0.0 {
            return Err(RecycleError::NonPositive("item extent"));
        }
        let n = self.count as f64;
        Ok(padding + self.extent * n + self.spacing * (n - 1.0))
    }

    /// Offset of entry `index` from the start of the content.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> f64 {
        self.padding_start + index as f64 * self.stride()
    }

    /// Entries intersecting `[scroll, scroll + viewport)`, widened by
    /// `overscan` entries on each side and clamped to the strip.
    ///
    /// Returns `Ok(None)` when nothing is visible: an empty strip, a
    /// non-positive viewport, or a viewport that lies entirely in the padding.
    ///
    /// ```rust
    /// use understory_virtual_list::{FixedStrip, VisibleRange};
    ///
    /// let strip = FixedStrip { count: 200, extent: 48.0, ..FixedStrip::default() };
    /// let range = strip.visible_range(0.0, 480.0, 1).unwrap();
    /// assert_eq!(range, Some(VisibleRange::new(0, 10)));
    /// ```
    pub fn visible_range(
        &self,
        scroll: f64,
        viewport: f64,
        overscan: usize,
    ) -> Result<Option<VisibleRange>, RecycleError> {
        if !scroll.is_finite() {
            return Err(RecycleError::NonFinite("scroll offset"));
        }
        if !viewport.is_finite() {
            return Err(RecycleError::NonFinite("viewport"));
        }
        if self.count == 0 || viewport <= 0.0 {
            return Ok(None);
        }
        if non_negative(self.extent, "item extent")? <= 0.0 {
            return Err(RecycleError::NonPositive("item extent"));
        }
        non_negative(self.spacing, "spacing")?;
        let padding = non_negative(self.padding_start, "leading padding")?;
        let stride = self.stride();

        if scroll + viewport <= padding {
            return Ok(None);
        }
        let start = scroll - padding;
        let first = if start <= 0.0 { 0 } else { to_index(start / stride) };

        let end = scroll + viewport - padding;
        if end <= 0.0 {
            return Ok(None);
        }
        let end = (end - EDGE_EPSILON).max(0.0);
        let last = to_index(end / stride).min(self.count - 1);
        if first >= self.count || last < first {
            return Ok(None);
        }

        Ok(Some(VisibleRange::new(
            first.saturating_sub(overscan),
            last.saturating_add(overscan).min(self.count - 1),
        )))
    }

    /// Upper bound on the length of any range
    /// [`visible_range`](Self::visible_range) returns for `viewport`,
    /// whatever the scroll offset.
    pub fn max_visible(&self, viewport: f64, overscan: usize) -> Result<usize, RecycleError> {
        if !viewport.is_finite() {
            return Err(RecycleError::NonFinite("viewport"));
        }
        self.content_extent()?;
        if self.count == 0 || viewport <= 0.0 {
            return Ok(0);
        }
        // A partial entry at each edge.
        let touched = to_index(viewport / self.stride()).saturating_add(2);
        Ok(touched
            .saturating_add(overscan.saturating_mul(2))
            .min(self.count))
    }
}

/// Truncates a non-negative finite ratio to an index.
fn to_index(ratio: f64) -> usize {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Ratio is non-negative and callers clamp the result to the strip"
    )]
    let index = ratio as usize;
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn rows(count: usize) -> FixedStrip {
        FixedStrip {
            count,
            extent: 48.0,
            spacing: 4.0,
            padding_start: 8.0,
            padding_end: 8.0,
        }
    }

    #[test]
    fn content_extent_of_empty_strip_is_padding() {
        assert_eq!(rows(0).content_extent(), Ok(16.0));
        let strip = FixedStrip {
            extent: 0.0,
            ..rows(0)
        };
        assert_eq!(strip.content_extent(), Ok(16.0));
    }

    #[test]
    fn max_visible_bounds_every_offset() {
        let strip = rows(200);
        let max = strip.max_visible(100.0, 1).unwrap();
        assert_eq!(max, 5);
        for step in 0..400 {
            let scroll = f64::from(step) * 7.5;
            if let Some(range) = strip.visible_range(scroll, 100.0, 1).unwrap() {
                assert!(range.len() <= max, "{} items at {scroll}", range.len());
            }
        }
        assert_eq!(rows(2).max_visible(100.0, 1), Ok(2));
        assert_eq!(rows(0).max_visible(100.0, 1), Ok(0));
        assert_eq!(strip.max_visible(0.0, 1), Ok(0));
    }

    #[test]
    fn content_extent_grows_with_count() {
        let mut previous = rows(0).content_extent().unwrap();
        for count in 1..64 {
            let extent = rows(count).content_extent().unwrap();
            assert!(extent > previous, "extent shrank at {count} items");
            previous = extent;
        }
    }

    #[test]
    fn content_extent_counts_spacing_between_items() {
        // 8 + 8 + 48 * 200 + 4 * 199
        assert_eq!(rows(200).content_extent(), Ok(10412.0));
    }

    #[test]
    fn content_extent_rejects_bad_metrics() {
        let zero = FixedStrip {
            extent: 0.0,
            ..rows(3)
        };
        assert_eq!(
            zero.content_extent().unwrap_err().kind(),
            ErrorKind::Range
        );
        let negative = FixedStrip {
            spacing: -1.0,
            ..rows(3)
        };
        assert_eq!(
            negative.content_extent(),
            Err(RecycleError::Negative("spacing"))
        );
    }

    #[test]
    fn viewport_inside_padding_is_empty() {
        let strip = FixedStrip {
            padding_start: 100.0,
            ..rows(10)
        };
        assert_eq!(strip.visible_range(0.0, 100.0, 2), Ok(None));
        assert_eq!(rows(10).visible_range(0.0, 0.0, 2), Ok(None));
        assert_eq!(rows(0).visible_range(0.0, 100.0, 2), Ok(None));
    }

    #[test]
    fn item_ending_at_viewport_edge_is_excluded() {
        let strip = FixedStrip {
            count: 10,
            extent: 10.0,
            ..FixedStrip::default()
        };
        assert_eq!(
            strip.visible_range(0.0, 30.0, 0),
            Ok(Some(VisibleRange::new(0, 2)))
        );
        assert_eq!(
            strip.visible_range(5.0, 30.0, 0),
            Ok(Some(VisibleRange::new(0, 3)))
        );
    }

    #[test]
    fn overscan_saturates_at_both_ends() {
        let strip = FixedStrip {
            count: 10,
            extent: 10.0,
            ..FixedStrip::default()
        };
        assert_eq!(
            strip.visible_range(0.0, 30.0, 5),
            Ok(Some(VisibleRange::new(0, 7)))
        );
        assert_eq!(
            strip.visible_range(70.0, 30.0, usize::MAX),
            Ok(Some(VisibleRange::new(0, 9)))
        );
    }

    #[test]
    fn scrolled_past_end_is_empty() {
        let strip = FixedStrip {
            count: 3,
            extent: 10.0,
            ..FixedStrip::default()
        };
        assert_eq!(strip.visible_range(100.0, 30.0, 0), Ok(None));
    }

    #[test]
    fn non_finite_scroll_is_invalid_argument() {
        let err = rows(5).visible_range(f64::NAN, 10.0, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
