// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-node layout style and alignment policies.

use kurbo::Insets;

use crate::error::{LayoutError, is_non_negative};

/// The main axis along which a container places its children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlexDirection {
    /// Children flow horizontally.
    #[default]
    Row,
    /// Children flow vertically.
    Column,
}

/// Whether children may break onto additional lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlexWrap {
    /// All children share one line.
    #[default]
    NoWrap,
    /// Children start a new line when the next one would exceed the main extent.
    Wrap,
}

/// Distribution of leftover main-axis space within a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MainAxisAlignment {
    /// Pack children at the start of the line.
    #[default]
    Start,
    /// Center children in the line.
    Center,
    /// Pack children at the end of the line.
    End,
    /// First and last child touch the edges. Leftover space goes between children.
    SpaceBetween,
    /// Each child gets equal space on both sides.
    SpaceAround,
    /// Gaps before, between, and after children are all equal.
    SpaceEvenly,
}

impl MainAxisAlignment {
    /// Splits `remaining` main-axis space over `count` children.
    ///
    /// Returns `(leading, gap)`: the offset of the first child from the start
    /// of the line, and the extra space inserted after each child.
    ///
    /// ```rust
    /// use understory_flex::MainAxisAlignment;
    ///
    /// // Three 50-wide children in a 200-wide row leave 50 to distribute.
    /// assert_eq!(MainAxisAlignment::SpaceBetween.distribute(50.0, 3), (0.0, 25.0));
    /// assert_eq!(MainAxisAlignment::Center.distribute(50.0, 3), (25.0, 0.0));
    /// ```
    #[must_use]
    pub fn distribute(self, remaining: f64, count: usize) -> (f64, f64) {
        let n = count as f64;
        match self {
            Self::Start => (0.0, 0.0),
            Self::Center => (remaining * 0.5, 0.0),
            Self::End => (remaining, 0.0),
            Self::SpaceBetween if count > 1 => (0.0, remaining / (n - 1.0)),
            Self::SpaceAround if count > 0 => {
                let gap = remaining / n;
                (gap * 0.5, gap)
            }
            Self::SpaceEvenly => {
                let gap = remaining / (n + 1.0);
                (gap, gap)
            }
            Self::SpaceBetween | Self::SpaceAround => (0.0, 0.0),
        }
    }
}

/// Placement of a child within its line on the cross axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CrossAxisAlignment {
    /// Align to the start of the line.
    #[default]
    Start,
    /// Center within the line.
    Center,
    /// Align to the end of the line.
    End,
    /// Grow the child to the line's cross extent.
    Stretch,
}

impl CrossAxisAlignment {
    /// Returns `(offset, extent)` for a child of cross extent `child` placed in
    /// a line of cross extent `line`.
    #[must_use]
    pub fn place(self, line: f64, child: f64) -> (f64, f64) {
        match self {
            Self::Start => (0.0, child),
            Self::Center => ((line - child) * 0.5, child),
            Self::End => (line - child, child),
            Self::Stretch => (0.0, line),
        }
    }
}

/// Layout inputs for one node.
///
/// `width` and `height` are explicit sizes. `None` means the size comes from
/// content (or from the measure callback for leaves).
///
/// ```rust
/// use kurbo::Insets;
/// use understory_flex::{FlexDirection, LayoutStyle, MainAxisAlignment};
///
/// let style = LayoutStyle {
///     direction: FlexDirection::Column,
///     align_main: MainAxisAlignment::Center,
///     padding: Insets::uniform(8.0),
///     width: Some(120.0),
///     ..LayoutStyle::default()
/// };
/// assert!(style.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutStyle {
    /// Main axis.
    pub direction: FlexDirection,
    /// Line breaking policy.
    pub wrap: FlexWrap,
    /// Main-axis distribution within each line.
    pub align_main: MainAxisAlignment,
    /// Cross-axis placement within each line.
    pub align_cross: CrossAxisAlignment,
    /// Padding as physical edges: `x0` left, `y0` top, `x1` right, `y1` bottom.
    pub padding: Insets,
    /// Explicit width.
    pub width: Option<f64>,
    /// Explicit height.
    pub height: Option<f64>,
}

impl LayoutStyle {
    /// Checks that padding and explicit sizes are finite and non-negative.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let p = self.padding;
        if ![p.x0, p.y0, p.x1, p.y1].into_iter().all(is_non_negative) {
            return Err(LayoutError::NegativePadding);
        }
        if ![self.width, self.height]
            .into_iter()
            .flatten()
            .all(is_non_negative)
        {
            return Err(LayoutError::NegativeSize);
        }
        Ok(())
    }

    /// Total vertical padding.
    #[must_use]
    pub fn vertical_padding(&self) -> f64 {
        self.padding.y0 + self.padding.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribute_space_around_and_evenly() {
        assert_eq!(MainAxisAlignment::SpaceAround.distribute(60.0, 3), (10.0, 20.0));
        assert_eq!(MainAxisAlignment::SpaceEvenly.distribute(60.0, 2), (20.0, 20.0));
        assert_eq!(MainAxisAlignment::End.distribute(60.0, 2), (60.0, 0.0));
    }

    #[test]
    fn space_between_single_child_has_no_gap() {
        assert_eq!(MainAxisAlignment::SpaceBetween.distribute(40.0, 1), (0.0, 0.0));
        assert_eq!(MainAxisAlignment::SpaceAround.distribute(40.0, 0), (0.0, 0.0));
    }

    #[test]
    fn cross_placement() {
        assert_eq!(CrossAxisAlignment::Center.place(30.0, 10.0), (10.0, 10.0));
        assert_eq!(CrossAxisAlignment::End.place(30.0, 10.0), (20.0, 10.0));
        assert_eq!(CrossAxisAlignment::Stretch.place(30.0, 10.0), (0.0, 30.0));
    }

    #[test]
    fn validate_rejects_negative_inputs() {
        let style = LayoutStyle {
            padding: Insets::new(0.0, -1.0, 0.0, 0.0),
            ..LayoutStyle::default()
        };
        assert_eq!(style.validate(), Err(LayoutError::NegativePadding));

        let style = LayoutStyle {
            height: Some(-5.0),
            ..LayoutStyle::default()
        };
        assert_eq!(style.validate(), Err(LayoutError::NegativeSize));

        let style = LayoutStyle {
            width: Some(0.0),
            ..LayoutStyle::default()
        };
        assert!(style.validate().is_ok());
    }
}
