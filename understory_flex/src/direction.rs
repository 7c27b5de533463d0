// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal flow direction.

use kurbo::Insets;

/// Horizontal reading order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Flow {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// Direction inputs for a layout pass.
///
/// Under [`Flow::Rtl`], rows fill from the right edge, columns stack their
/// lines from the right edge, and the left and right padding edges trade
/// places.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirectionContext {
    /// Reading order.
    pub flow: Flow,
}

impl DirectionContext {
    /// Left-to-right context.
    pub const LTR: Self = Self { flow: Flow::Ltr };
    /// Right-to-left context.
    pub const RTL: Self = Self { flow: Flow::Rtl };

    /// Creates a context with the given flow.
    #[must_use]
    pub const fn new(flow: Flow) -> Self {
        Self { flow }
    }

    /// Returns `true` under right-to-left flow.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self.flow, Flow::Rtl)
    }

    /// Resolves `padding` into `(left, right)` for this flow.
    ///
    /// ```rust
    /// use kurbo::Insets;
    /// use understory_flex::DirectionContext;
    ///
    /// let padding = Insets::new(10.0, 0.0, 20.0, 0.0);
    /// assert_eq!(DirectionContext::LTR.resolve_horizontal_padding(padding), (10.0, 20.0));
    /// assert_eq!(DirectionContext::RTL.resolve_horizontal_padding(padding), (20.0, 10.0));
    /// ```
    #[must_use]
    pub fn resolve_horizontal_padding(self, padding: Insets) -> (f64, f64) {
        match self.flow {
            Flow::Ltr => (padding.x0, padding.x1),
            Flow::Rtl => (padding.x1, padding.x0),
        }
    }
}
