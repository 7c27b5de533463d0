// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis size constraints passed from parent to child during measurement.

use crate::error::{LayoutError, is_non_negative};

/// A constraint on one axis of a measurement.
///
/// Parents hand each child one spec per axis. The child reports a candidate
/// size, and [`MeasureSpec::apply`] folds the constraint back in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MeasureSpec {
    /// No constraint. The candidate size is used as-is.
    #[default]
    Unspecified,
    /// The axis must be exactly this size.
    Exactly(f64),
    /// The axis may be at most this size.
    AtMost(f64),
}

impl MeasureSpec {
    /// Checks that a constrained spec carries a finite, non-negative size.
    pub fn validate(self) -> Result<Self, LayoutError> {
        match self {
            Self::Unspecified => Ok(self),
            Self::Exactly(size) | Self::AtMost(size) => {
                if is_non_negative(size) {
                    Ok(self)
                } else {
                    Err(LayoutError::NegativeSpec(size))
                }
            }
        }
    }

    /// Folds this constraint into a candidate size.
    ///
    /// - `Unspecified` yields `candidate`.
    /// - `Exactly(s)` yields `s`.
    /// - `AtMost(s)` yields `min(candidate, s)`.
    ///
    /// ```rust
    /// use understory_flex::MeasureSpec;
    ///
    /// assert_eq!(MeasureSpec::Unspecified.apply(30.0), Ok(30.0));
    /// assert_eq!(MeasureSpec::Exactly(10.0).apply(30.0), Ok(10.0));
    /// assert_eq!(MeasureSpec::AtMost(20.0).apply(30.0), Ok(20.0));
    /// ```
    pub fn apply(self, candidate: f64) -> Result<f64, LayoutError> {
        Ok(match self.validate()? {
            Self::Unspecified => candidate,
            Self::Exactly(size) => size,
            Self::AtMost(size) => candidate.min(size),
        })
    }

    /// The size carried by a constrained spec.
    #[must_use]
    pub const fn size(self) -> Option<f64> {
        match self {
            Self::Unspecified => None,
            Self::Exactly(size) | Self::AtMost(size) => Some(size),
        }
    }

    /// Returns `true` for `Exactly` and `AtMost`.
    #[must_use]
    pub const fn is_constrained(self) -> bool {
        !matches!(self, Self::Unspecified)
    }
}

/// Combines an explicit style size with a parent constraint into the space
/// available on one axis.
///
/// Returns `None` when neither source limits the axis. When both do, the
/// smaller one wins.
///
/// ```rust
/// use understory_flex::{MeasureSpec, resolve_available};
///
/// assert_eq!(resolve_available(None, MeasureSpec::Unspecified), None);
/// assert_eq!(resolve_available(Some(80.0), MeasureSpec::AtMost(50.0)), Some(50.0));
/// assert_eq!(resolve_available(None, MeasureSpec::Exactly(40.0)), Some(40.0));
/// ```
#[must_use]
pub fn resolve_available(style_size: Option<f64>, spec: MeasureSpec) -> Option<f64> {
    let explicit = style_size.filter(|size| *size >= 0.0);
    match (explicit, spec.size()) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
