// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for widgets.

use understory_flex::{ErrorKind, LayoutError};
use understory_virtual_list::RecycleError;

/// Errors reported through the [`Widget`](crate::Widget) contract.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum WidgetError {
    /// A measurement constraint was invalid.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// The recycling engine rejected an operation.
    #[error(transparent)]
    Recycle(#[from] RecycleError),
    /// A color channel was outside `[0, 1]`.
    #[error("color channel {0} must be within [0, 1]")]
    ColorOutOfRange(&'static str),
    /// The painter could not draw.
    #[error("paint failed: {0}")]
    Paint(&'static str),
}

impl WidgetError {
    /// Returns the coarse category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Layout(err) => err.kind(),
            Self::Recycle(err) => err.kind(),
            Self::ColorOutOfRange(_) => ErrorKind::Range,
            Self::Paint(_) => ErrorKind::State,
        }
    }
}
