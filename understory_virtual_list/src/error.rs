// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for the recycling engine.

pub use understory_flex::{CallbackError, ErrorKind};

/// Errors reported by list/grid metrics, slot pools, and views.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RecycleError {
    /// A scalar argument was not finite.
    #[error("{0} must be finite")]
    NonFinite(&'static str),
    /// A style or geometry field was negative.
    #[error("{0} must be non-negative")]
    Negative(&'static str),
    /// A field that must be strictly positive was zero or negative.
    #[error("{0} must be positive")]
    NonPositive(&'static str),
    /// An item index is past the end of the item count.
    #[error("index {index} is out of bounds for {count} items")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Item count at the time of the request.
        count: usize,
    },
    /// The slot pool holds fewer slots than the visible range needs.
    #[error("slot pool holds {capacity} slots but {required} are visible")]
    InsufficientCapacity {
        /// Slots required by the visible range.
        required: usize,
        /// Slots currently reserved.
        capacity: usize,
    },
    /// The slot pool is empty while items are visible.
    #[error("no slots are reserved")]
    NoSlots,
    /// `update` ran with no bind callback installed.
    #[error("no bind callback is installed")]
    NoBinder,
    /// The bind callback returned without providing a widget.
    #[error("bind left slot {slot} without a widget")]
    Unbound {
        /// Slot position in the pool.
        slot: usize,
    },
    /// The bind callback failed for a host-specific reason.
    #[error("bind failed: {0}")]
    Bind(#[source] CallbackError),
    /// A slot capacity computation overflowed or could not be allocated.
    #[error("slot capacity {0} cannot be allocated")]
    CapacityOverflow(usize),
}

impl RecycleError {
    /// Returns the coarse category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NonFinite(_) => ErrorKind::InvalidArgument,
            Self::Negative(_)
            | Self::NonPositive(_)
            | Self::IndexOutOfBounds { .. }
            | Self::InsufficientCapacity { .. } => ErrorKind::Range,
            Self::NoSlots | Self::NoBinder | Self::Unbound { .. } | Self::Bind(_) => {
                ErrorKind::State
            }
            Self::CapacityOverflow(_) => ErrorKind::Overflow,
        }
    }
}

/// Fails with [`RecycleError::Negative`] unless `value` is finite and `>= 0`.
pub(crate) fn non_negative(value: f64, what: &'static str) -> Result<f64, RecycleError> {
    if !value.is_finite() {
        Err(RecycleError::NonFinite(what))
    } else if value < 0.0 {
        Err(RecycleError::Negative(what))
    } else {
        Ok(value)
    }
}
