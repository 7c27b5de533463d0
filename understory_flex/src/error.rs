// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for layout computation.

use alloc::sync::Arc;
use core::error::Error;
use core::fmt;

use crate::tree::NodeId;

/// Coarse classification shared by the error types of the Understory layout
/// and recycling crates.
///
/// Hosts that only need to branch on the category of failure (for example to
/// decide whether to retry after fixing inputs) can match on this instead of
/// individual variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A handle, reference, or argument was malformed or dangling.
    InvalidArgument,
    /// A numeric input was outside its permitted range.
    Range,
    /// The operation was called in a state that cannot satisfy it.
    State,
    /// A size computation or allocation overflowed.
    Overflow,
}

/// Errors produced while editing a [`LayoutTree`](crate::LayoutTree) or
/// computing a layout.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// The node handle does not refer to a live node.
    #[error("node {0:?} is not live")]
    StaleNode(NodeId),
    /// A node was given itself as a child.
    #[error("node {0:?} cannot be its own child")]
    SelfChild(NodeId),
    /// A node is reachable from its own subtree.
    #[error("node {0:?} participates in a cycle")]
    Cycle(NodeId),
    /// A padding edge is negative or not a number.
    #[error("padding must be non-negative")]
    NegativePadding,
    /// An explicit width or height is negative or not a number.
    #[error("explicit size must be non-negative")]
    NegativeSize,
    /// A measure spec carries a negative or non-numeric size.
    #[error("measure spec size must be non-negative, got {0}")]
    NegativeSpec(f64),
    /// A measure callback reported a negative or non-numeric size.
    #[error("measured size must be non-negative, got {width}x{height}")]
    NegativeMeasurement {
        /// Reported width.
        width: f64,
        /// Reported height.
        height: f64,
    },
    /// A measure callback failed for a host-specific reason.
    #[error("measure callback failed: {0}")]
    Measure(#[source] CallbackError),
}

impl LayoutError {
    /// Returns the coarse category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::StaleNode(_) | Self::SelfChild(_) | Self::Cycle(_) => ErrorKind::InvalidArgument,
            Self::NegativePadding
            | Self::NegativeSize
            | Self::NegativeSpec(_)
            | Self::NegativeMeasurement { .. } => ErrorKind::Range,
            Self::Measure(_) => ErrorKind::State,
        }
    }
}

/// A host error raised from inside a measure or bind callback.
///
/// The host's error sits behind a shared pointer so the enclosing error stays
/// `Clone`. It displays as the host error, forwards its source, and can be
/// recovered with [`get_ref`](Self::get_ref) and `downcast_ref`. Two values
/// compare equal only if they share the same underlying error.
#[derive(Clone)]
pub struct CallbackError(Arc<dyn Error + Send + Sync>);

impl CallbackError {
    /// Wraps a host error.
    pub fn new(err: impl Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }

    /// Wraps a plain message.
    pub fn msg(message: &'static str) -> Self {
        Self::new(Message(message))
    }

    /// The wrapped host error.
    #[must_use]
    pub fn get_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.0
    }
}

impl fmt::Debug for CallbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CallbackError").field(&self.0).finish()
    }
}

impl fmt::Display for CallbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl PartialEq for CallbackError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Error for CallbackError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

#[derive(Debug)]
struct Message(&'static str);

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Error for Message {}

/// Returns `true` for finite values that are `>= 0`.
pub(crate) fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
