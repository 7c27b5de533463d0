// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_flex --heading-base-level=0

//! Understory Flex: a small flex-style layout solver.
//!
//! This crate computes sizes and positions for a tree of layout nodes using a
//! subset of the flexbox model: a main axis (row or column), optional line
//! wrapping, main-axis distribution, cross-axis alignment, padding, explicit
//! sizes, and left-to-right or right-to-left flow.
//!
//! Layout runs in two passes:
//!
//! - **Measure** walks the tree bottom-up. Each node receives a [`MeasureSpec`]
//!   per axis from its parent. Leaves consult their [`Measure`] callback;
//!   containers sum or wrap their children's sizes and add padding.
//! - **Arrange** walks top-down from the root at the origin, breaking children
//!   into the same lines the measure pass saw and assigning each child a
//!   [`Rect`](kurbo::Rect).
//!
//! ## API overview
//!
//! - [`LayoutTree`]: arena of nodes addressed by generational [`NodeId`] handles.
//! - [`LayoutStyle`]: per-node [`FlexDirection`], [`FlexWrap`],
//!   [`MainAxisAlignment`], [`CrossAxisAlignment`], padding, and explicit size.
//! - [`Measure`]: intrinsic sizing for leaves. Closures implement it directly.
//! - [`DirectionContext`]: horizontal [`Flow`] for a computation.
//! - [`LayoutTree::compute`] → [`LayoutResult`]: a fresh per-node map of
//!   measured sizes and arranged rectangles.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Insets, Rect};
//! use understory_flex::{DirectionContext, LayoutStyle, LayoutTree, MeasureSpec};
//!
//! let mut tree = LayoutTree::new();
//! let item = tree
//!     .insert(LayoutStyle { width: Some(30.0), height: Some(10.0), ..LayoutStyle::default() })
//!     .unwrap();
//! let root = tree
//!     .insert(LayoutStyle {
//!         width: Some(100.0),
//!         padding: Insets::new(10.0, 0.0, 20.0, 0.0),
//!         ..LayoutStyle::default()
//!     })
//!     .unwrap();
//! tree.set_children(root, &[item]).unwrap();
//!
//! // Right-to-left flow swaps the padding edges and fills from the right.
//! let layout = tree
//!     .compute(root, DirectionContext::RTL, MeasureSpec::Unspecified, MeasureSpec::Unspecified)
//!     .unwrap();
//! assert_eq!(layout.rect(item), Some(Rect::new(60.0, 0.0, 90.0, 10.0)));
//! ```
//!
//! There is no flex grow/shrink, no gap property, no baseline alignment, and
//! no min/max constraints. Child sizes come only from measurement.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod direction;
mod error;
mod result;
mod solve;
mod spec;
mod style;
mod tree;

pub use direction::{DirectionContext, Flow};
pub use error::{CallbackError, ErrorKind, LayoutError};
pub use result::{LayoutResult, NodeLayout};
pub use spec::{MeasureSpec, resolve_available};
pub use style::{CrossAxisAlignment, FlexDirection, FlexWrap, LayoutStyle, MainAxisAlignment};
pub use tree::{LayoutTree, Measure, NodeId};
