// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_virtual_list --heading-base-level=0

//! Understory Virtual List: a recycling window engine for lists and grids.
//!
//! This crate keeps a long, scrollable run of fixed-size items cheap to
//! display: only the items intersecting the viewport (plus a few overscan
//! items) are realized, and they are realized into a small, reusable pool of
//! slots instead of one widget per item.
//!
//! The core concepts are:
//!
//! - [`FixedStrip`]: content-extent and visible-range math for a dense strip
//!   of equally sized entries.
//! - [`WindowModel`]: item geometry for a view, implemented by [`ListStyle`]
//!   (one item per line) and [`GridStyle`] (`span` items per line).
//! - [`SlotPool`] and [`Slot`]: pre-reserved slots, each holding an item index,
//!   a [`RenderNode`] with a widget and bounds, and a host payload.
//! - [`Bind`]: the host callback that fills a slot with a widget for an item.
//! - [`RecyclingView`] (via [`ListView`] and [`GridView`]): scroll state,
//!   clamping, index-aligned scrolling via [`ScrollAlign`], and
//!   [`update`](RecyclingView::update), which rebinds the visible items into
//!   slots `0..n`.
//!
//! This crate does **not** own item data or widget instances beyond the
//! references bind callbacks store in slots, and it never paints. Host
//! frameworks are responsible for:
//!
//! - Reserving enough slots ([`RecyclingView::max_required_slots`] reports a
//!   count that holds at every scroll offset).
//! - Installing a binder and calling [`RecyclingView::update`] after scroll,
//!   bounds, style, or item count changes.
//! - Drawing the widgets of [`RecyclingView::visible_nodes`] at their bounds.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_virtual_list::{GridStyle, GridView, Slot};
//!
//! // 10 cells, 4 per row, 64×64 each.
//! let style = GridStyle { span: 4, ..GridStyle::default() };
//! let mut grid: GridView<usize> = GridView::new(style, 10, 12).unwrap();
//! grid.set_bounds(Rect::new(0.0, 0.0, 256.0, 100.0)).unwrap();
//! grid.set_bind_fn(|slot: &mut Slot<usize>, index| {
//!     slot.node.widget = Some(index);
//!     Ok(())
//! });
//!
//! assert_eq!(grid.line_count(), 3);
//! grid.update().unwrap();
//! for node in grid.visible_nodes() {
//!     // Draw `node.widget` at `node.bounds()`.
//!     assert!(node.bounds().width() == 64.0);
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod fixed;
mod grid;
mod list;
mod model;
mod slot;
mod view;

pub use error::{CallbackError, ErrorKind, RecycleError};
pub use fixed::{EDGE_EPSILON, FixedStrip};
pub use grid::{GridCell, GridStyle};
pub use list::ListStyle;
pub use model::{ScrollAxis, VisibleRange, WindowModel};
pub use slot::{Bind, RenderNode, Slot, SlotPool};
pub use view::{GridView, ListView, RecyclingView, ScrollAlign};
