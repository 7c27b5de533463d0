// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_list_view --heading-base-level=0

//! Understory List View: list and grid widgets over the recycling window engine.
//!
//! This crate defines a small [`Widget`] contract (measure, layout, paint,
//! input, semantics, destroy) and implements it for [`RecyclerWidget`], which
//! wraps an [`understory_virtual_list::RecyclingView`]. The widget is sized by
//! a parent layout (for example an [`understory_flex::LayoutTree`]), scrolls
//! in response to pointer-scroll input, and leaves drawing of item widgets to
//! the host.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Vec2};
//! use understory_list_view::{InputEvent, ListWidget, PointerEvent, Widget};
//! use understory_virtual_list::{ListStyle, Slot};
//!
//! let mut list: ListWidget<usize> = ListWidget::new(ListStyle::default(), 100, 16).unwrap();
//! list.view_mut().set_bind_fn(|slot: &mut Slot<usize>, index| {
//!     slot.node.widget = Some(index);
//!     Ok(())
//! });
//! list.layout(Rect::new(0.0, 0.0, 320.0, 240.0)).unwrap();
//!
//! let wheel = InputEvent::PointerScroll(PointerEvent {
//!     scroll_delta: Vec2::new(0.0, 96.0),
//!     ..PointerEvent::default()
//! });
//! assert!(list.event(&wheel).unwrap());
//! list.update().unwrap();
//!
//! // 48px rows: items 2..=6 are on screen, plus one overscan row each side.
//! let first = list.view().visible_range().unwrap().first;
//! assert_eq!(first, 1);
//! ```
//!
//! Debug and trace events are emitted through `tracing` on scroll, layout,
//! and update.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod error;
mod widget;

pub use adapter::{GridWidget, ListWidget, RecyclerWidget};
pub use error::WidgetError;
pub use widget::{
    Color, InputEvent, KeyEvent, Painter, PointerEvent, SemanticFlags, SemanticRole, Semantics,
    Widget, WidgetFlags,
};
