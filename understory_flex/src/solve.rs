// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-pass solver: measure bottom-up, then arrange top-down.

use alloc::vec;
use alloc::vec::Vec;
use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use crate::direction::DirectionContext;
use crate::error::{LayoutError, is_non_negative};
use crate::result::{LayoutResult, NodeLayout};
use crate::spec::{MeasureSpec, resolve_available};
use crate::style::{FlexDirection, FlexWrap, LayoutStyle};
use crate::tree::{LayoutTree, Node, NodeId};

impl LayoutTree {
    /// Measure `root` under `width`/`height` and arrange it at the origin.
    ///
    /// The computation reads the arena and never mutates it, so calling this
    /// twice with the same inputs yields identical results. On error no
    /// partial result is returned.
    ///
    /// ```rust
    /// use kurbo::{Rect, Size};
    /// use understory_flex::{
    ///     DirectionContext, LayoutStyle, LayoutTree, MainAxisAlignment, MeasureSpec,
    /// };
    ///
    /// let mut tree = LayoutTree::new();
    /// let cell = LayoutStyle { width: Some(50.0), height: Some(20.0), ..LayoutStyle::default() };
    /// let kids = [tree.insert(cell).unwrap(), tree.insert(cell).unwrap(), tree.insert(cell).unwrap()];
    /// let root = tree
    ///     .insert(LayoutStyle {
    ///         width: Some(200.0),
    ///         align_main: MainAxisAlignment::SpaceBetween,
    ///         ..LayoutStyle::default()
    ///     })
    ///     .unwrap();
    /// tree.set_children(root, &kids).unwrap();
    ///
    /// let layout = tree
    ///     .compute(root, DirectionContext::LTR, MeasureSpec::Unspecified, MeasureSpec::Unspecified)
    ///     .unwrap();
    /// assert_eq!(layout.rect(root), Some(Rect::new(0.0, 0.0, 200.0, 20.0)));
    /// assert_eq!(layout.rect(kids[1]).unwrap().x0, 75.0);
    /// assert_eq!(layout.rect(kids[2]).unwrap().x0, 150.0);
    /// ```
    pub fn compute(
        &self,
        root: NodeId,
        direction: DirectionContext,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<LayoutResult, LayoutError> {
        let mut solver = Solver {
            tree: self,
            direction,
            measured: HashMap::new(),
            on_stack: vec![false; self.slot_count()],
            placed: HashMap::new(),
        };
        let size = solver.measure(root, width.validate()?, height.validate()?)?;
        solver.arrange(root, Point::ORIGIN, size)?;
        Ok(LayoutResult::new(root, solver.placed))
    }
}

struct Solver<'a> {
    tree: &'a LayoutTree,
    direction: DirectionContext,
    measured: HashMap<NodeId, Size>,
    /// Nodes on the current measure path, indexed by slot.
    on_stack: Vec<bool>,
    placed: HashMap<NodeId, NodeLayout>,
}

/// One run of children sharing a line.
#[derive(Clone, Copy, Debug)]
struct Line {
    end: usize,
    main: f64,
    cross: f64,
}

/// Splits a size into `(main, cross)` for `direction`.
fn split(direction: FlexDirection, size: Size) -> (f64, f64) {
    match direction {
        FlexDirection::Row => (size.width, size.height),
        FlexDirection::Column => (size.height, size.width),
    }
}

fn join(direction: FlexDirection, main: f64, cross: f64) -> Size {
    match direction {
        FlexDirection::Row => Size::new(main, cross),
        FlexDirection::Column => Size::new(cross, main),
    }
}

/// Collects the line starting at `start`.
///
/// With a `limit`, a child that would push a non-empty line past it starts
/// the next line instead. A child larger than the limit still gets a line of
/// its own.
fn next_line(items: &[(f64, f64)], start: usize, limit: Option<f64>) -> Line {
    let mut line = Line {
        end: start,
        main: 0.0,
        cross: 0.0,
    };
    while let Some(&(main, cross)) = items.get(line.end) {
        if limit.is_some_and(|limit| line.end > start && line.main + main > limit) {
            break;
        }
        line.main += main;
        line.cross = line.cross.max(cross);
        line.end += 1;
    }
    line
}

fn wrap_limit(style: &LayoutStyle, inner_main: Option<f64>) -> Option<f64> {
    match style.wrap {
        FlexWrap::Wrap => inner_main,
        FlexWrap::NoWrap => None,
    }
}

impl Solver<'_> {
    fn measure(
        &mut self,
        id: NodeId,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<Size, LayoutError> {
        let tree = self.tree;
        let node = tree.node(id).ok_or(LayoutError::StaleNode(id))?;
        node.style.validate()?;
        if core::mem::replace(&mut self.on_stack[id.idx()], true) {
            return Err(LayoutError::Cycle(id));
        }
        let size = if node.children.is_empty() {
            measure_leaf(node, width, height)
        } else {
            self.measure_container(node, width, height)
        };
        self.on_stack[id.idx()] = false;
        let size = size?;
        self.measured.insert(id, size);
        Ok(size)
    }

    fn measure_container(
        &mut self,
        node: &Node,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<Size, LayoutError> {
        let style = &node.style;
        let (left, right) = self.direction.resolve_horizontal_padding(style.padding);
        let pad_h = left + right;
        let pad_v = style.vertical_padding();
        let inner_w = resolve_available(style.width, width).map(|a| (a - pad_h).max(0.0));
        let inner_h = resolve_available(style.height, height).map(|a| (a - pad_v).max(0.0));
        let child_w = inner_w.map_or(MeasureSpec::Unspecified, MeasureSpec::AtMost);
        let child_h = inner_h.map_or(MeasureSpec::Unspecified, MeasureSpec::AtMost);

        let mut items = SmallVec::<[(f64, f64); 8]>::with_capacity(node.children.len());
        for &child in &node.children {
            let size = self.measure(child, child_w, child_h)?;
            items.push(split(style.direction, size));
        }

        let inner_main = match style.direction {
            FlexDirection::Row => inner_w,
            FlexDirection::Column => inner_h,
        };
        let limit = wrap_limit(style, inner_main);
        let (mut content_main, mut content_cross) = (0.0_f64, 0.0);
        let mut start = 0;
        while start < items.len() {
            let line = next_line(&items, start, limit);
            content_main = content_main.max(line.main);
            content_cross += line.cross;
            start = line.end;
        }

        let content = join(style.direction, content_main, content_cross);
        let total_w = style.width.unwrap_or(content.width + pad_h);
        let total_h = style.height.unwrap_or(content.height + pad_v);
        Ok(Size::new(width.apply(total_w)?, height.apply(total_h)?))
    }

    fn arrange(&mut self, id: NodeId, origin: Point, size: Size) -> Result<(), LayoutError> {
        let tree = self.tree;
        let node = tree.node(id).ok_or(LayoutError::StaleNode(id))?;
        let measured = self.measured.get(&id).copied().unwrap_or(size);
        self.placed.insert(
            id,
            NodeLayout {
                measured,
                rect: Rect::from_origin_size(origin, size),
            },
        );
        if node.children.is_empty() {
            return Ok(());
        }

        let style = &node.style;
        let direction = style.direction;
        let rtl = self.direction.is_rtl();
        let (left, right) = self.direction.resolve_horizontal_padding(style.padding);
        let top = style.padding.y0;
        let inner = Size::new(
            (size.width - left - right).max(0.0),
            (size.height - style.vertical_padding()).max(0.0),
        );
        let (inner_main, inner_cross) = split(direction, inner);
        let limit = wrap_limit(style, Some(inner_main));

        let items: SmallVec<[(f64, f64); 8]> = node
            .children
            .iter()
            .map(|c| split(direction, self.measured.get(c).copied().unwrap_or(Size::ZERO)))
            .collect();

        let mut cursor_cross = 0.0;
        let mut start = 0;
        while start < items.len() {
            let line = next_line(&items, start, limit);
            let mut line_cross = line.cross;
            if style.wrap == FlexWrap::NoWrap && inner_cross > line_cross {
                line_cross = inner_cross;
            }
            let remaining = (inner_main - line.main).max(0.0);
            let (leading, gap) = style.align_main.distribute(remaining, line.end - start);

            let mut cursor_main = leading;
            for (&child, &(child_main, child_cross)) in
                node.children[start..line.end].iter().zip(&items[start..line.end])
            {
                let (cross_offset, child_cross) = style.align_cross.place(line_cross, child_cross);
                let child_origin = match direction {
                    FlexDirection::Row => {
                        let x = if rtl {
                            origin.x + size.width - right - cursor_main - child_main
                        } else {
                            origin.x + left + cursor_main
                        };
                        Point::new(x, origin.y + top + cursor_cross + cross_offset)
                    }
                    FlexDirection::Column => {
                        let x = if rtl {
                            origin.x + size.width - right - cursor_cross - cross_offset - child_cross
                        } else {
                            origin.x + left + cursor_cross + cross_offset
                        };
                        Point::new(x, origin.y + top + cursor_main)
                    }
                };
                self.arrange(child, child_origin, join(direction, child_main, child_cross))?;
                cursor_main += child_main + gap;
            }
            cursor_cross += line_cross;
            start = line.end;
        }
        Ok(())
    }
}

fn measure_leaf(node: &Node, width: MeasureSpec, height: MeasureSpec) -> Result<Size, LayoutError> {
    let style = &node.style;
    let mut size = match &node.measure {
        Some(measure) => {
            let size = measure.measure(
                style.width.map_or(width, MeasureSpec::Exactly),
                style.height.map_or(height, MeasureSpec::Exactly),
            )?;
            if !is_non_negative(size.width) || !is_non_negative(size.height) {
                return Err(LayoutError::NegativeMeasurement {
                    width: size.width,
                    height: size.height,
                });
            }
            size
        }
        None => Size::ZERO,
    };
    if let Some(w) = style.width {
        size.width = w;
    }
    if let Some(h) = style.height {
        size.height = h;
    }
    Ok(Size::new(width.apply(size.width)?, height.apply(size.height)?))
}
