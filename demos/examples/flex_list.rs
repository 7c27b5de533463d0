// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flex layout + recycling list: `understory_flex` sizes a grid widget from
//! `understory_list_view`, which then realizes and scrolls its window.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example flex_list`

use kurbo::{Rect, Size, Vec2};
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_flex::{
    CrossAxisAlignment, DirectionContext, FlexDirection, LayoutError, LayoutStyle, LayoutTree,
    MeasureSpec,
};
use understory_list_view::{
    Color, GridWidget, InputEvent, Painter, PointerEvent, Widget, WidgetError,
};
use understory_virtual_list::{GridStyle, Slot};

/// Records fills instead of drawing them.
struct Log;

impl Painter for Log {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), WidgetError> {
        info!(?rect, ?color, "fill");
        Ok(())
    }
}

/// Item payload bound into slots.
#[derive(Debug)]
struct Tile {
    label: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A 640×480 window: a 48px toolbar above a grid that takes the rest.
    let mut tree = LayoutTree::new();
    let root = tree.insert(LayoutStyle {
        direction: FlexDirection::Column,
        align_cross: CrossAxisAlignment::Stretch,
        ..LayoutStyle::default()
    })?;
    let toolbar = tree.insert(LayoutStyle::default())?;
    tree.set_measure(toolbar, |_: MeasureSpec, _: MeasureSpec| {
        Ok::<_, LayoutError>(Size::new(0.0, 48.0))
    })?;
    let body = tree.insert(LayoutStyle {
        height: Some(432.0),
        ..LayoutStyle::default()
    })?;
    tree.set_children(root, &[toolbar, body])?;

    let layout = tree.compute(
        root,
        DirectionContext::LTR,
        MeasureSpec::Exactly(640.0),
        MeasureSpec::Exactly(480.0),
    )?;
    let body_rect = layout.rect(body).ok_or("body was not placed")?;
    info!(?body_rect, "layout solved");

    let style = GridStyle {
        span: 10,
        ..GridStyle::default()
    };
    let mut grid: GridWidget<Tile> = GridWidget::new(style, 10_000, 0)?;
    grid.layout(body_rect)?;
    // `required_slots` at offset zero only counts trailing overscan, so size
    // the pool for the worst scroll position instead.
    let needed = grid.view().max_required_slots()?;
    info!(
        needed,
        at_top = grid.view().required_slots()?,
        "reserving slots"
    );
    grid.view_mut().reserve(needed)?;
    grid.view_mut().set_bind_fn(|slot: &mut Slot<Tile>, index| {
        match &mut slot.node.widget {
            Some(tile) => tile.label = format!("tile {index}"),
            None => {
                slot.node.widget = Some(Tile {
                    label: format!("tile {index}"),
                });
            }
        }
        Ok(())
    });
    grid.set_background(Color::new(0.95, 0.95, 0.97, 1.0))?;

    grid.update()?;
    grid.paint(&mut Log)?;
    report(&grid);

    let wheel = InputEvent::PointerScroll(PointerEvent {
        scroll_delta: Vec2::new(0.0, 1000.0),
        ..PointerEvent::default()
    });
    grid.event(&wheel)?;
    grid.update()?;
    report(&grid);

    grid.destroy();
    Ok(())
}

fn report(grid: &GridWidget<Tile>) {
    let view = grid.view();
    info!(
        scroll = view.scroll_offset(),
        range = ?view.visible_range(),
        realized = view.visible_count(),
        capacity = view.capacity(),
        "window"
    );
    if let Some(node) = view.visible_nodes().next() {
        let label = node.widget.as_ref().map_or("<empty>", |t| t.label.as_str());
        info!(label, bounds = ?node.bounds(), "first visible tile");
    }
}
