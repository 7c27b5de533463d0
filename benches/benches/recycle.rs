// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rebinding cost while scrolling lists and grids.

use criterion::{Criterion, criterion_group, criterion_main};
use kurbo::Rect;
use understory_virtual_list::{GridStyle, GridView, ListStyle, ListView, Slot};

fn bind(slot: &mut Slot<usize>, index: usize) -> Result<(), understory_virtual_list::RecycleError> {
    slot.node.widget = Some(index);
    Ok(())
}

fn bench_list_scroll(c: &mut Criterion) {
    let mut list: ListView<usize> = ListView::new(ListStyle::default(), 1_000_000, 64).unwrap();
    list.set_bounds(Rect::new(0.0, 0.0, 400.0, 900.0)).unwrap();
    list.set_bind_fn(bind);
    c.bench_function("list_scroll_update", |b| {
        b.iter(|| {
            list.scroll_by(37.0).unwrap();
            if list.scroll_offset() >= list.max_scroll().unwrap() {
                list.set_scroll(0.0).unwrap();
            }
            list.update().unwrap();
        });
    });
}

fn bench_grid_scroll(c: &mut Criterion) {
    let style = GridStyle {
        span: 8,
        ..GridStyle::default()
    };
    let mut grid: GridView<usize> = GridView::new(style, 200_000, 256).unwrap();
    grid.set_bounds(Rect::new(0.0, 0.0, 512.0, 900.0)).unwrap();
    grid.set_bind_fn(bind);
    c.bench_function("grid_scroll_update", |b| {
        b.iter(|| {
            grid.scroll_by(53.0).unwrap();
            if grid.scroll_offset() >= grid.max_scroll().unwrap() {
                grid.set_scroll(0.0).unwrap();
            }
            grid.update().unwrap();
        });
    });
}

criterion_group!(benches, bench_list_scroll, bench_grid_scroll);
criterion_main!(benches);
