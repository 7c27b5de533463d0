// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A flex layout sizes a list widget, which then realizes its window.

use kurbo::{Rect, Vec2};
use understory_flex::{
    CrossAxisAlignment, DirectionContext, FlexDirection, LayoutStyle, LayoutTree, MeasureSpec,
};
use understory_list_view::{InputEvent, ListWidget, PointerEvent, Widget};
use understory_virtual_list::{ListStyle, Slot};

#[test]
fn column_layout_feeds_list_bounds() {
    let mut tree = LayoutTree::new();
    let root = tree
        .insert(LayoutStyle {
            direction: FlexDirection::Column,
            align_cross: CrossAxisAlignment::Stretch,
            ..LayoutStyle::default()
        })
        .unwrap();
    let header = tree
        .insert(LayoutStyle {
            height: Some(40.0),
            ..LayoutStyle::default()
        })
        .unwrap();
    let body = tree
        .insert(LayoutStyle {
            height: Some(160.0),
            ..LayoutStyle::default()
        })
        .unwrap();
    tree.set_children(root, &[header, body]).unwrap();

    let layout = tree
        .compute(
            root,
            DirectionContext::LTR,
            MeasureSpec::Exactly(300.0),
            MeasureSpec::Exactly(200.0),
        )
        .unwrap();
    let body_rect = layout.rect(body).unwrap();
    assert_eq!(body_rect, Rect::new(0.0, 40.0, 300.0, 200.0));

    let mut list: ListWidget<usize> = ListWidget::new(ListStyle::default(), 50, 8).unwrap();
    list.view_mut().set_bind_fn(|slot: &mut Slot<usize>, index| {
        slot.node.widget = Some(index);
        Ok(())
    });
    list.layout(body_rect).unwrap();
    list.update().unwrap();

    // 160 / 48 covers rows 0..=3, plus one overscan row.
    let items: Vec<_> = list.view().visible_nodes().map(|n| n.widget).collect();
    assert_eq!(items, [Some(0), Some(1), Some(2), Some(3), Some(4)]);
    let first = list.view().visible_nodes().next().unwrap().bounds();
    assert_eq!(first, Rect::new(0.0, 40.0, 300.0, 88.0));

    let wheel = InputEvent::PointerScroll(PointerEvent {
        scroll_delta: Vec2::new(0.0, 100.0),
        ..PointerEvent::default()
    });
    assert!(list.event(&wheel).unwrap());
    list.update().unwrap();
    let range = list.view().visible_range().unwrap();
    assert_eq!((range.first, range.last), (1, 6));
    let first = list.view().visible_nodes().next().unwrap().bounds();
    assert_eq!(first.y0, 40.0 + 48.0 - 100.0);
}
