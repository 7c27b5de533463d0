// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Solve times for wrapping rows of measured leaves.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kurbo::Size;
use understory_flex::{
    DirectionContext, FlexWrap, LayoutError, LayoutStyle, LayoutTree, MainAxisAlignment,
    MeasureSpec, NodeId,
};

fn wrapping_row(leaves: usize) -> (LayoutTree, NodeId) {
    let mut tree = LayoutTree::new();
    let root = tree
        .insert(LayoutStyle {
            wrap: FlexWrap::Wrap,
            align_main: MainAxisAlignment::SpaceBetween,
            ..LayoutStyle::default()
        })
        .unwrap();
    let kids: Vec<_> = (0..leaves)
        .map(|i| {
            let id = tree.insert(LayoutStyle::default()).unwrap();
            let width = 20.0 + (i % 7) as f64 * 5.0;
            tree.set_measure(id, move |_: MeasureSpec, _: MeasureSpec| {
                Ok::<_, LayoutError>(Size::new(width, 18.0))
            })
            .unwrap();
            id
        })
        .collect();
    tree.set_children(root, &kids).unwrap();
    (tree, root)
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("flex_compute");
    for leaves in [16, 256, 4096] {
        let (tree, root) = wrapping_row(leaves);
        group.bench_with_input(BenchmarkId::from_parameter(leaves), &leaves, |b, _| {
            b.iter(|| {
                tree.compute(
                    root,
                    DirectionContext::RTL,
                    MeasureSpec::AtMost(800.0),
                    MeasureSpec::Unspecified,
                )
                .unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
