// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use thicket::{Description, Handler, Props, Renderer, h};
use thicket_host_tree::{HostTree, NodeId};

fn row(key: u32, label: &str) -> Description {
    h(
        "tr",
        Props::new().attr("data-id", key.to_string()),
        vec![
            h("td", Props::new().attr("class", "id"), key),
            h("td", Props::new().attr("class", "label"), label.to_string()),
        ],
    )
    .with_key(key)
}

fn table(keys: &[u32], label: &str) -> Description {
    h(
        "table",
        Props::new(),
        keys.iter().map(|&k| row(k, label)).collect::<Vec<_>>(),
    )
}

fn mounted(keys: &[u32]) -> (HostTree<Handler>, Renderer<NodeId>, NodeId) {
    let mut tree = HostTree::new();
    let root = tree.create_element("body");
    let mut renderer = Renderer::new();
    renderer
        .render(&mut tree, table(keys, "row"), &root)
        .unwrap();
    (tree, renderer, root)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for &n in &[100_u32, 1_000] {
        let keys: Vec<u32> = (0..n).collect();
        let mut swapped = keys.clone();
        swapped.swap(1, n as usize - 2);
        let reversed: Vec<u32> = keys.iter().rev().copied().collect();

        group.bench_with_input(BenchmarkId::new("mount", n), &keys, |b, keys| {
            b.iter_batched(
                || (HostTree::<Handler>::new(), Renderer::new()),
                |(mut tree, mut renderer)| {
                    let root = tree.create_element("body");
                    black_box(renderer.render(&mut tree, table(keys, "row"), &root).unwrap());
                },
                BatchSize::SmallInput,
            );
        });

        for (name, next, label) in [
            ("unchanged", &keys, "row"),
            ("relabel", &keys, "changed"),
            ("swap_rows", &swapped, "row"),
            ("reverse", &reversed, "row"),
        ] {
            group.bench_with_input(BenchmarkId::new(name, n), next, |b, next| {
                b.iter_batched(
                    || mounted(&keys),
                    |(mut tree, mut renderer, root)| {
                        black_box(renderer.render(&mut tree, table(next, label), &root).unwrap());
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
