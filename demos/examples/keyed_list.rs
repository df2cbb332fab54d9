// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed list reconciliation.
//!
//! Print the keyed plan for a few list transitions, then apply them to the
//! in-memory host tree and show that matched rows keep their node ids.
//!
//! Run:
//! - `cargo run -p thicket_demos --example keyed_list`

use thicket::{Description, Handler, Props, Renderer, h};
use thicket_host_tree::{HostTree, NodeId};
use thicket_keyed::{Source, plan};

fn list(keys: &[&str]) -> Description {
    h(
        "ul",
        Props::new(),
        keys.iter()
            .map(|k| h("li", Props::new(), *k).with_key(*k))
            .collect::<Vec<_>>(),
    )
}

fn describe(source: Source) -> String {
    match source {
        Source::New => "insert".into(),
        Source::Kept { prev } => format!("keep   (was {prev})"),
        Source::Moved { prev } => format!("move   (was {prev})"),
    }
}

fn main() {
    let steps: [&[&str]; 5] = [
        &["a", "b", "c", "d"],
        &["d", "a", "b", "c"],
        &["d", "a", "x", "b", "c"],
        &["a", "c"],
        &["c", "y", "a"],
    ];

    let mut tree: HostTree<Handler> = HostTree::new();
    let root = tree.create_element("body");
    let mut renderer: Renderer<NodeId> = Renderer::new();
    let mut previous: &[&str] = &[];

    for keys in steps {
        let p = plan(previous, keys);
        println!("{previous:?} -> {keys:?}");
        for (key, source) in keys.iter().zip(p.sources()) {
            println!("  {key}: {}", describe(*source));
        }
        for &index in p.removed() {
            println!("  {}: remove", previous[index]);
        }

        let before = ids(&renderer, root);
        let stats = renderer.render(&mut tree, list(keys), &root).unwrap();
        let after = ids(&renderer, root);
        let kept = after.iter().filter(|id| before.contains(id)).count();
        println!(
            "  moved {}, created {}, removed {}, ids kept {kept}",
            stats.moved, stats.created, stats.removed
        );
        assert_eq!(stats.moved, p.move_count());
        println!("  {}", tree.children_markup(root));
        previous = keys;
    }
}

fn ids(renderer: &Renderer<NodeId>, root: NodeId) -> Vec<NodeId> {
    renderer
        .current(&root)
        .map(|ul| ul.children().iter().map(|li| *li.handle()).collect())
        .unwrap_or_default()
}
