// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render basics.
//!
//! Mount a small view into the in-memory host tree, re-render with changes,
//! and inspect the markup, the per-pass statistics, and the host damage.
//!
//! Run:
//! - `cargo run -p thicket_demos --example render_basics`

use std::cell::Cell;
use std::rc::Rc;

use thicket::adapters::host_tree::dispatch;
use thicket::{Description, Handler, Props, Renderer, h, text};
use thicket_host_tree::{Dirty, HostTree};

fn view(count: u32, on_click: &Handler) -> Description {
    let tone = if count % 2 == 0 { "even" } else { "odd" };
    h(
        "div",
        Props::new().attr("id", "app").with("style", "padding: 8px"),
        vec![
            h("h1", Props::new(), "Counter"),
            h(
                "p",
                Props::new()
                    .attr("class", tone)
                    .style("color", if count > 2 { "red" } else { "black" }),
                count,
            ),
            h("button", Props::new().on("click", on_click.clone()), "+1"),
            text("footer"),
        ],
    )
}

fn main() {
    let clicks = Rc::new(Cell::new(0_u32));
    let on_click = {
        let clicks = clicks.clone();
        Handler::new(move || clicks.set(clicks.get() + 1))
    };

    let mut tree: HostTree<Handler> = HostTree::new();
    let root = tree.create_element("body");
    let mut renderer = Renderer::new();

    let stats = renderer.render(&mut tree, view(0, &on_click), &root).unwrap();
    println!("mount:  {stats:?}");
    println!("        {}", tree.children_markup(root));
    let _ = tree.commit();

    // Click the button a few times, re-rendering after each click.
    let app = *renderer.current(&root).unwrap().handle();
    let button = tree.children(app)[2];
    for _ in 0..3 {
        dispatch(&tree, button, "click");
        let stats = renderer
            .render(&mut tree, view(clicks.get(), &on_click), &root)
            .unwrap();
        let damage = tree.commit();
        println!(
            "patch:  {} host calls, {} dirty nodes, {}",
            stats.mutations(),
            damage.changed.len(),
            tree.children_markup(root)
        );
        assert_eq!(damage.count(Dirty::CREATED), 0, "counter updates never create nodes");
    }

    // Rendering the same value again issues no host calls.
    let stats = renderer
        .render(&mut tree, view(clicks.get(), &on_click), &root)
        .unwrap();
    assert!(stats.is_empty());
    println!("repeat: {stats:?}");
}
