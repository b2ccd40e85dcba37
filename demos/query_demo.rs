//! Headless query demo
//!
//! Scatters 140 16x16 boxes over a 640x480 canvas, builds a quadtree over
//! them and sweeps a 16x16 cursor box diagonally across the canvas, printing
//! what each cursor position hits and how many nodes the query visits.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example query_demo
//! ```

use loose_quadtree::prelude::*;
use rand::Rng;
use rand::SeedableRng;

const SCREEN_WIDTH: f64 = 640.0;
const SCREEN_HEIGHT: f64 = 480.0;
const ICON_SIZE: f64 = 16.0;
const NUM_ICONS: usize = 140;

fn main() {
    env_logger::init();

    let mut rng = rand::rngs::StdRng::seed_from_u64(1);

    // Icons land inside a margin, snapped to whole pixels
    let mut builder = QuadtreeBuilder::with_capacity(NUM_ICONS);
    for i in 0..NUM_ICONS {
        let x = rng.random_range(80.0 + 12.0..SCREEN_WIDTH - 80.0 - 12.0_f64).floor();
        let y = rng.random_range(60.0 + 12.0..SCREEN_HEIGHT - 60.0 - 12.0_f64).floor();
        builder.add(x, y, x + ICON_SIZE, y + ICON_SIZE, i);
    }

    let tree = match builder.build() {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("failed to build quadtree: {err}");
            return;
        }
    };

    println!(
        "{} icons, {} nodes ({} leaves), depth {}",
        tree.len(),
        tree.node_count(),
        tree.leaf_count(),
        tree.depth()
    );
    println!("bounds: {:?}\n", tree.bounds());

    let half = ICON_SIZE / 2.0;
    let mut results = Vec::new();
    for step in 0..=16 {
        let t = f64::from(step) / 16.0;
        let cursor = Point::new(t * SCREEN_WIDTH, t * SCREEN_HEIGHT);
        let cursor_box = Aabb::new(cursor - half, cursor + half);

        results.clear();
        tree.query_intersecting(&cursor_box, &mut results);
        results.sort_unstable();

        let visited = tree.query_nodes(&cursor_box).count();
        println!(
            "cursor ({:6.1}, {:6.1}): {:2} nodes visited, hits {:?}",
            cursor.x, cursor.y, visited, results
        );
    }
}
