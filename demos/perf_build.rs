//! Performance profiling example for tree building
//!
//! This example focuses exclusively on the build phase.
//! Designed to be used with low-level profilers like `samply`:
//!
//! ```bash
//! samply record cargo run --release --example perf_build
//! ```

use loose_quadtree::prelude::*;
use std::time::{Duration, Instant};

/// Simple LCG returning values in `[0, 1)`
fn next_unit(state: &mut u64) -> f64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    f64::from((*state >> 32) as u32) / (f64::from(u32::MAX) + 1.0)
}

fn main() {
    env_logger::init();

    println!("Loose Quadtree Build Performance Benchmark");
    println!("==========================================\n");

    println!("Generating 1,000,000 random bounding boxes...");
    let mut state = 12345_u64;
    let boxes: Vec<Aabb> = (0..1_000_000)
        .map(|_| {
            let x1 = next_unit(&mut state) * 1000.0;
            let y1 = next_unit(&mut state) * 1000.0;
            let size_x = next_unit(&mut state) * 50.0 + 1.0;
            let size_y = next_unit(&mut state) * 50.0 + 1.0;
            Aabb::from_coords(x1, y1, x1 + size_x, y1 + size_y)
        })
        .collect();
    let payloads: Vec<usize> = (0..boxes.len()).collect();

    let num_runs = 20;
    println!("Running build phase {num_runs} times per configuration...\n");

    let config = QuadtreeConfig::new().with_max_depth(10).with_leaf_capacity(16);
    let mut tree = LooseQuadtree::with_config(config);
    let mut total_build_time = Duration::ZERO;

    for _ in 0..num_runs {
        let start = Instant::now();
        if let Err(err) = tree.rebuild(&boxes, payloads.clone()) {
            eprintln!("rebuild failed: {err}");
            return;
        }
        total_build_time += start.elapsed();
    }

    println!("Build Summary ({num_runs} runs, max_depth 10, leaf_capacity 16):");
    println!("  Nodes:            {}", tree.node_count());
    println!("  Leaves:           {}", tree.leaf_count());
    println!("  Total Build time: {:.2}ms", total_build_time.as_secs_f64() * 1000.0);
    println!(
        "  Average Build:    {:.2}ms",
        total_build_time.as_secs_f64() * 1000.0 / f64::from(num_runs)
    );
}
