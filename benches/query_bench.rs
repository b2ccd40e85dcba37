//! Benchmark for loose quadtree build and overlap queries
//!
//! Indexes 1M randomly distributed boxes in a 100x100 space and runs
//! batches of queries covering different fractions of that space, once per
//! query style.

use loose_quadtree::{Aabb, LooseQuadtree, QuadtreeConfig};
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

/// Random box with each side UP TO `max_size`, kept inside the 100x100 space
fn random_box<R: Rng>(rng: &mut R, max_size: f64) -> Aabb {
    let min_x = rng.random_range(0.0..(100.0 - max_size));
    let min_y = rng.random_range(0.0..(100.0 - max_size));
    let width = rng.random_range(0.0..max_size);
    let height = rng.random_range(0.0..max_size);
    Aabb::from_coords(min_x, min_y, min_x + width, min_y + height)
}

fn bench_eager(tree: &LooseQuadtree<usize>, queries: &[Aabb], percentage_str: &str) -> usize {
    let mut results = Vec::new();
    let mut total = 0;
    let start = Instant::now();

    for query in queries {
        results.clear();
        tree.query_intersecting(query, &mut results);
        total += results.len();
    }

    let elapsed = start.elapsed();
    println!(
        "  {} query_intersecting {}%: {:.2}ms",
        queries.len(),
        percentage_str,
        elapsed.as_secs_f64() * 1000.0
    );
    total
}

fn bench_lazy(tree: &LooseQuadtree<usize>, queries: &[Aabb], percentage_str: &str) -> usize {
    let start = Instant::now();
    let total: usize = queries.iter().map(|q| tree.query(q).count()).sum();
    let elapsed = start.elapsed();
    println!(
        "  {} query {}%:              {:.2}ms",
        queries.len(),
        percentage_str,
        elapsed.as_secs_f64() * 1000.0
    );
    total
}

fn bench_linked(tree: &mut LooseQuadtree<usize>, queries: &[Aabb], percentage_str: &str) -> usize {
    let start = Instant::now();
    let mut total = 0;
    for query in queries {
        total += tree.query_linked(query).count();
    }
    let elapsed = start.elapsed();
    println!(
        "  {} query_linked {}%:       {:.2}ms",
        queries.len(),
        percentage_str,
        elapsed.as_secs_f64() * 1000.0
    );
    total
}

fn main() {
    env_logger::init();

    println!("Loose Quadtree Query Benchmark");
    println!("==============================\n");

    let num_items = 1_000_000;
    let num_tests = 1_000;

    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let boxes: Vec<Aabb> = (0..num_items).map(|_| random_box(&mut rng, 1.0)).collect();
    let payloads: Vec<usize> = (0..num_items).collect();

    // Query sets sized to cover 100%, 10%, 1% and 0.01% of the space
    let full = vec![Aabb::from_coords(0.0, 0.0, 100.0, 100.0); num_tests];
    let q10: Vec<Aabb> = (0..num_tests)
        .map(|_| random_box(&mut rng, 0.1_f64.sqrt() * 100.0))
        .collect();
    let q1: Vec<Aabb> = (0..num_tests).map(|_| random_box(&mut rng, 10.0)).collect();
    let q001: Vec<Aabb> = (0..num_tests).map(|_| random_box(&mut rng, 1.0)).collect();

    for max_depth in [4, 8, 12] {
        let config = QuadtreeConfig::new().with_max_depth(max_depth).with_leaf_capacity(16);

        let start = Instant::now();
        let tree = LooseQuadtree::build_with_config(config, &boxes, payloads.clone());
        let build_time = start.elapsed();
        let Ok(mut tree) = tree else {
            println!("build failed");
            return;
        };

        println!(
            "max_depth {max_depth}: {} nodes, {} leaves, built in {:.2}ms",
            tree.node_count(),
            tree.leaf_count(),
            build_time.as_secs_f64() * 1000.0
        );

        for (queries, label) in [(&q001, "0.01"), (&q1, "1"), (&q10, "10"), (&full, "100")] {
            let eager = bench_eager(&tree, queries, label);
            let lazy = bench_lazy(&tree, queries, label);
            let linked = bench_linked(&mut tree, queries, label);
            assert_eq!(eager, lazy, "Query styles disagree");
            assert_eq!(eager, linked, "Query styles disagree");
        }
        println!();
    }
}

/*
cargo bench --bench query_bench
*/
