//! Parallel query benchmark to measure concurrent access performance
//!
//! A built `LooseQuadtree` is shared across threads through an `Arc`.
//! `query_intersecting` and `query` only need `&self`, so no locking is
//! involved; each thread keeps its own result vector.

use loose_quadtree::{Aabb, LooseQuadtree, QuadtreeBuilder, QuadtreeConfig};
use rand::Rng;
use rand::SeedableRng;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

fn run_parallel(
    tree: &Arc<LooseQuadtree<usize>>,
    queries: &Arc<Vec<Aabb>>,
    num_threads: usize,
    label: &str,
) {
    let start = Instant::now();

    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let tree = Arc::clone(tree);
            let queries = Arc::clone(queries);

            thread::spawn(move || {
                let mut results = Vec::new();
                let mut found = 0;
                for query in queries.iter() {
                    results.clear();
                    tree.query_intersecting(query, &mut results);
                    found += results.len();
                }
                found
            })
        })
        .collect();

    let mut found = 0;
    for handle in handles {
        found += handle.join().unwrap_or(0);
    }

    let elapsed = start.elapsed();
    let total_queries = num_threads * queries.len();
    println!(
        "  {} {} queries (parallel {}x{}):   {:.2}ms ({:.3}us/query, {} matches)",
        total_queries,
        label,
        num_threads,
        queries.len(),
        elapsed.as_secs_f64() * 1000.0,
        elapsed.as_secs_f64() * 1_000_000.0 / total_queries as f64,
        found
    );
}

fn main() {
    env_logger::init();

    println!("Loose Quadtree Parallel Query Benchmark");
    println!("=======================================\n");

    let num_items = 1_000_000;
    let num_tests = 1_000;
    let num_threads = 10;

    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    println!("Generating {num_items} random boxes...");
    let config = QuadtreeConfig::new().with_max_depth(10).with_leaf_capacity(16);
    let mut builder = QuadtreeBuilder::with_capacity(num_items).with_config(config);
    for i in 0..num_items {
        let min_x = rng.random_range(0.0..100.0);
        let min_y = rng.random_range(0.0..100.0);
        let max_x = (min_x + rng.random_range(0.0..1.0_f64)).min(100.0);
        let max_y = (min_y + rng.random_range(0.0..1.0_f64)).min(100.0);
        builder.add(min_x, min_y, max_x, max_y, i);
    }

    println!("Building index...");
    let build_start = Instant::now();
    let tree = match builder.build() {
        Ok(tree) => Arc::new(tree),
        Err(err) => {
            println!("build failed: {err}");
            return;
        }
    };
    println!("  Index built in {:.2}ms\n", build_start.elapsed().as_secs_f64() * 1000.0);

    let mut small = Vec::with_capacity(num_tests);
    let mut large = Vec::with_capacity(num_tests);
    for _ in 0..num_tests {
        // 0.01% coverage
        let min_x = rng.random_range(0.0..99.0);
        let min_y = rng.random_range(0.0..99.0);
        small.push(Aabb::from_coords(min_x, min_y, min_x + 1.0, min_y + 1.0));

        // 10% coverage
        let min_x = rng.random_range(0.0..69.0);
        let min_y = rng.random_range(0.0..69.0);
        large.push(Aabb::from_coords(min_x, min_y, min_x + 31.62, min_y + 31.62));
    }

    println!("Profiling query_intersecting (parallel):");
    println!("{}", "-".repeat(40));
    run_parallel(&tree, &Arc::new(small), num_threads, "small");
    run_parallel(&tree, &Arc::new(large), num_threads, "large");
}

/*
cargo bench --bench profile_parallel
RUST_LOG=debug cargo bench --bench profile_parallel
*/
