//! # Loose Quadtree - Static Spatial Index
//!
//! A Rust library providing an immutable, bulk-built loose quadtree for
//! overlap queries on axis-aligned bounding boxes (AABBs), each carrying a
//! payload of your choice.
//!
//! ## Features
//!
//! - **Loose Bounds**: every node stores the hull of the boxes below it, so
//!   boxes crossing quadrant borders are stored once and still pruned correctly
//! - **Flat Storage**: nodes in an index-addressed arena, entries in one
//!   contiguous array reordered so each leaf owns a slice
//! - **Three Query Styles**: append to a `Vec`, a lazy iterator, or an
//!   allocation-free linked query through a buffer owned by the tree
//! - **Static Optimization**: built in one pass; rebuild to change the data
//!
//! ## Quick Start
//!
//! ```rust
//! use loose_quadtree::prelude::*;
//!
//! let boxes = [
//!     Aabb::from_coords(0.0, 0.0, 2.0, 2.0),     // "a": large box
//!     Aabb::from_coords(1.0, 1.0, 3.0, 3.0),     // "b": overlapping box
//!     Aabb::from_coords(5.0, 5.0, 6.0, 6.0),     // "c": distant box
//!     Aabb::from_coords(1.5, 1.5, 2.5, 2.5),     // "d": small box inside others
//! ];
//! let tree = LooseQuadtree::build(&boxes, vec!["a", "b", "c", "d"]).unwrap();
//!
//! // Collect into a vector
//! let mut results = Vec::new();
//! tree.query_intersecting(&Aabb::from_coords(1.2, 1.2, 2.8, 2.8), &mut results);
//! results.sort();
//! assert_eq!(results, [&"a", &"b", &"d"]);
//!
//! // Or iterate lazily
//! let distant: Vec<_> = tree.query(&Aabb::from_coords(4.0, 4.0, 7.0, 7.0)).collect();
//! assert_eq!(distant, [&"c"]);
//! ```
//!
//! ## How It Works
//!
//! The build computes every box's centroid and splits the hull of all
//! centroids into four quadrants at its midpoint, recursively, moving each
//! entry into the quadrant holding its centroid. Recursion stops at a
//! configurable depth or once a node holds few enough entries. Each node
//! remembers the hull of the *boxes* (not centroids) below it; a query skips
//! any node whose hull it misses and tests the boxes of the leaves it reaches.
//!
//! Overlap uses a half-open rule: see [`Aabb::overlaps`].

pub mod builder;
pub mod config;
pub mod error;
pub mod geometry;
pub mod inspect;
pub mod prelude;
pub mod query;
pub mod tree;

pub use builder::QuadtreeBuilder;
pub use config::QuadtreeConfig;
pub use error::BuildError;
pub use geometry::{Aabb, Point, hull};
pub use inspect::{NodeView, Nodes};
pub use query::{LinkedQuery, Query};
pub use tree::{Entry, LooseQuadtree};
