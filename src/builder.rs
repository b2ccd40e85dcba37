//! Tree construction.
//!
//! The build sorts nothing. Entries are partitioned in place around the
//! midpoint of the current split box, first into a north and a south half by
//! centroid `y`, then each half into west and east by centroid `x`. That
//! leaves the four quadrants contiguous in `[nw, ne, sw, se]` order, and each
//! one is built recursively.

use crate::config::QuadtreeConfig;
use crate::error::Result;
use crate::geometry::{self, Aabb};
use crate::tree::{Entry, LooseQuadtree, NO_NODE, Node};

impl<T> LooseQuadtree<T> {
    /// Builds nodes, bounds and ranges over `self.entries`.
    ///
    /// Entries must already be populated; any previous index is discarded.
    pub(crate) fn build_index(&mut self) {
        let num_items = self.entries.len();

        self.nodes.clear();
        self.node_bounds.clear();
        self.node_range_starts.clear();
        // Sized lazily by the first linked query.
        self.query_links.clear();

        // Split midpoints come from the centroids, not the boxes.
        self.split_extent = geometry::point_hull(self.entries.iter().map(|e| e.centroid));

        let max_depth = self.config.max_depth();
        self.root = self.build_recursive(self.split_extent, 0, num_items, max_depth);
        self.node_range_starts.push(num_items);

        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "built loose quadtree: {} entries, {} nodes, {} leaves, depth {}/{}",
                num_items,
                self.nodes.len(),
                self.leaf_count(),
                self.depth(),
                max_depth
            );
        }
    }

    /// Creates the node for `entries[begin..end]` and its subtree.
    ///
    /// Returns the node id, or `NO_NODE` for an empty range.
    fn build_recursive(&mut self, split: Aabb, begin: usize, end: usize, depth: u32) -> usize {
        if begin == end {
            return NO_NODE;
        }

        let id = self.nodes.len();
        self.nodes.push(Node::LEAF);
        self.node_range_starts.push(begin);

        // Loose bound: hull of the actual boxes, which may reach far outside `split`.
        let node_bound = geometry::hull(self.entries[begin..end].iter().map(|e| &e.aabb));
        self.node_bounds.push(node_bound);

        if end - begin <= self.config.leaf_capacity() || depth == 0 {
            return id;
        }

        let mid = split.center();
        let is_north = |e: &Entry<T>| e.centroid.y < mid.y;
        let is_west = |e: &Entry<T>| e.centroid.x < mid.x;

        let split_y = begin + partition(&mut self.entries[begin..end], is_north);
        let split_x_north = begin + partition(&mut self.entries[begin..split_y], is_west);
        let split_x_south = split_y + partition(&mut self.entries[split_y..end], is_west);

        let [nw, ne, sw, se] = split.split4();
        let children = [
            self.build_recursive(nw, begin, split_x_north, depth - 1),
            self.build_recursive(ne, split_x_north, split_y, depth - 1),
            self.build_recursive(sw, split_y, split_x_south, depth - 1),
            self.build_recursive(se, split_x_south, end, depth - 1),
        ];
        self.nodes[id].children = children;

        id
    }
}

/// Moves every item matching `pred` to the front and returns how many matched.
///
/// Linear time, in place, not stable. Two cursors close in from both ends;
/// everything left of `left` matches and nothing from `right` on does.
pub(crate) fn partition<E, F>(items: &mut [E], pred: F) -> usize
where
    F: Fn(&E) -> bool,
{
    let mut left = 0;
    let mut right = items.len();
    loop {
        while left < right && pred(&items[left]) {
            left += 1;
        }
        while left < right && !pred(&items[right - 1]) {
            right -= 1;
        }
        if left >= right {
            return left;
        }
        items.swap(left, right - 1);
        left += 1;
        right -= 1;
    }
}

/// Collects boxes one at a time, then bulk-builds a [`LooseQuadtree`].
///
/// # Example
/// ```
/// use loose_quadtree::QuadtreeBuilder;
///
/// let mut builder = QuadtreeBuilder::with_capacity(3);
/// builder.add(0.0, 0.0, 1.0, 1.0, 'a');
/// builder.add(2.0, 2.0, 3.0, 3.0, 'b');
/// builder.add(0.5, 0.5, 1.5, 1.5, 'c');
/// let tree = builder.build().unwrap();
///
/// let mut results = Vec::new();
/// tree.query_intersecting(&loose_quadtree::Aabb::from_coords(0.7, 0.7, 1.3, 1.3), &mut results);
/// results.sort();
/// assert_eq!(results, [&'a', &'c']);
/// ```
#[derive(Clone, Debug)]
pub struct QuadtreeBuilder<T> {
    boxes: Vec<Aabb>,
    payloads: Vec<T>,
    config: QuadtreeConfig,
}

impl<T> QuadtreeBuilder<T> {
    /// Creates an empty builder with the default configuration.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty builder with room for `capacity` boxes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            boxes: Vec::with_capacity(capacity),
            payloads: Vec::with_capacity(capacity),
            config: QuadtreeConfig::default(),
        }
    }

    /// Uses `config` for the build.
    #[must_use]
    pub fn with_config(mut self, config: QuadtreeConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds a box given as `(min_x, min_y, max_x, max_y)`.
    pub fn add(&mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64, payload: T) {
        self.add_box(Aabb::from_coords(min_x, min_y, max_x, max_y), payload);
    }

    /// Adds a box.
    pub fn add_box(&mut self, aabb: Aabb, payload: T) {
        self.boxes.push(aabb);
        self.payloads.push(payload);
    }

    /// Number of boxes added so far.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns `true` if nothing was added.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Builds the tree.
    ///
    /// # Errors
    /// [`BuildError::EmptyBatch`](crate::BuildError::EmptyBatch) if nothing was added.
    pub fn build(self) -> Result<LooseQuadtree<T>> {
        LooseQuadtree::build_with_config(self.config, &self.boxes, self.payloads)
    }
}

impl<T> Default for QuadtreeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<(Aabb, T)> for QuadtreeBuilder<T> {
    fn extend<I: IntoIterator<Item = (Aabb, T)>>(&mut self, iter: I) {
        for (aabb, payload) in iter {
            self.add_box(aabb, payload);
        }
    }
}

impl<T> FromIterator<(Aabb, T)> for QuadtreeBuilder<T> {
    fn from_iter<I: IntoIterator<Item = (Aabb, T)>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.extend(iter);
        builder
    }
}
