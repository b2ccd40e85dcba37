//! Loose quadtree storage.
//!
//! The tree is a flat arena. Nodes live in one vector and refer to their
//! children by index, with [`NO_NODE`] standing for "no child". Three more
//! vectors run in parallel:
//!
//! - `node_bounds[id]`: the loose bound of node `id`, i.e. the hull of the
//!   boxes of every entry below it
//! - `node_range_starts[id]`: first entry of node `id`; the array holds one
//!   extra trailing element equal to the entry count. Nodes are numbered in
//!   pre-order, so a leaf owns `node_range_starts[id]..node_range_starts[id + 1]`
//! - `entries`: the input boxes with their payloads, reordered during build
//!   so that every node's entries are contiguous
//!
//! Construction lives in [`crate::builder`], traversal in [`crate::query`].

use crate::config::QuadtreeConfig;
use crate::error::{self, Result};
use crate::geometry::{Aabb, Point};

/// Sentinel child link meaning "no node".
pub(crate) const NO_NODE: usize = usize::MAX;

/// A stored box, its cached centroid and the caller's payload.
#[derive(Clone, Debug)]
pub struct Entry<T> {
    pub(crate) aabb: Aabb,
    pub(crate) centroid: Point,
    pub(crate) payload: T,
}

impl<T> Entry<T> {
    pub(crate) fn new(aabb: Aabb, payload: T) -> Self {
        let aabb = aabb.normalized();
        Self {
            aabb,
            centroid: aabb.center(),
            payload,
        }
    }

    /// The entry's box.
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Midpoint of the box at build time. Decides quadrant membership.
    pub fn centroid(&self) -> Point {
        self.centroid
    }

    /// The caller's payload.
    pub fn payload(&self) -> &T {
        &self.payload
    }
}

/// Child links of one node, in `[nw, ne, sw, se]` order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) children: [usize; 4],
}

impl Node {
    pub(crate) const LEAF: Self = Self { children: [NO_NODE; 4] };

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.iter().all(|&c| c == NO_NODE)
    }
}

/// Immutable loose quadtree over a batch of boxes with payloads.
///
/// Built in one pass from a batch of boxes; there is no incremental insert or
/// remove. A tree that was never built (see [`LooseQuadtree::new`]) is valid
/// and answers every query with nothing.
///
/// # Example
/// ```
/// use loose_quadtree::{Aabb, LooseQuadtree};
///
/// let boxes = [
///     Aabb::from_coords(0.0, 0.0, 2.0, 2.0),
///     Aabb::from_coords(10.0, 10.0, 12.0, 12.0),
/// ];
/// let tree = LooseQuadtree::build(&boxes, vec!["A", "B"]).unwrap();
///
/// let hits: Vec<_> = tree.query(&Aabb::from_coords(1.0, 1.0, 1.0, 1.0)).collect();
/// assert_eq!(hits, [&"A"]);
/// assert_eq!(tree.query_count(&Aabb::from_coords(-1.0, -1.0, 13.0, 13.0)), 2);
/// assert_eq!(tree.query_count(&Aabb::from_coords(5.0, 5.0, 5.0, 5.0)), 0);
/// ```
#[derive(Clone, Debug)]
pub struct LooseQuadtree<T> {
    pub(crate) config: QuadtreeConfig,
    /// Root node index, `NO_NODE` until built
    pub(crate) root: usize,
    /// Hull of all centroids; the split box of the root
    pub(crate) split_extent: Aabb,
    pub(crate) nodes: Vec<Node>,
    pub(crate) node_bounds: Vec<Aabb>,
    pub(crate) node_range_starts: Vec<usize>,
    pub(crate) entries: Vec<Entry<T>>,
    /// Per-entry "next match" links used by `query_linked`
    pub(crate) query_links: Vec<usize>,
}

impl<T> LooseQuadtree<T> {
    /// Creates an unbuilt tree with the default configuration.
    pub fn new() -> Self {
        Self::with_config(QuadtreeConfig::default())
    }

    /// Creates an unbuilt tree that will use `config` when rebuilt.
    pub fn with_config(config: QuadtreeConfig) -> Self {
        Self {
            config,
            root: NO_NODE,
            split_extent: Aabb::EMPTY,
            nodes: Vec::new(),
            node_bounds: Vec::new(),
            node_range_starts: Vec::new(),
            entries: Vec::new(),
            query_links: Vec::new(),
        }
    }

    /// Builds a tree with the default configuration.
    ///
    /// `boxes[i]` is paired with `payloads[i]`.
    ///
    /// # Errors
    /// [`BuildError::EmptyBatch`](crate::BuildError::EmptyBatch) when no boxes
    /// are given, [`BuildError::LengthMismatch`](crate::BuildError::LengthMismatch)
    /// when the two inputs differ in length.
    pub fn build(boxes: &[Aabb], payloads: Vec<T>) -> Result<Self> {
        Self::build_with_config(QuadtreeConfig::default(), boxes, payloads)
    }

    /// Builds a tree with an explicit configuration.
    ///
    /// # Errors
    /// Same as [`LooseQuadtree::build`].
    pub fn build_with_config(
        config: QuadtreeConfig,
        boxes: &[Aabb],
        payloads: Vec<T>,
    ) -> Result<Self> {
        let mut tree = Self::with_config(config);
        tree.rebuild(boxes, payloads)?;
        Ok(tree)
    }

    /// Replaces the whole tree with one built from a new batch.
    ///
    /// Allocations of the previous tree are reused. On error the previous
    /// tree is left untouched.
    ///
    /// # Errors
    /// Same as [`LooseQuadtree::build`].
    pub fn rebuild(&mut self, boxes: &[Aabb], payloads: Vec<T>) -> Result<()> {
        error::validate_batch(boxes.len(), payloads.len())?;

        self.entries.clear();
        self.entries.reserve(boxes.len());
        self.entries
            .extend(boxes.iter().zip(payloads).map(|(aabb, payload)| Entry::new(*aabb, payload)));

        self.build_index();
        Ok(())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the tree holds no entries (it was never built).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configuration used by the last build.
    pub fn config(&self) -> &QuadtreeConfig {
        &self.config
    }

    /// Hull of every stored box, or [`Aabb::EMPTY`] for an unbuilt tree.
    pub fn bounds(&self) -> Aabb {
        if self.root == NO_NODE {
            Aabb::EMPTY
        } else {
            self.node_bounds[self.root]
        }
    }

    /// Hull of all entry centroids: the split box handed to the root.
    pub fn split_extent(&self) -> Aabb {
        self.split_extent
    }

    /// Number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaf nodes.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Depth of the deepest leaf; zero for a single-node tree or an unbuilt one.
    pub fn depth(&self) -> u32 {
        self.nodes().map(|view| view.depth()).max().unwrap_or(0)
    }

    /// Entries in storage order (reordered by the build).
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Entries owned by leaf `id`. Only meaningful for leaves: the entries of
    /// an internal node are spread over its descendants.
    #[inline]
    pub(crate) fn leaf_entries(&self, id: usize) -> &[Entry<T>] {
        &self.entries[self.node_range_starts[id]..self.node_range_starts[id + 1]]
    }
}

impl<T> Default for LooseQuadtree<T> {
    fn default() -> Self {
        Self::new()
    }
}
