//! Read-only views of the node hierarchy, for debugging and drawing.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::geometry::Aabb;
use crate::tree::{Entry, LooseQuadtree, NO_NODE};

/// One node as seen by [`LooseQuadtree::nodes`].
#[derive(Clone, Debug)]
pub struct NodeView<'a, T> {
    id: usize,
    depth: u32,
    split_box: Aabb,
    loose_bound: Aabb,
    range: Range<usize>,
    is_leaf: bool,
    entries: &'a [Entry<T>],
}

impl<'a, T> NodeView<'a, T> {
    /// Index of the node in the arena.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Distance from the root (the root is at depth 0).
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Quadrant used to split this node: the root's is the hull of all
    /// centroids, every child gets one quarter of its parent's.
    pub fn split_box(&self) -> Aabb {
        self.split_box
    }

    /// Hull of the boxes of every entry below this node.
    pub fn loose_bound(&self) -> Aabb {
        self.loose_bound
    }

    /// Storage range of every entry below this node.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Every entry below this node.
    pub fn entries(&self) -> &'a [Entry<T>] {
        self.entries
    }
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    id: usize,
    depth: u32,
    split_box: Aabb,
    end: usize,
}

/// Pre-order iterator over nodes, returned by [`LooseQuadtree::nodes`] and
/// [`LooseQuadtree::query_nodes`].
#[derive(Clone, Debug)]
pub struct Nodes<'a, T> {
    tree: &'a LooseQuadtree<T>,
    stack: Vec<Frame>,
    /// Only nodes whose loose bound this box overlaps are visited
    filter: Option<Aabb>,
}

impl<T> LooseQuadtree<T> {
    /// Walks every node in pre-order (node ids ascend along the walk).
    ///
    /// # Example
    /// ```
    /// use loose_quadtree::{Aabb, LooseQuadtree};
    ///
    /// let boxes = [Aabb::from_coords(0.0, 0.0, 1.0, 1.0), Aabb::from_coords(8.0, 8.0, 9.0, 9.0)];
    /// let tree = LooseQuadtree::build(&boxes, vec![(), ()]).unwrap();
    /// let leaves = tree.nodes().filter(|n| n.is_leaf()).count();
    /// assert_eq!(leaves, 2);
    /// ```
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self, None)
    }

    /// Walks the nodes a query for `query` descends into: those whose loose
    /// bound it overlaps.
    pub fn query_nodes(&self, query: &Aabb) -> Nodes<'_, T> {
        Nodes::new(self, Some(query.normalized()))
    }
}

impl<'a, T> Nodes<'a, T> {
    fn new(tree: &'a LooseQuadtree<T>, filter: Option<Aabb>) -> Self {
        let mut stack = Vec::new();
        if tree.root != NO_NODE {
            stack.push(Frame {
                id: tree.root,
                depth: 0,
                split_box: tree.split_extent,
                end: tree.entries.len(),
            });
        }
        Self { tree, stack, filter }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = NodeView<'a, T>;

    fn next(&mut self) -> Option<NodeView<'a, T>> {
        let tree = self.tree;
        loop {
            let frame = self.stack.pop()?;
            let loose_bound = tree.node_bounds[frame.id];
            if self.filter.is_some_and(|query| !query.overlaps(&loose_bound)) {
                continue;
            }

            let node = &tree.nodes[frame.id];
            let quadrants = frame.split_box.split4();

            // A child's entries end where the next present sibling's begin.
            let mut end = frame.end;
            for (child, quadrant) in node.children.iter().zip(quadrants).rev() {
                if *child == NO_NODE {
                    continue;
                }
                self.stack.push(Frame {
                    id: *child,
                    depth: frame.depth + 1,
                    split_box: quadrant,
                    end,
                });
                end = tree.node_range_starts[*child];
            }

            let start = tree.node_range_starts[frame.id];
            return Some(NodeView {
                id: frame.id,
                depth: frame.depth,
                split_box: frame.split_box,
                loose_bound,
                range: start..frame.end,
                is_leaf: node.is_leaf(),
                entries: &tree.entries[start..frame.end],
            });
        }
    }
}

impl<T> FusedIterator for Nodes<'_, T> {}
