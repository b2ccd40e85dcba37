//! Overlap queries.
//!
//! Every query walks the tree depth-first from the root, skips any subtree
//! whose loose bound the query box misses, and tests the entries of each
//! reached leaf against their own boxes. Results come out in traversal
//! order, each matching entry exactly once.
//!
//! Three ways to consume the matches:
//!
//! - [`LooseQuadtree::query_intersecting`] appends to a caller-owned `Vec`
//! - [`LooseQuadtree::query`] returns an iterator that walks the tree lazily
//! - [`LooseQuadtree::query_linked`] threads the matches through a link array
//!   owned by the tree and hands back an iterator over it, without allocating
//!
//! The first two take `&self` and can run concurrently on a shared tree.

use std::iter::FusedIterator;
use std::slice;

use crate::geometry::Aabb;
use crate::tree::{Entry, LooseQuadtree, NO_NODE};

/// End of a `query_links` chain.
const NO_LINK: usize = usize::MAX;

impl<T> LooseQuadtree<T> {
    /// Appends the payload of every entry whose box overlaps `query`.
    ///
    /// `results` is not cleared first, so one vector can collect several queries.
    ///
    /// # Example
    /// ```
    /// use loose_quadtree::{Aabb, LooseQuadtree};
    ///
    /// let boxes = [Aabb::from_coords(0.0, 0.0, 1.0, 1.0), Aabb::from_coords(2.0, 2.0, 3.0, 3.0)];
    /// let tree = LooseQuadtree::build(&boxes, vec![10, 20]).unwrap();
    ///
    /// let mut results = Vec::new();
    /// tree.query_intersecting(&Aabb::from_coords(0.5, 0.5, 0.6, 0.6), &mut results);
    /// assert_eq!(results, [&10]);
    /// ```
    pub fn query_intersecting<'a>(&'a self, query: &Aabb, results: &mut Vec<&'a T>) {
        let entries: &'a [Entry<T>] = &self.entries;
        let before = results.len();
        self.for_each_match(query, |i| results.push(&entries[i].payload));
        log::trace!("query {:?}: {} matches", query, results.len() - before);
    }

    /// Lazily yields the payload of every entry whose box overlaps `query`.
    ///
    /// The iterator owns a small traversal stack, so it borrows the tree
    /// immutably and any number of them may be alive at once.
    pub fn query(&self, query: &Aabb) -> Query<'_, T> {
        Query::new(self, query.normalized())
    }

    /// Number of entries whose box overlaps `query`.
    pub fn query_count(&self, query: &Aabb) -> usize {
        let mut count = 0;
        self.for_each_match(query, |_| count += 1);
        count
    }

    /// Collects the matches into the tree's own link array and iterates over it.
    ///
    /// No allocation happens per call: every entry has one "next match" slot
    /// in a buffer owned by the tree, and this call overwrites that buffer.
    /// Only one such query can be in flight per tree, which the `&mut self`
    /// receiver enforces. Use [`LooseQuadtree::query`] or
    /// [`LooseQuadtree::query_intersecting`] to run queries concurrently.
    ///
    /// Matches come out most recently found first.
    pub fn query_linked(&mut self, query: &Aabb) -> LinkedQuery<'_, T> {
        let mut links = std::mem::take(&mut self.query_links);
        links.resize(self.entries.len(), NO_LINK);

        let mut head = NO_LINK;
        let mut count = 0_usize;
        self.for_each_match(query, |i| {
            links[i] = head;
            head = i;
            count += 1;
        });
        log::trace!("linked query {:?}: {} matches", query, count);

        self.query_links = links;
        LinkedQuery {
            tree: self,
            head,
            remaining: count,
        }
    }

    /// Calls `f` with the storage index of every matching entry.
    pub(crate) fn for_each_match<F>(&self, query: &Aabb, mut f: F)
    where
        F: FnMut(usize),
    {
        if self.root == NO_NODE {
            return;
        }
        let query = query.normalized();
        self.match_recursive(&query, self.root, &mut f);
    }

    fn match_recursive<F>(&self, query: &Aabb, id: usize, f: &mut F)
    where
        F: FnMut(usize),
    {
        if !query.overlaps(&self.node_bounds[id]) {
            return;
        }

        let node = &self.nodes[id];
        if !node.is_leaf() {
            for &child in &node.children {
                if child != NO_NODE {
                    self.match_recursive(query, child, f);
                }
            }
            return;
        }

        let start = self.node_range_starts[id];
        for (offset, entry) in self.leaf_entries(id).iter().enumerate() {
            if query.overlaps(&entry.aabb) {
                f(start + offset);
            }
        }
    }
}

/// Lazy iterator returned by [`LooseQuadtree::query`].
#[derive(Clone, Debug)]
pub struct Query<'a, T> {
    tree: &'a LooseQuadtree<T>,
    query: Aabb,
    /// Nodes still to visit
    stack: Vec<usize>,
    /// Remaining entries of the leaf being scanned
    leaf: slice::Iter<'a, Entry<T>>,
}

impl<'a, T> Query<'a, T> {
    fn new(tree: &'a LooseQuadtree<T>, query: Aabb) -> Self {
        // Each level leaves at most three siblings behind on the stack.
        let mut stack = Vec::with_capacity(3 * tree.config.max_depth() as usize + 1);
        if tree.root != NO_NODE {
            stack.push(tree.root);
        }
        Self {
            tree,
            query,
            stack,
            leaf: slice::Iter::default(),
        }
    }

    /// The (normalized) query box.
    pub fn query_box(&self) -> &Aabb {
        &self.query
    }
}

impl<'a, T> Iterator for Query<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            for entry in self.leaf.by_ref() {
                if self.query.overlaps(&entry.aabb) {
                    return Some(&entry.payload);
                }
            }

            let id = self.stack.pop()?;
            if !self.query.overlaps(&self.tree.node_bounds[id]) {
                continue;
            }

            let node = &self.tree.nodes[id];
            if node.is_leaf() {
                self.leaf = self.tree.leaf_entries(id).iter();
            } else {
                // Reversed so the north-west child is visited first.
                self.stack
                    .extend(node.children.iter().rev().copied().filter(|&c| c != NO_NODE));
            }
        }
    }
}

impl<T> FusedIterator for Query<'_, T> {}

/// Iterator returned by [`LooseQuadtree::query_linked`].
///
/// Walks the per-entry link chain written by the query. Holding it keeps the
/// tree borrowed, so no other linked query can overwrite the chain meanwhile.
#[derive(Debug)]
pub struct LinkedQuery<'a, T> {
    tree: &'a LooseQuadtree<T>,
    head: usize,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedQuery<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.head == NO_LINK {
            return None;
        }
        let index = self.head;
        self.head = self.tree.query_links[index];
        self.remaining -= 1;
        Some(&self.tree.entries[index].payload)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LinkedQuery<'_, T> {}

impl<T> FusedIterator for LinkedQuery<'_, T> {}
