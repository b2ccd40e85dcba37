//! Build parameters.

/// Default maximum depth below the root.
pub const DEFAULT_MAX_DEPTH: u32 = 4;

/// Hard cap on [`QuadtreeConfig::max_depth`]. Deeper requests are clamped.
pub const MAX_SUPPORTED_DEPTH: u32 = 32;

/// Default number of entries a node may hold before it is split.
pub const DEFAULT_LEAF_CAPACITY: usize = 1;

/// Controls how far the builder subdivides.
///
/// A node becomes a leaf once it holds at most `leaf_capacity` entries or
/// once `max_depth` levels have been spent. The defaults split every node
/// holding more than one entry, down to depth 4.
///
/// # Example
/// ```
/// use loose_quadtree::QuadtreeConfig;
///
/// let config = QuadtreeConfig::default().with_max_depth(8).with_leaf_capacity(16);
/// assert_eq!(config.max_depth(), 8);
/// assert_eq!(config.leaf_capacity(), 16);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuadtreeConfig {
    max_depth: u32,
    leaf_capacity: usize,
}

impl QuadtreeConfig {
    /// Creates a configuration with the default depth and leaf capacity.
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            leaf_capacity: DEFAULT_LEAF_CAPACITY,
        }
    }

    /// Sets the maximum depth, clamped to [`MAX_SUPPORTED_DEPTH`].
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        if max_depth > MAX_SUPPORTED_DEPTH {
            log::warn!("max depth {max_depth} clamped to {MAX_SUPPORTED_DEPTH}");
        }
        self.max_depth = max_depth.min(MAX_SUPPORTED_DEPTH);
        self
    }

    /// Sets the number of entries a leaf may hold. Zero is treated as one.
    #[must_use]
    pub fn with_leaf_capacity(mut self, leaf_capacity: usize) -> Self {
        self.leaf_capacity = leaf_capacity.max(1);
        self
    }

    /// Maximum depth below the root.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Entries a node may hold without being split.
    pub fn leaf_capacity(&self) -> usize {
        self.leaf_capacity
    }
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self::new()
    }
}
