//! Error types for building a quadtree.

use thiserror::Error;

/// Errors raised when a batch of boxes cannot be turned into a tree.
///
/// Both variants describe invalid input: nothing is built and, for
/// [`LooseQuadtree::rebuild`](crate::LooseQuadtree::rebuild), the previous
/// tree is left exactly as it was.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    /// No boxes were supplied.
    #[error("cannot build a quadtree from an empty batch")]
    EmptyBatch,

    /// The number of boxes and payloads differ.
    #[error("box count ({boxes}) does not match payload count ({payloads})")]
    LengthMismatch {
        /// Number of boxes supplied
        boxes: usize,
        /// Number of payloads supplied
        payloads: usize,
    },
}

/// Result alias for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Checks the batch shape before any tree state is touched.
pub(crate) fn validate_batch(boxes: usize, payloads: usize) -> Result<()> {
    if boxes != payloads {
        return Err(BuildError::LengthMismatch { boxes, payloads });
    }
    if boxes == 0 {
        return Err(BuildError::EmptyBatch);
    }
    Ok(())
}
