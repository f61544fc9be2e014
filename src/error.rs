//! Error handling for the navigation core.
//!
//! Unavailable terrain encountered *during* traversal is not an error;
//! it is modeled as [`BlockLookup::Unloaded`](crate::world::BlockLookup)
//! and the searches decide what it means. The variants here cover the
//! cases where a caller asked for something definite and did not get it.

use std::time::Duration;

use thiserror::Error;

use crate::world::{BlockId, VoxelPos};

/// Result type for navigation operations.
pub type NavResult<T> = Result<T, NavError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavError {
    /// The requested position falls outside every loaded chunk.
    #[error("chunk not loaded at {pos}")]
    ChunkNotLoaded { pos: VoxelPos },

    /// The wall-clock budget ran out before the search reached a
    /// definitive answer. `last_distance` is how far from the start the
    /// frontier had gotten, for diagnostics; no partial result survives.
    #[error("search budget of {budget:?} exceeded, frontier was {last_distance:.1} blocks out")]
    SearchTimeout {
        budget: Duration,
        last_distance: f64,
    },

    /// The path start is not a walkable block.
    #[error("start block {block} at {pos} is not walkable")]
    UnwalkableStart { pos: VoxelPos, block: BlockId },

    /// The path goal (or the block above it) is not traversable.
    #[error("goal block {block} at {pos} is not walkable")]
    UnwalkableGoal { pos: VoxelPos, block: BlockId },

    /// A decoded chunk payload does not match the declared extents.
    #[error("chunk payload holds {actual} blocks, expected {expected}")]
    ChunkSizeMismatch { expected: usize, actual: usize },
}
