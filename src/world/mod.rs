//! The voxel world: block types, chunks, and the index over the loaded
//! portion of the map.
//!
//! Chunks simply appear and disappear as the network collaborator
//! dictates; the index never loads or evicts anything on its own.

pub mod core;
pub mod storage;

pub use self::core::{BlockId, BlockRules, VoxelPos};
pub use storage::{BlockLookup, Chunk, WorldIndex};
