//! Navigation core for an autonomous agent in a chunked voxel world.
//!
//! The crate answers two questions over streamed, partially-known
//! terrain: "where is the nearest block of type X" and "what sequence
//! of steps gets me from A to B". A network collaborator feeds decoded
//! chunks into the [`WorldIndex`]; the searches in [`nav`] query it
//! node by node and emit positions and block-center waypoint paths for
//! a movement executor to act on.
//!
//! # Design notes
//!
//! - The world is a live, externally mutated resource. Searches read it
//!   directly with no snapshot isolation unless explicitly asked
//!   ([`PathOptions::snapshot`]); block updates arriving mid-search are
//!   simply observed. Cancellation is timeout-only.
//! - Unloaded terrain is an expected state, not an error:
//!   [`BlockLookup`] makes it a first-class lookup outcome, and
//!   lookahead checks during expansion treat unknown cells
//!   optimistically.
//! - Path planning is greedy best-first, not A*; it trades provable
//!   optimality for speed.

pub mod constants;
pub mod error;
pub mod nav;
pub mod world;

// Re-export the working set for convenience
pub use error::{NavError, NavResult};
pub use nav::{
    find_nearest_block, find_path, AgentProfile, BlockSearchOptions, PathOptions, PathResult,
};
pub use world::{BlockId, BlockLookup, BlockRules, Chunk, VoxelPos, WorldIndex};
