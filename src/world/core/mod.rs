//! Core world data types.
//!
//! The fundamental types the rest of the crate is built on: block ids,
//! integer block positions, and the externally supplied classification
//! table.

mod block;
mod classify;
mod position;

pub use block::BlockId;
pub use classify::BlockRules;
pub use position::VoxelPos;
