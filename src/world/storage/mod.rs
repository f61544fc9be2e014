//! Chunk storage and the world index.

mod chunk;
mod index;

pub use chunk::Chunk;
pub use index::{BlockLookup, WorldIndex};
