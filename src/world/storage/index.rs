use rustc_hash::FxHashMap;

use crate::constants::{CHUNK_ALIGN, WORLD_CEILING, WORLD_FLOOR};
use crate::error::{NavError, NavResult};
use crate::world::core::{BlockId, VoxelPos};

use super::Chunk;

/// Result of a block lookup.
///
/// Unloaded terrain is an expected outcome on a streamed world, not an
/// error; the searches lean on this to treat unknown cells as "skip" or
/// "permit" without exception-style control flow. Callers that need a
/// definite value use [`WorldIndex::get`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockLookup {
    /// The position is covered by a loaded chunk (or a world-boundary
    /// sentinel) and holds this block.
    Known(BlockId),
    /// No loaded chunk covers the position.
    Unloaded,
}

impl BlockLookup {
    pub fn known(self) -> Option<BlockId> {
        match self {
            BlockLookup::Known(id) => Some(id),
            BlockLookup::Unloaded => None,
        }
    }

    pub fn is_unloaded(self) -> bool {
        matches!(self, BlockLookup::Unloaded)
    }

    /// True when the block is known and equals `id`. Unloaded terrain
    /// never matches.
    pub fn matches(self, id: BlockId) -> bool {
        self.known() == Some(id)
    }

    /// Optimistic predicate check: unloaded terrain permits. This is
    /// the propagation policy for lookahead checks (headroom, footing,
    /// hazards) made during search expansion.
    pub fn permits(self, predicate: impl FnOnce(BlockId) -> bool) -> bool {
        match self {
            BlockLookup::Known(id) => predicate(id),
            BlockLookup::Unloaded => true,
        }
    }
}

/// The loaded portion of the world: a map from chunk origin to chunk.
///
/// The index exclusively owns its chunks but their lifecycle is driven
/// entirely from outside: the network layer inserts, replaces and
/// removes chunks as the server streams them, and may mutate blocks
/// between (or during) searches. Reads always see the live state; there
/// is no snapshotting here.
#[derive(Debug, Clone, Default)]
pub struct WorldIndex {
    chunks: FxHashMap<VoxelPos, Chunk>,
}

impl WorldIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the chunk at its origin key.
    pub fn add_chunk(&mut self, chunk: Chunk) {
        self.chunks.insert(chunk.origin(), chunk);
    }

    /// Remove the chunk at an origin key, if loaded.
    pub fn remove_chunk(&mut self, origin: VoxelPos) -> Option<Chunk> {
        self.chunks.remove(&origin)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    /// A frozen copy of the currently loaded chunk set.
    pub fn snapshot(&self) -> WorldIndex {
        self.clone()
    }

    /// The 16-aligned origin a conforming producer would have used for
    /// the chunk containing `pos`.
    fn aligned_origin(pos: VoxelPos) -> VoxelPos {
        VoxelPos::new(
            pos.x - pos.x.rem_euclid(CHUNK_ALIGN),
            0,
            pos.z - pos.z.rem_euclid(CHUNK_ALIGN),
        )
    }

    /// Find the loaded chunk containing a position.
    ///
    /// Fast path: direct lookup at the 16-aligned horizontal origin,
    /// verified by a containment check so a non-conforming chunk at
    /// that key cannot satisfy the wrong position. Fallback: linear
    /// scan of all loaded chunks, because producers are not guaranteed
    /// to respect the alignment convention and the agent only has a
    /// handful of chunks loaded at a time.
    pub fn find_chunk(&self, pos: VoxelPos) -> Option<&Chunk> {
        if let Some(chunk) = self.chunks.get(&Self::aligned_origin(pos)) {
            if chunk.contains(pos) {
                return Some(chunk);
            }
        }
        self.chunks.values().find(|chunk| chunk.contains(pos))
    }

    /// Mutable variant of [`find_chunk`](Self::find_chunk).
    pub fn find_chunk_mut(&mut self, pos: VoxelPos) -> Option<&mut Chunk> {
        let aligned = Self::aligned_origin(pos);
        let fast_hit = self
            .chunks
            .get(&aligned)
            .map_or(false, |chunk| chunk.contains(pos));
        if fast_hit {
            return self.chunks.get_mut(&aligned);
        }
        self.chunks.values_mut().find(|chunk| chunk.contains(pos))
    }

    /// Three-valued block lookup.
    ///
    /// Positions at or above the world ceiling always read as air and
    /// positions at or below the floor always read as bedrock,
    /// regardless of chunk state.
    pub fn lookup(&self, pos: VoxelPos) -> BlockLookup {
        if pos.y >= WORLD_CEILING {
            return BlockLookup::Known(BlockId::AIR);
        }
        if pos.y <= WORLD_FLOOR {
            return BlockLookup::Known(BlockId::BEDROCK);
        }
        match self.find_chunk(pos).and_then(|chunk| chunk.get_world(pos)) {
            Some(id) => BlockLookup::Known(id),
            None => BlockLookup::Unloaded,
        }
    }

    /// Strict block read; unloaded terrain is an error here.
    pub fn get(&self, pos: VoxelPos) -> NavResult<BlockId> {
        self.lookup(pos)
            .known()
            .ok_or(NavError::ChunkNotLoaded { pos })
    }

    /// Mutate a block in place. The ceiling/floor sentinels do not
    /// apply: a position outside every loaded chunk fails regardless of
    /// its y.
    pub fn set(&mut self, pos: VoxelPos, id: BlockId) -> NavResult<()> {
        match self.find_chunk_mut(pos) {
            Some(chunk) => {
                chunk.set_world(pos, id);
                Ok(())
            }
            None => Err(NavError::ChunkNotLoaded { pos }),
        }
    }
}
