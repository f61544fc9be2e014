use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};
use crate::world::core::{BlockId, VoxelPos};

/// A fixed-size 3D grid of block ids with a world-aligned origin.
///
/// Block data is stored x-major: `index = (x * size_y + y) * size_z + z`
/// in local coordinates. By convention producers align `origin` to a
/// 16-block boundary on x and z, but nothing here enforces that; the
/// fast lookup path in [`WorldIndex`](super::WorldIndex) merely
/// exploits it when it holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    origin: VoxelPos,
    size_x: u32,
    size_y: u32,
    size_z: u32,
    blocks: Vec<BlockId>,
}

impl Chunk {
    /// An air-filled chunk.
    pub fn new(origin: VoxelPos, size_x: u32, size_y: u32, size_z: u32) -> Self {
        let volume = (size_x as usize) * (size_y as usize) * (size_z as usize);
        Self {
            origin,
            size_x,
            size_y,
            size_z,
            blocks: vec![BlockId::AIR; volume],
        }
    }

    /// A chunk from a decoded network payload. Fails if the payload
    /// length does not match the declared extents.
    pub fn with_blocks(
        origin: VoxelPos,
        size_x: u32,
        size_y: u32,
        size_z: u32,
        blocks: Vec<BlockId>,
    ) -> NavResult<Self> {
        let volume = (size_x as usize) * (size_y as usize) * (size_z as usize);
        if blocks.len() != volume {
            return Err(NavError::ChunkSizeMismatch {
                expected: volume,
                actual: blocks.len(),
            });
        }
        Ok(Self {
            origin,
            size_x,
            size_y,
            size_z,
            blocks,
        })
    }

    pub fn origin(&self) -> VoxelPos {
        self.origin
    }

    pub fn size_x(&self) -> u32 {
        self.size_x
    }

    pub fn size_y(&self) -> u32 {
        self.size_y
    }

    pub fn size_z(&self) -> u32 {
        self.size_z
    }

    pub fn volume(&self) -> usize {
        self.blocks.len()
    }

    /// Whether a world position falls inside this chunk's extents.
    pub fn contains(&self, pos: VoxelPos) -> bool {
        let local = pos - self.origin;
        local.x >= 0
            && (local.x as u32) < self.size_x
            && local.y >= 0
            && (local.y as u32) < self.size_y
            && local.z >= 0
            && (local.z as u32) < self.size_z
    }

    fn index(&self, lx: u32, ly: u32, lz: u32) -> usize {
        ((lx as usize) * (self.size_y as usize) + (ly as usize)) * (self.size_z as usize)
            + (lz as usize)
    }

    /// Block at a local coordinate, or `None` when out of bounds.
    pub fn get_local(&self, lx: u32, ly: u32, lz: u32) -> Option<BlockId> {
        if lx >= self.size_x || ly >= self.size_y || lz >= self.size_z {
            return None;
        }
        Some(self.blocks[self.index(lx, ly, lz)])
    }

    /// Set a block at a local coordinate. Returns false when out of
    /// bounds.
    pub fn set_local(&mut self, lx: u32, ly: u32, lz: u32, id: BlockId) -> bool {
        if lx >= self.size_x || ly >= self.size_y || lz >= self.size_z {
            return false;
        }
        let idx = self.index(lx, ly, lz);
        self.blocks[idx] = id;
        true
    }

    /// Block at a world position, or `None` when the position is not
    /// inside this chunk.
    pub fn get_world(&self, pos: VoxelPos) -> Option<BlockId> {
        if !self.contains(pos) {
            return None;
        }
        let local = pos - self.origin;
        self.get_local(local.x as u32, local.y as u32, local.z as u32)
    }

    /// Set a block at a world position. Returns false when the position
    /// is not inside this chunk.
    pub fn set_world(&mut self, pos: VoxelPos, id: BlockId) -> bool {
        if !self.contains(pos) {
            return false;
        }
        let local = pos - self.origin;
        self.set_local(local.x as u32, local.y as u32, local.z as u32, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chunk_is_air_filled() {
        let chunk = Chunk::new(VoxelPos::new(0, 0, 0), 4, 4, 4);

        assert_eq!(chunk.volume(), 64);
        assert_eq!(chunk.get_local(3, 3, 3), Some(BlockId::AIR));
        assert_eq!(chunk.get_local(4, 0, 0), None);
    }

    #[test]
    fn test_with_blocks_validates_payload_length() {
        let origin = VoxelPos::new(16, 0, 16);
        let err = Chunk::with_blocks(origin, 2, 2, 2, vec![BlockId::STONE; 7]).unwrap_err();

        assert_eq!(
            err,
            NavError::ChunkSizeMismatch {
                expected: 8,
                actual: 7
            }
        );
        assert!(Chunk::with_blocks(origin, 2, 2, 2, vec![BlockId::STONE; 8]).is_ok());
    }

    #[test]
    fn test_world_coordinate_access() {
        let mut chunk = Chunk::new(VoxelPos::new(16, 0, 32), 16, 128, 16);
        let pos = VoxelPos::new(20, 60, 40);

        assert!(chunk.contains(pos));
        assert!(chunk.set_world(pos, BlockId::DIAMOND_ORE));
        assert_eq!(chunk.get_world(pos), Some(BlockId::DIAMOND_ORE));

        // One short of the origin on each horizontal axis is outside.
        assert!(!chunk.contains(VoxelPos::new(15, 60, 40)));
        assert_eq!(chunk.get_world(VoxelPos::new(15, 60, 40)), None);
        assert!(!chunk.set_world(VoxelPos::new(32, 60, 40), BlockId::DIRT));
    }

    #[test]
    fn test_storage_is_x_major() {
        let mut chunk = Chunk::new(VoxelPos::new(0, 0, 0), 2, 3, 4);
        assert!(chunk.set_local(1, 2, 3, BlockId::STONE));

        // (x * size_y + y) * size_z + z = (1 * 3 + 2) * 4 + 3 = 23
        assert_eq!(chunk.blocks[23], BlockId::STONE);
    }
}
