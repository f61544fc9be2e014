//! Block classification rules.
//!
//! The traversal rules care about four non-exclusive sets of block
//! types: walkable (the agent can occupy the cell), breakable (the
//! agent can mine through in destructive mode), fall hazards (unstable
//! or liquid material that must not be undermined), and fence-like
//! (unsafe footing). The table is supplied externally at startup and
//! read-only afterwards; it is passed by reference into the searches
//! rather than living in global state.

use std::io::Read;

use rustc_hash::FxHashSet;
use serde::Deserialize;

use super::BlockId;

/// Immutable classification table over block type ids.
#[derive(Debug, Clone)]
pub struct BlockRules {
    walkable: FxHashSet<BlockId>,
    breakable: FxHashSet<BlockId>,
    fall_hazard: FxHashSet<BlockId>,
    fence_like: FxHashSet<BlockId>,
}

/// On-disk form of the classification table.
#[derive(Debug, Deserialize)]
struct RulesFile {
    walkable: Vec<BlockId>,
    breakable: Vec<BlockId>,
    #[serde(default)]
    fall_hazard: Vec<BlockId>,
    #[serde(default)]
    fence_like: Vec<BlockId>,
}

impl BlockRules {
    pub fn new(
        walkable: impl IntoIterator<Item = BlockId>,
        breakable: impl IntoIterator<Item = BlockId>,
        fall_hazard: impl IntoIterator<Item = BlockId>,
        fence_like: impl IntoIterator<Item = BlockId>,
    ) -> Self {
        Self {
            walkable: walkable.into_iter().collect(),
            breakable: breakable.into_iter().collect(),
            fall_hazard: fall_hazard.into_iter().collect(),
            fence_like: fence_like.into_iter().collect(),
        }
    }

    /// Load an externally supplied table from JSON. The format is four
    /// arrays of raw block ids; `fall_hazard` and `fence_like` may be
    /// omitted.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        let file: RulesFile = serde_json::from_str(json)?;
        Ok(Self::from(file))
    }

    /// Like [`from_json_str`](Self::from_json_str), reading from any
    /// `Read` source.
    pub fn from_json_reader(reader: impl Read) -> serde_json::Result<Self> {
        let file: RulesFile = serde_json::from_reader(reader)?;
        Ok(Self::from(file))
    }

    /// Default classification for the classic survival block set.
    pub fn minecraft_classic() -> Self {
        Self::new(
            [
                BlockId::AIR,
                BlockId::SAPLING,
                BlockId::WATER,
                BlockId::SPRING,
                BlockId::TORCH,
            ],
            [
                BlockId::STONE,
                BlockId::GRASS,
                BlockId::DIRT,
                BlockId::COBBLESTONE,
                BlockId::PLANKS,
                BlockId::SAND,
                BlockId::GRAVEL,
                BlockId::GOLD_ORE,
                BlockId::IRON_ORE,
                BlockId::COAL_ORE,
                BlockId::LOG,
                BlockId::LEAVES,
                BlockId::DIAMOND_ORE,
            ],
            [
                BlockId::GRAVEL,
                BlockId::SAND,
                BlockId::WATER,
                BlockId::SPRING,
                BlockId::LAVA,
                BlockId::LAVA_SPRING,
            ],
            [BlockId::FENCE],
        )
    }

    /// The agent can stand in this cell without mining.
    pub fn is_walkable(&self, id: BlockId) -> bool {
        self.walkable.contains(&id)
    }

    /// The agent can mine through this cell in destructive mode.
    pub fn is_breakable(&self, id: BlockId) -> bool {
        self.breakable.contains(&id)
    }

    /// Unstable or liquid material that may collapse when the block
    /// under it is broken.
    pub fn is_fall_hazard(&self, id: BlockId) -> bool {
        self.fall_hazard.contains(&id)
    }

    /// Fence-like footing the agent cannot safely stand on top of.
    pub fn is_fence(&self, id: BlockId) -> bool {
        self.fence_like.contains(&id)
    }

    /// Whether a cell can be entered: walkable, or breakable when the
    /// search is allowed to mine.
    pub fn traversable(&self, id: BlockId, destructive: bool) -> bool {
        self.is_walkable(id) || (destructive && self.is_breakable(id))
    }
}

impl From<RulesFile> for BlockRules {
    fn from(file: RulesFile) -> Self {
        Self::new(file.walkable, file.breakable, file.fall_hazard, file.fence_like)
    }
}
