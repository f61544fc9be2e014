use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a block type.
///
/// The wire protocol carries block types as single bytes, so the id is
/// a `u8`. Classification into walkable/breakable/etc. lives in
/// [`BlockRules`](super::BlockRules), not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct BlockId(pub u8);

impl Default for BlockId {
    fn default() -> Self {
        BlockId::AIR
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BlockId::AIR => write!(f, "Air"),
            BlockId::STONE => write!(f, "Stone"),
            BlockId::GRASS => write!(f, "Grass"),
            BlockId::DIRT => write!(f, "Dirt"),
            BlockId::COBBLESTONE => write!(f, "Cobblestone"),
            BlockId::PLANKS => write!(f, "Planks"),
            BlockId::SAPLING => write!(f, "Sapling"),
            BlockId::BEDROCK => write!(f, "Bedrock"),
            BlockId::WATER => write!(f, "Water"),
            BlockId::SPRING => write!(f, "Water Spring"),
            BlockId::LAVA => write!(f, "Lava"),
            BlockId::LAVA_SPRING => write!(f, "Lava Spring"),
            BlockId::SAND => write!(f, "Sand"),
            BlockId::GRAVEL => write!(f, "Gravel"),
            BlockId::GOLD_ORE => write!(f, "Gold Ore"),
            BlockId::IRON_ORE => write!(f, "Iron Ore"),
            BlockId::COAL_ORE => write!(f, "Coal Ore"),
            BlockId::LOG => write!(f, "Log"),
            BlockId::LEAVES => write!(f, "Leaves"),
            BlockId::TORCH => write!(f, "Torch"),
            BlockId::DIAMOND_ORE => write!(f, "Diamond Ore"),
            BlockId::FENCE => write!(f, "Fence"),
            _ => write!(f, "Block({})", self.0),
        }
    }
}

impl BlockId {
    pub const AIR: BlockId = BlockId(0);
    pub const STONE: BlockId = BlockId(1);
    pub const GRASS: BlockId = BlockId(2);
    pub const DIRT: BlockId = BlockId(3);
    pub const COBBLESTONE: BlockId = BlockId(4);
    pub const PLANKS: BlockId = BlockId(5);
    pub const SAPLING: BlockId = BlockId(6);
    pub const BEDROCK: BlockId = BlockId(7);
    pub const WATER: BlockId = BlockId(8);
    pub const SPRING: BlockId = BlockId(9);
    pub const LAVA: BlockId = BlockId(10);
    pub const LAVA_SPRING: BlockId = BlockId(11);
    pub const SAND: BlockId = BlockId(12);
    pub const GRAVEL: BlockId = BlockId(13);
    pub const GOLD_ORE: BlockId = BlockId(14);
    pub const IRON_ORE: BlockId = BlockId(15);
    pub const COAL_ORE: BlockId = BlockId(16);
    pub const LOG: BlockId = BlockId(17);
    pub const LEAVES: BlockId = BlockId(18);
    pub const TORCH: BlockId = BlockId(50);
    pub const DIAMOND_ORE: BlockId = BlockId(56);
    pub const FENCE: BlockId = BlockId(85);

    /// Create a new BlockId from a raw u8 value.
    pub const fn new(id: u8) -> Self {
        BlockId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(BlockId::GRAVEL.to_string(), "Gravel");
        assert_eq!(BlockId::new(200).to_string(), "Block(200)");
    }

    #[test]
    fn test_default_is_air() {
        assert_eq!(BlockId::default(), BlockId::AIR);
    }
}
