//! World extent and search budget constants.

use std::time::Duration;

/// Chunk origins are conventionally aligned to this boundary on the two
/// horizontal axes. An assumed producer convention, not an enforced
/// invariant; see `WorldIndex::find_chunk`.
pub const CHUNK_ALIGN: i32 = 16;

/// Positions with y at or above this always read as air.
pub const WORLD_CEILING: i32 = 128;

/// Positions with y at or below this always read as bedrock.
pub const WORLD_FLOOR: i32 = 0;

/// Default wall-clock budget for block searches and path planning.
pub const DEFAULT_SEARCH_BUDGET: Duration = Duration::from_secs(10);
