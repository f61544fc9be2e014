//! Bounded breadth-first search for the nearest block of a given type.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::debug;
use rustc_hash::FxHashSet;

use crate::constants::DEFAULT_SEARCH_BUDGET;
use crate::error::{NavError, NavResult};
use crate::world::{BlockId, BlockLookup, VoxelPos, WorldIndex};

/// Bounds for a nearest-block search.
#[derive(Debug, Clone)]
pub struct BlockSearchOptions {
    /// Wall-clock budget for the whole search.
    pub timeout: Duration,
    /// Euclidean radius from the source beyond which neighbors are not
    /// expanded. `None` searches until the frontier empties or the
    /// budget runs out; note that the world-boundary sentinel planes
    /// read as air/bedrock everywhere, so an unbounded search over them
    /// only ever stops on the budget.
    pub max_dist: Option<f64>,
}

impl Default for BlockSearchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_SEARCH_BUDGET,
            max_dist: None,
        }
    }
}

/// Find the nearest block of type `target`, breadth-first over the
/// 6-connected neighbor graph from `source`.
///
/// Unloaded neighbors are neither matches nor errors: the search skips
/// them without expanding into them, so unexplored territory never
/// consumes budget. `Ok(None)` means the target definitely does not
/// exist within the searched region, a distinct outcome from
/// [`NavError::SearchTimeout`], which means the search was cut short.
pub fn find_nearest_block(
    world: &WorldIndex,
    source: VoxelPos,
    target: BlockId,
    options: &BlockSearchOptions,
) -> NavResult<Option<VoxelPos>> {
    let started = Instant::now();

    let mut visited = FxHashSet::default();
    visited.insert(source);
    let mut frontier = VecDeque::new();
    frontier.push_back(source);

    while let Some(pos) = frontier.pop_front() {
        if started.elapsed() > options.timeout {
            let last_distance = pos.distance(source);
            debug!(
                "block search for {} timed out with frontier {:.1} blocks out",
                target, last_distance
            );
            return Err(NavError::SearchTimeout {
                budget: options.timeout,
                last_distance,
            });
        }

        for offset in VoxelPos::FACE_NEIGHBORS {
            let next = pos + offset;
            if let Some(limit) = options.max_dist {
                if next.distance(source) > limit {
                    continue;
                }
            }
            if visited.contains(&next) {
                continue;
            }
            match world.lookup(next) {
                BlockLookup::Unloaded => continue,
                BlockLookup::Known(id) if id == target => return Ok(Some(next)),
                BlockLookup::Known(_) => {
                    visited.insert(next);
                    frontier.push_back(next);
                }
            }
        }
    }

    Ok(None)
}
