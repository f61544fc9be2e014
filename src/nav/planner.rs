//! Greedy best-first path planning over the world index.
//!
//! Deliberately not full A*: nodes are ranked purely by their heuristic
//! distance to the goal (plus any mining penalty), trading provable
//! optimality for speed on open terrain. The search honors the agent's
//! two-block vertical footprint, refuses fence footing, and in
//! destructive mode refuses to mine where unstable material would
//! collapse onto the agent.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use cgmath::Point3;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::constants::DEFAULT_SEARCH_BUDGET;
use crate::error::{NavError, NavResult};
use crate::world::{BlockLookup, BlockRules, VoxelPos, WorldIndex};

/// Mining characteristics of the agent, used to estimate the cost of
/// breaking a block when no fixed penalty is configured.
#[derive(Debug, Clone, Copy)]
pub struct AgentProfile {
    /// Movement speed in blocks per second.
    pub speed: f64,
    /// Seconds per game tick.
    pub target_tick: f64,
}

impl AgentProfile {
    /// Distance-equivalent cost of clearing one block: it takes about
    /// three game ticks, during which the agent could have moved.
    fn break_penalty(&self) -> f64 {
        self.speed * self.target_tick * 3.0
    }
}

/// Configuration for a single planning call.
#[derive(Debug, Clone, Default)]
pub struct PathOptions {
    /// Allow the path to terminate at unloaded terrain instead of
    /// failing; the result's `complete` flag reports whether the goal
    /// was genuinely reached.
    pub accept_incomplete: bool,
    /// Also traverse breakable blocks, at a penalty.
    pub destructive: bool,
    /// Stop as soon as a node's heuristic cost drops to this value or
    /// below ("close enough").
    pub threshold: Option<f64>,
    /// Fixed cost added per breakable block entered in destructive
    /// mode. When unset, the penalty is estimated from `agent` if one
    /// is supplied, and is zero otherwise.
    pub break_penalty: Option<f64>,
    /// Agent profile for estimating mining cost.
    pub agent: Option<AgentProfile>,
    /// Wall-clock budget; `None` uses the crate default.
    pub timeout: Option<Duration>,
    /// Search a frozen copy of the loaded chunks instead of the live
    /// index. The default (live) view means concurrent block updates
    /// can be observed mid-search.
    pub snapshot: bool,
}

impl PathOptions {
    fn budget(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_SEARCH_BUDGET)
    }

    fn penalty(&self) -> f64 {
        self.break_penalty
            .or_else(|| self.agent.map(|agent| agent.break_penalty()))
            .unwrap_or(0.0)
    }
}

/// A planned route.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Block-center waypoints in start-to-terminal order, both
    /// endpoints included.
    pub waypoints: Vec<Point3<f32>>,
    /// Whether the terminal node is the actual goal on loaded terrain.
    /// Always true for a normal arrival; `accept_incomplete` callers
    /// use this to tell a genuine arrival from a best-effort stop.
    pub complete: bool,
}

/// Transient search node. Ranked by heuristic cost with the insertion
/// sequence number as a deterministic tie-break; the `Ord` impl is
/// reversed so the std max-heap pops the cheapest node first.
#[derive(Debug, Clone, Copy)]
struct PathNode {
    pos: VoxelPos,
    cost: f64,
    block: BlockLookup,
    seq: u64,
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for PathNode {}

impl PartialOrd for PathNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PathNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Plan a route from `start` to `end`.
///
/// Returns `Ok(None)` when the frontier empties without reaching the
/// goal; see [`PathOptions`] for the partial-path and destructive
/// variants. On [`NavError::SearchTimeout`] all progress is discarded.
pub fn find_path(
    world: &WorldIndex,
    rules: &BlockRules,
    start: VoxelPos,
    end: VoxelPos,
    options: &PathOptions,
) -> NavResult<Option<PathResult>> {
    if options.snapshot {
        let frozen = world.snapshot();
        plan(&frozen, rules, start, end, options)
    } else {
        plan(world, rules, start, end, options)
    }
}

fn plan(
    world: &WorldIndex,
    rules: &BlockRules,
    start: VoxelPos,
    end: VoxelPos,
    options: &PathOptions,
) -> NavResult<Option<PathResult>> {
    // The start must be definitively walkable, never widened by
    // destructive mode and never forgiven when unloaded.
    let start_block = world.get(start)?;
    if !rules.is_walkable(start_block) {
        return Err(NavError::UnwalkableStart {
            pos: start,
            block: start_block,
        });
    }
    check_goal(world, rules, end, options)?;

    let started = Instant::now();
    let budget = options.budget();
    let penalty = options.penalty();

    let mut seq = 0u64;
    let mut evaluate = |pos: VoxelPos| {
        let block = world.lookup(pos);
        let mut cost = pos.distance(end);
        if options.destructive {
            if let Some(id) = block.known() {
                if rules.is_breakable(id) {
                    cost += penalty;
                }
            }
        }
        let node = PathNode {
            pos,
            cost,
            block,
            seq,
        };
        seq += 1;
        node
    };

    let mut heap = BinaryHeap::new();
    let mut visited = FxHashSet::default();
    let mut parents: FxHashMap<VoxelPos, VoxelPos> = FxHashMap::default();

    visited.insert(start);
    heap.push(evaluate(start));

    let mut terminal = None;
    while let Some(node) = heap.pop() {
        if started.elapsed() > budget {
            return Err(NavError::SearchTimeout {
                budget,
                last_distance: node.pos.distance(start),
            });
        }

        let arrived = node.pos == end;
        let stranded = options.accept_incomplete && node.block.is_unloaded();
        let close_enough = options.threshold.map_or(false, |t| node.cost <= t);
        if arrived || stranded || close_enough {
            terminal = Some(node);
            break;
        }

        for offset in VoxelPos::FACE_NEIGHBORS {
            let next = node.pos + offset;
            if visited.contains(&next) {
                continue;
            }
            let candidate = evaluate(next);

            match candidate.block {
                // Unknown terrain is only enterable when the caller
                // accepts a partial path ending there.
                BlockLookup::Unloaded if !options.accept_incomplete => continue,
                BlockLookup::Known(id) if !rules.traversable(id, options.destructive) => {
                    continue
                }
                _ => {}
            }
            // The agent is two blocks tall.
            if !world
                .lookup(next.above())
                .permits(|id| rules.traversable(id, options.destructive))
            {
                continue;
            }
            // Fences make for unsafe footing.
            if world
                .lookup(next.below())
                .known()
                .map_or(false, |id| rules.is_fence(id))
            {
                continue;
            }
            // Don't mine where something unstable would fall on us.
            if options.destructive
                && world
                    .lookup(next.offset(0, 2, 0))
                    .known()
                    .map_or(false, |id| rules.is_fall_hazard(id))
            {
                continue;
            }

            parents.insert(next, node.pos);
            visited.insert(next);
            heap.push(candidate);
        }
    }

    let Some(terminal) = terminal else {
        return Ok(None);
    };

    debug!(
        "reconstructing path {} -> {} ({} nodes visited)",
        start,
        terminal.pos,
        visited.len()
    );
    let mut waypoints = Vec::new();
    let mut cur = terminal.pos;
    waypoints.push(cur.block_center());
    while cur != start {
        let Some(&parent) = parents.get(&cur) else {
            break;
        };
        cur = parent;
        waypoints.push(cur.block_center());
    }
    waypoints.reverse();

    let complete = terminal.pos == end && !terminal.block.is_unloaded();
    Ok(Some(PathResult {
        waypoints,
        complete,
    }))
}

/// The goal cell and its headroom must be traversable. Unloaded goal
/// terrain is forgiven only under `accept_incomplete`; an unwalkable
/// *loaded* goal fails unconditionally.
fn check_goal(
    world: &WorldIndex,
    rules: &BlockRules,
    end: VoxelPos,
    options: &PathOptions,
) -> NavResult<()> {
    for pos in [end, end.above()] {
        match world.lookup(pos) {
            BlockLookup::Known(id) => {
                if !rules.traversable(id, options.destructive) {
                    return Err(NavError::UnwalkableGoal { pos, block: id });
                }
            }
            BlockLookup::Unloaded => {
                if !options.accept_incomplete {
                    return Err(NavError::ChunkNotLoaded { pos });
                }
            }
        }
    }
    Ok(())
}
