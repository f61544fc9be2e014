//! Bounded searches over the world index.
//!
//! Both searches walk the 6-connected block graph node by node against
//! the live [`WorldIndex`](crate::world::WorldIndex), tolerate unloaded
//! terrain, and are bounded by wall-clock budgets. See
//! [`block_search`] for nearest-block queries and [`planner`] for
//! routing.

pub mod block_search;
pub mod planner;

pub use block_search::{find_nearest_block, BlockSearchOptions};
pub use planner::{find_path, AgentProfile, PathOptions, PathResult};
