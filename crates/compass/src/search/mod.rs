//! Iterative-deepening construction search.
//!
//! Purpose
//! - Find a shortest sequence of circles (center at a known point, through
//!   another known point) whose point set satisfies a goal.
//!
//! Why this design
//! - Per node: goal test, then depth check, then every ordered pair `(i, j)` of
//!   known points as a move. Children are hashed canonically and dropped if the
//!   hash was already visited in this depth iteration.
//! - Children at the depth bound are never expanded, so they are goal-tested in
//!   place and only hashed when they are solutions.
//! - The visited set is rebuilt per depth. Keys are the seed group plus the
//!   circle hash: seeds with equal point sets share pruning, seeds with
//!   different point sets never do. Merging states is sound only if the goal
//!   cannot tell them apart, hence the canonicalizer defaults follow
//!   `GoalPredicate::symmetry`.
//!
//! Code cross-refs: `DfsRunner` (dfs.rs), `parallel::run`, `VisitedSet` (visited.rs)

mod deepening;
mod dfs;
mod parallel;
mod types;
mod visited;

pub use deepening::{iterative_deepening, search_to_depth, solve_with_defaults};
pub use types::{DepthOutcome, DepthStats, SearchCfg, SearchError, SearchReport, Solution, SolutionMode};
