//! Curated internal API for experiment code (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI, benches
//!   and examples. Breaking changes are allowed and expected.
//! - Prefer these re-exports for clarity and consistency across experiments.

// Geometry kernel
pub use crate::geom::{
    circle_eq, distance, intersect, point_eq, Circle, GeomCfg, Intersection, Point, EPS,
    EPS_TANGENT,
};
// Construction state and seeds
pub use crate::construction::seeds::{four_circle_frontier, three_circle_frontier};
pub use crate::construction::{
    Capacity, Construction, ConstructionError, ConstructionState, Mark, Seed,
};
// Canonical hashing
pub use crate::canon::{
    quantize, CanonError, CanonicalHash, Canonicalizer, CircleToken, FrameTable, MagnitudeTable,
    SnapError, HASH_DECIMALS,
};
// Goals
pub use crate::goal::{
    CircleCount, ContainsCircle, ContainsPoints, Goal, GoalPredicate, GoalSymmetry, RegularPolygon,
};
// Search
pub use crate::search::{
    iterative_deepening, search_to_depth, solve_with_defaults, DepthOutcome, DepthStats, SearchCfg,
    SearchError, SearchReport, Solution, SolutionMode,
};
