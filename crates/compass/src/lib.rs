//! Compass construction search.
//!
//! Starting from a few seed points, repeatedly draw circles (center at a known
//! point, through another known point), add every new intersection point, and
//! look for a shortest construction whose point set satisfies a goal.
//!
//! Layers, bottom-up
//! - `geom`: circle/circle intersection with explicit tolerances.
//! - `construction`: append-only point and circle sets with truncation rollback.
//! - `canon`: canonical hashes identifying constructions up to symmetry.
//! - `goal`: predicates evaluated at every node.
//! - `search`: depth-bounded DFS, iterative deepening, parallel fan-out.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; `api` and
//!   `prelude` are convenience surfaces, not compatibility promises.

pub mod api;
pub mod canon;
pub mod construction;
pub mod geom;
pub mod goal;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Circle, GeomCfg, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::canon::{CanonicalHash, Canonicalizer, FrameTable, MagnitudeTable};
    pub use crate::construction::{seeds, Construction, ConstructionState, Seed};
    pub use crate::geom::{Circle, GeomCfg, Point};
    pub use crate::goal::{
        CircleCount, ContainsCircle, ContainsPoints, Goal, GoalPredicate, GoalSymmetry,
        RegularPolygon,
    };
    pub use crate::search::{
        iterative_deepening, search_to_depth, solve_with_defaults, SearchCfg, SearchReport,
        SolutionMode,
    };
}
