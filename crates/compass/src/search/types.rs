//! Configuration, statistics and results of a construction search.

use std::time::Duration;

use thiserror::Error;

use crate::canon::{CanonError, CanonicalHash, Canonicalizer, MagnitudeTable};
use crate::construction::{Capacity, Construction, ConstructionError, ConstructionState, Seed};
use crate::geom::GeomCfg;
use crate::goal::GoalSymmetry;

/// Whether a depth iteration stops at the first solution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SolutionMode {
    #[default]
    FirstFound,
    /// Enumerate every non-congruent solution at the depth.
    AllAtDepth,
}

/// Search configuration.
#[derive(Clone, Debug)]
pub struct SearchCfg {
    pub geom: GeomCfg,
    /// Largest total circle count (seed circles included) tried by iterative deepening.
    pub max_depth: usize,
    pub mode: SolutionMode,
    /// Explicit canonicalizer; `None` picks one from the goal's symmetry.
    pub canon: Option<Canonicalizer>,
    /// Hard state limits; `None` keeps the containers growable.
    pub capacity: Option<Capacity>,
    /// Snap intersection coordinates onto this table.
    pub snap: Option<MagnitudeTable>,
    pub workers: usize,
    /// Wall-clock budget, checked before each new depth.
    pub time_budget: Option<Duration>,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            geom: GeomCfg::default(),
            max_depth: 8,
            mode: SolutionMode::FirstFound,
            canon: None,
            capacity: None,
            snap: None,
            workers: 1,
            time_budget: None,
        }
    }
}

impl SearchCfg {
    /// `canon` if set, else the strongest canonicalizer that is sound for `symmetry`.
    pub fn canonicalizer_for(&self, symmetry: GoalSymmetry) -> Canonicalizer {
        match (&self.canon, symmetry) {
            (Some(c), _) => c.clone(),
            (None, GoalSymmetry::Congruence) => Canonicalizer::Pairwise,
            (None, GoalSymmetry::Anchored) => Canonicalizer::Anchored,
        }
    }

    /// Fresh root state for `seed` under this configuration.
    pub fn root_state(&self, seed: &Seed) -> Result<ConstructionState, ConstructionError> {
        let mut st = ConstructionState::new(self.geom);
        if let Some(cap) = self.capacity {
            st = st.with_capacity_limit(cap);
        }
        if let Some(table) = &self.snap {
            st = st.with_snapping(table.clone());
        }
        st.seeded(seed)
    }
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error(transparent)]
    Canon(#[from] CanonError),
}

/// A satisfying construction and its canonical hash.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub construction: Construction,
    pub hash: CanonicalHash,
}

/// Counters for one depth iteration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DepthStats {
    pub depth: usize,
    /// States entered (goal-tested and possibly expanded).
    pub nodes: u64,
    /// Children discarded because their canonical hash was already visited.
    pub pruned: u64,
    /// Children at the depth bound, goal-tested without hashing.
    pub frontier: u64,
    pub solutions: usize,
    pub elapsed: Duration,
}

impl DepthStats {
    pub(crate) fn absorb(&mut self, other: &DepthStats) {
        self.nodes += other.nodes;
        self.pruned += other.pruned;
        self.frontier += other.frontier;
    }
}

#[derive(Clone, Debug, Default)]
pub struct DepthOutcome {
    pub stats: DepthStats,
    pub solutions: Vec<Solution>,
}

/// Result of iterative deepening. Empty `solutions` means the depth budget was exhausted.
#[derive(Clone, Debug, Default)]
pub struct SearchReport {
    pub solutions: Vec<Solution>,
    pub depth_stats: Vec<DepthStats>,
    pub found_at: Option<usize>,
    pub canonicalizer: &'static str,
}

impl SearchReport {
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.found_at.is_some()
    }
}
