//! Depth-bounded DFS over circle moves with canonical-hash pruning.

use std::collections::HashSet;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::canon::Canonicalizer;
use crate::construction::ConstructionState;
use crate::geom::GeomCfg;
use crate::goal::GoalPredicate;

use super::types::{DepthStats, SearchError, Solution, SolutionMode};
use super::visited::{VisitKey, VisitedSet};

pub(super) type Flow = ControlFlow<()>;

/// A subtree root together with the seed group its states are keyed under.
///
/// Seeds with equal point sets share a group; states of different groups are
/// never merged, whatever their circles.
#[derive(Clone, Debug)]
pub(super) struct Root {
    pub group: usize,
    pub state: ConstructionState,
}

/// Solutions of one depth iteration, de-duplicated by seed group and canonical hash.
#[derive(Debug, Default)]
pub(super) struct SolutionSink {
    seen: HashSet<VisitKey>,
    pub(super) found: Vec<Solution>,
}

/// Read-only context shared by every runner of one depth iteration.
pub(super) struct SearchCtx<'a, G: GoalPredicate + ?Sized> {
    pub goal: &'a G,
    pub canon: &'a Canonicalizer,
    pub geom: GeomCfg,
    pub depth: usize,
    pub mode: SolutionMode,
    pub visited: &'a VisitedSet,
    pub sink: &'a Mutex<SolutionSink>,
    pub stop: &'a AtomicBool,
}

/// DFS runner carrying the shared context and per-thread counters.
pub(super) struct DfsRunner<'a, G: GoalPredicate + ?Sized> {
    ctx: &'a SearchCtx<'a, G>,
    group: usize,
    pub(super) stats: DepthStats,
}

impl<'a, G: GoalPredicate + ?Sized> DfsRunner<'a, G> {
    pub(super) fn new(ctx: &'a SearchCtx<'a, G>) -> Self {
        Self {
            ctx,
            group: 0,
            stats: DepthStats::default(),
        }
    }

    /// Search the subtree below an admitted root.
    pub(super) fn visit_root(&mut self, root: &mut Root) -> Result<Flow, SearchError> {
        self.group = root.group;
        self.visit(&mut root.state)
    }

    /// Enter an admitted root and hand its admitted children to `out`
    /// instead of descending into them.
    pub(super) fn visit_shallow(&mut self, root: &mut Root, out: &mut Vec<Root>) -> Result<Flow, SearchError> {
        self.group = root.group;
        let group = root.group;
        let st = &mut root.state;
        if let Some(flow) = self.enter(st)? {
            return Ok(flow);
        }
        self.for_each_child(st, |_, child| {
            out.push(Root {
                group,
                state: child.clone(),
            });
            Ok(ControlFlow::Continue(()))
        })
    }

    fn visit(&mut self, st: &mut ConstructionState) -> Result<Flow, SearchError> {
        if let Some(flow) = self.enter(st)? {
            return Ok(flow);
        }
        self.for_each_child(st, |runner, child| runner.visit(child))
    }

    fn key(&self, st: &ConstructionState) -> Result<VisitKey, SearchError> {
        Ok((self.group, self.ctx.canon.hash(st.circles(), &self.ctx.geom)?))
    }

    /// Goal test and depth check. `Some` means the node is a leaf.
    fn enter(&mut self, st: &ConstructionState) -> Result<Option<Flow>, SearchError> {
        self.stats.nodes += 1;
        if self.ctx.goal.is_satisfied(st.points(), st.circles()) {
            return self.record(st).map(Some);
        }
        if st.circle_count() >= self.ctx.depth {
            return Ok(Some(ControlFlow::Continue(())));
        }
        Ok(None)
    }

    /// Try every move `(i, j)`: circle centered at point `i` through point `j`.
    ///
    /// Children that reach the depth bound are goal-tested in place. Other
    /// children are keyed by seed group and hash, and passed to `descend`
    /// unless already visited.
    /// The state is rolled back after every move.
    fn for_each_child<F>(&mut self, st: &mut ConstructionState, mut descend: F) -> Result<Flow, SearchError>
    where
        F: FnMut(&mut Self, &mut ConstructionState) -> Result<Flow, SearchError>,
    {
        let mark = st.mark();
        let frontier = mark.circles + 1 >= self.ctx.depth;
        let n = mark.points;
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                if self.ctx.stop.load(Ordering::Relaxed) {
                    return Ok(ControlFlow::Break(()));
                }
                let (center, through) = (st.points()[i], st.points()[j]);
                if !st.add_circle(center, through)? {
                    continue;
                }
                let flow = if frontier {
                    self.stats.frontier += 1;
                    if self.ctx.goal.is_satisfied(st.points(), st.circles()) {
                        self.record(st)?
                    } else {
                        ControlFlow::Continue(())
                    }
                } else {
                    let key = self.key(st)?;
                    if self.ctx.visited.insert(key) {
                        descend(self, st)?
                    } else {
                        self.stats.pruned += 1;
                        ControlFlow::Continue(())
                    }
                };
                st.rollback(mark);
                if flow.is_break() {
                    return Ok(flow);
                }
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn record(&mut self, st: &ConstructionState) -> Result<Flow, SearchError> {
        let first_only = self.ctx.mode == SolutionMode::FirstFound;
        let (group, hash) = self.key(st)?;
        {
            let mut sink = self.ctx.sink.lock();
            if !(first_only && !sink.found.is_empty()) && sink.seen.insert((group, hash.clone())) {
                sink.found.push(Solution {
                    construction: st.construction(),
                    hash,
                });
            }
        }
        if first_only {
            self.ctx.stop.store(true, Ordering::Relaxed);
            Ok(ControlFlow::Break(()))
        } else {
            Ok(ControlFlow::Continue(()))
        }
    }
}
