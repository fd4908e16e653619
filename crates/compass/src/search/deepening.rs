use std::sync::atomic::AtomicBool;
use std::time::Instant;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::canon::Canonicalizer;
use crate::construction::Seed;
use crate::geom::{point_eq, Point};
use crate::goal::GoalPredicate;

use super::dfs::{DfsRunner, Root, SearchCtx, SolutionSink};
use super::parallel;
use super::types::{DepthOutcome, DepthStats, SearchCfg, SearchError, SearchReport};
use super::visited::VisitedSet;

/// Search every construction of at most `depth` circles (seed circles included).
///
/// Seeds holding more than `depth` circles are skipped, as are seeds with the
/// same points as an earlier seed and circles congruent to it (under the
/// selected canonicalizer). Seeds with different points are searched
/// independently.
pub fn search_to_depth<G: GoalPredicate + ?Sized>(
    seeds: &[Seed],
    goal: &G,
    depth: usize,
    cfg: &SearchCfg,
) -> Result<DepthOutcome, SearchError> {
    let canon = cfg.canonicalizer_for(goal.symmetry());
    run_depth(seeds, goal, depth, cfg, &canon)
}

/// Iterative deepening: depth 0, 1, 2, … up to `cfg.max_depth`, stopping at the
/// first depth that yields a solution.
///
/// Exhausting the depth or time budget is not an error; the report then has no
/// solutions and `found_at == None`.
pub fn iterative_deepening<G: GoalPredicate + ?Sized>(
    seeds: &[Seed],
    goal: &G,
    cfg: &SearchCfg,
) -> Result<SearchReport, SearchError> {
    let canon = cfg.canonicalizer_for(goal.symmetry());
    debug!(canonicalizer = canon.name(), symmetry = ?goal.symmetry(), "selected canonicalizer");
    let started = Instant::now();
    let mut report = SearchReport {
        canonicalizer: canon.name(),
        ..SearchReport::default()
    };
    let mut reached = None;
    for depth in 0..=cfg.max_depth {
        if let Some(budget) = cfg.time_budget {
            if started.elapsed() >= budget {
                warn!(budget_ms = budget.as_millis() as u64, "time budget exhausted before depth {depth}");
                break;
            }
        }
        let outcome = run_depth(seeds, goal, depth, cfg, &canon)?;
        let s = outcome.stats;
        info!(
            depth,
            nodes = s.nodes,
            pruned = s.pruned,
            frontier = s.frontier,
            solutions = s.solutions,
            elapsed_ms = s.elapsed.as_millis() as u64,
            "depth done"
        );
        report.depth_stats.push(s);
        reached = Some(depth);
        if !outcome.solutions.is_empty() {
            report.found_at = Some(depth);
            report.solutions = outcome.solutions;
            return Ok(report);
        }
    }
    match reached {
        Some(depth) => warn!("no solution found up to depth {depth}"),
        None => warn!("no depth searched"),
    }
    Ok(report)
}

/// Unit pair seed, default configuration.
pub fn solve_with_defaults<G: GoalPredicate + ?Sized>(goal: &G) -> Result<SearchReport, SearchError> {
    iterative_deepening(&[Seed::unit_pair()], goal, &SearchCfg::default())
}

fn run_depth<G: GoalPredicate + ?Sized>(
    seeds: &[Seed],
    goal: &G,
    depth: usize,
    cfg: &SearchCfg,
    canon: &Canonicalizer,
) -> Result<DepthOutcome, SearchError> {
    let started = Instant::now();
    let workers = cfg.workers.max(1);
    let visited = VisitedSet::for_workers(workers);
    let sink = Mutex::new(SolutionSink::default());
    let stop = AtomicBool::new(false);

    let mut roots = Vec::with_capacity(seeds.len());
    let mut groups: Vec<&[Point]> = Vec::new();
    let mut duplicate_roots = 0;
    for seed in seeds {
        let state = cfg.root_state(seed)?;
        if state.circle_count() > depth {
            continue;
        }
        let group = match groups
            .iter()
            .position(|g| same_points(g, &seed.points, cfg.geom.eps))
        {
            Some(k) => k,
            None => {
                groups.push(&seed.points);
                groups.len() - 1
            }
        };
        if visited.insert((group, canon.hash(state.circles(), &cfg.geom)?)) {
            roots.push(Root { group, state });
        } else {
            duplicate_roots += 1;
        }
    }

    let ctx = SearchCtx {
        goal,
        canon,
        geom: cfg.geom,
        depth,
        mode: cfg.mode,
        visited: &visited,
        sink: &sink,
        stop: &stop,
    };
    let stats = if workers > 1 {
        parallel::run(&ctx, roots, workers)?
    } else {
        let mut runner = DfsRunner::new(&ctx);
        for mut root in roots {
            if runner.visit_root(&mut root)?.is_break() {
                break;
            }
        }
        runner.stats
    };

    let solutions = sink.into_inner().found;
    let stats = DepthStats {
        depth,
        pruned: stats.pruned + duplicate_roots,
        solutions: solutions.len(),
        elapsed: started.elapsed(),
        ..stats
    };
    Ok(DepthOutcome { stats, solutions })
}

/// Equal as point sets, up to `eps`.
fn same_points(a: &[Point], b: &[Point], eps: f64) -> bool {
    let covers = |xs: &[Point], ys: &[Point]| xs.iter().all(|&p| ys.iter().any(|&q| point_eq(p, q, eps)));
    covers(a, b) && covers(b, a)
}
