//! Scoped-thread fan-out of one depth iteration.
//!
//! The roots are expanded breadth-first on the calling thread until there are
//! at least `TASKS_PER_WORKER * workers` independent subtrees, or until the
//! next level would hold only frontier states. Subtrees are dealt round-robin
//! to workers, each of which owns its states and runs the ordinary DFS. The
//! visited set, solution sink and stop flag are shared; stale reads of them
//! only cost redundant work.

use std::ops::ControlFlow;

use tracing::debug;

use crate::goal::GoalPredicate;

use super::dfs::{DfsRunner, Root, SearchCtx};
use super::types::{DepthStats, SearchError};

const TASKS_PER_WORKER: usize = 4;

pub(super) fn run<G: GoalPredicate + ?Sized>(
    ctx: &SearchCtx<'_, G>,
    roots: Vec<Root>,
    workers: usize,
) -> Result<DepthStats, SearchError> {
    let mut splitter = DfsRunner::new(ctx);
    let mut tasks = roots;
    let target = workers * TASKS_PER_WORKER;
    // A state with `depth - 2` or more circles has only frontier grandchildren.
    while tasks.len() < target
        && !tasks.is_empty()
        && tasks.iter().all(|t| t.state.circle_count() + 2 < ctx.depth)
    {
        let mut next = Vec::new();
        for mut task in tasks {
            if splitter.visit_shallow(&mut task, &mut next)?.is_break() {
                return Ok(splitter.stats);
            }
        }
        tasks = next;
    }
    debug!(tasks = tasks.len(), workers, "split search tree");

    let mut buckets: Vec<Vec<Root>> = (0..workers).map(|_| Vec::new()).collect();
    for (k, task) in tasks.into_iter().enumerate() {
        buckets[k % workers].push(task);
    }

    let results: Vec<Result<DepthStats, SearchError>> = std::thread::scope(|scope| {
        let handles: Vec<_> = buckets
            .into_iter()
            .map(|bucket| {
                scope.spawn(move || -> Result<DepthStats, SearchError> {
                    let mut runner = DfsRunner::new(ctx);
                    for mut task in bucket {
                        if let ControlFlow::Break(()) = runner.visit_root(&mut task)? {
                            break;
                        }
                    }
                    Ok(runner.stats)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    });

    let mut stats = splitter.stats;
    for r in results {
        stats.absorb(&r?);
    }
    Ok(stats)
}
