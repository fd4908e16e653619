//! Napoleon's problem timing probe.
//!
//! Purpose
//! - Reproducible data point for "how deep is the √2 circle around a point of
//!   the unit circle, and how long does the search take?"
//! - Prints the per-depth counters next to the construction itself.
//!
//! Why this shape
//! - Seeding with the unit circle already drawn mirrors the classical statement
//!   (the circle is given, its center is known).
//! - The goal depends on absolute position, so the search falls back to the
//!   anchored canonicalizer on its own.
//!
//! Code: crates/compass/src/search/deepening.rs::iterative_deepening

use std::time::Instant;

use compass::api::{iterative_deepening, ContainsCircle, SearchCfg, Seed};

fn main() {
    let cfg = SearchCfg::default();
    let start = Instant::now();
    let report = iterative_deepening(&[Seed::unit_circle()], &ContainsCircle::napoleon(), &cfg)
        .expect("search runs without configuration errors");
    let elapsed = start.elapsed().as_secs_f64() * 1e3;

    for s in &report.depth_stats {
        println!(
            "depth={} nodes={} pruned={} frontier={} solutions={} ms={:.3}",
            s.depth,
            s.nodes,
            s.pruned,
            s.frontier,
            s.solutions,
            s.elapsed.as_secs_f64() * 1e3
        );
    }
    match report.solutions.first() {
        Some(solution) => {
            let circles: Vec<String> = solution
                .construction
                .circles
                .iter()
                .map(|c| format!("{:.8},{:.8},{:.8}", c.center.x, c.center.y, c.r))
                .collect();
            println!(
                "found_at={:?} canonicalizer={}",
                report.found_at, report.canonicalizer
            );
            println!("construction={}", circles.join(";"));
        }
        None => println!("no solution up to depth {}", cfg.max_depth),
    }
    println!("total_time_ms={elapsed:.3}");
}
