use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use compass::api::{
    iterative_deepening, search_to_depth, Capacity, CircleCount, MagnitudeTable, SearchCfg,
    SolutionMode,
};

mod args;
mod provenance;
mod render;

use args::{parse_goal, parse_seed, CanonArg};
use provenance::{write_sidecar, Payload};
use render::{format_circles, SearchJson};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Compass construction search runner")]
struct Cmd {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

/// Options shared by every search-running subcommand.
#[derive(Args, Clone, Debug)]
struct SearchOpts {
    /// unit, symmetric, unit-circle, frontier3 or frontier4
    #[arg(long, default_value = "unit")]
    seed: String,
    #[arg(long, default_value_t = 1)]
    workers: usize,
    #[arg(long, value_enum, default_value_t = CanonArg::Auto)]
    canon: CanonArg,
    /// Snap intersections onto the hexagonal magnitude table
    #[arg(long)]
    snap: bool,
    /// Hard limit on points (with --max-circles); growable when omitted
    #[arg(long, requires = "max_circles")]
    max_points: Option<usize>,
    #[arg(long, requires = "max_points")]
    max_circles: Option<usize>,
    /// Stop deepening once this many seconds have passed
    #[arg(long)]
    time_budget_secs: Option<f64>,
}

#[derive(Subcommand)]
enum Action {
    /// Iterative deepening until the goal is met; prints each solution as x,y,r;...
    Search {
        /// circles:N, square, pentagon, napoleon or points:x,y;x,y;...
        #[arg(long)]
        goal: String,
        #[arg(long, default_value_t = 8)]
        max_depth: usize,
        /// Enumerate every non-congruent solution at the first solved depth
        #[arg(long)]
        all: bool,
        #[command(flatten)]
        opts: SearchOpts,
        /// JSON report; a provenance sidecar is written next to it
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Number of distinct constructions with exactly k circles, k = 0..=max-depth
    Count {
        #[arg(long, default_value_t = 5)]
        max_depth: usize,
        #[command(flatten)]
        opts: SearchOpts,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Search {
            goal,
            max_depth,
            all,
            opts,
            out,
        } => search(&goal, max_depth, all, &opts, out.as_deref()).map(|_| ()),
        Action::Count {
            max_depth,
            opts,
            out,
        } => count(max_depth, &opts, out.as_deref()).map(|_| ()),
        Action::Report => report(),
    }
}

fn search_cfg(opts: &SearchOpts, max_depth: usize, mode: SolutionMode) -> Result<SearchCfg> {
    let time_budget = opts
        .time_budget_secs
        .map(|secs| {
            Duration::try_from_secs_f64(secs)
                .with_context(|| format!("--time-budget-secs {secs} is not a valid duration"))
        })
        .transpose()?;
    Ok(SearchCfg {
        max_depth,
        mode,
        canon: opts.canon.canonicalizer(),
        capacity: opts
            .max_points
            .zip(opts.max_circles)
            .map(|(max_points, max_circles)| Capacity {
                max_points,
                max_circles,
            }),
        snap: opts.snap.then(MagnitudeTable::hexagonal),
        workers: opts.workers.max(1),
        time_budget,
        ..SearchCfg::default()
    })
}

fn search(
    goal_arg: &str,
    max_depth: usize,
    all: bool,
    opts: &SearchOpts,
    out: Option<&Path>,
) -> Result<SearchJson> {
    let goal = parse_goal(goal_arg)?;
    let seeds = parse_seed(&opts.seed)?;
    let mode = if all {
        SolutionMode::AllAtDepth
    } else {
        SolutionMode::FirstFound
    };
    let cfg = search_cfg(opts, max_depth, mode)?;
    tracing::info!(goal = goal_arg, seed = %opts.seed, max_depth, workers = cfg.workers, "search");

    let report = iterative_deepening(&seeds, &goal, &cfg)?;
    if report.solutions.is_empty() {
        println!("no solution found up to depth {max_depth}");
    }
    for solution in &report.solutions {
        println!("{}", format_circles(&solution.construction.circles));
    }

    let doc = SearchJson::new(goal_arg, &opts.seed, &report);
    if let Some(out) = out {
        write_json(out, &doc)?;
        let params = json!({
            "command": "search",
            "goal": goal_arg,
            "max_depth": max_depth,
            "all": all,
            "opts": opts_json(opts),
        });
        let results = json!({
            "found_at": report.found_at,
            "solutions": report.solutions.len(),
            "canonicalizer": report.canonicalizer,
        });
        write_sidecar(out, Payload::new(params).with_results(results))?;
    }
    Ok(doc)
}

#[derive(Clone, Debug, Serialize)]
struct CountRow {
    circles: usize,
    constructions: usize,
    nodes: u64,
    elapsed_ms: f64,
}

fn count(max_depth: usize, opts: &SearchOpts, out: Option<&Path>) -> Result<Vec<CountRow>> {
    let seeds = parse_seed(&opts.seed)?;
    let cfg = search_cfg(opts, max_depth, SolutionMode::AllAtDepth)?;
    let mut rows = Vec::with_capacity(max_depth + 1);
    for k in 0..=max_depth {
        let outcome = search_to_depth(&seeds, &CircleCount::new(k), k, &cfg)?;
        let row = CountRow {
            circles: k,
            constructions: outcome.solutions.len(),
            nodes: outcome.stats.nodes,
            elapsed_ms: outcome.stats.elapsed.as_secs_f64() * 1e3,
        };
        tracing::info!(circles = k, constructions = row.constructions, nodes = row.nodes, "count");
        println!("{k}\t{}", row.constructions);
        rows.push(row);
    }
    if let Some(out) = out {
        write_json(out, &rows)?;
        let params = json!({
            "command": "count",
            "max_depth": max_depth,
            "opts": opts_json(opts),
        });
        let results = json!(rows.iter().map(|r| r.constructions).collect::<Vec<_>>());
        write_sidecar(out, Payload::new(params).with_results(results))?;
    }
    Ok(rows)
}

fn report() -> Result<()> {
    let obj = provenance::block(json!({}), serde_json::Value::Null, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn opts_json(opts: &SearchOpts) -> serde_json::Value {
    json!({
        "seed": opts.seed,
        "workers": opts.workers,
        "canon": format!("{:?}", opts.canon).to_lowercase(),
        "snap": opts.snap,
        "max_points": opts.max_points,
        "max_circles": opts.max_circles,
        "time_budget_secs": opts.time_budget_secs,
    })
}

fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))
}
