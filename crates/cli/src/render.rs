//! Text and JSON renderings of search results.

use serde::Serialize;

use compass::api::{Circle, DepthStats, SearchReport, Solution};

/// Round to 8 decimals; `-0` prints as `0`.
pub fn round8(v: f64) -> f64 {
    (v * 1e8).round() / 1e8 + 0.0
}

/// `x,y,r;x,y,r;…` with every value rounded to 8 decimals.
pub fn format_circles(circles: &[Circle]) -> String {
    circles
        .iter()
        .map(|c| format!("{},{},{}", round8(c.center.x), round8(c.center.y), round8(c.r)))
        .collect::<Vec<_>>()
        .join(";")
}

#[derive(Clone, Debug, Serialize)]
pub struct DepthRow {
    pub depth: usize,
    pub nodes: u64,
    pub pruned: u64,
    pub frontier: u64,
    pub solutions: usize,
    pub elapsed_ms: f64,
}

impl From<&DepthStats> for DepthRow {
    fn from(s: &DepthStats) -> Self {
        Self {
            depth: s.depth,
            nodes: s.nodes,
            pruned: s.pruned,
            frontier: s.frontier,
            solutions: s.solutions,
            elapsed_ms: s.elapsed.as_secs_f64() * 1e3,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SolutionRow {
    pub circles: Vec<[f64; 3]>,
    pub seed_circles: usize,
    pub text: String,
    pub hash: String,
}

impl From<&Solution> for SolutionRow {
    fn from(s: &Solution) -> Self {
        let circles = &s.construction.circles;
        Self {
            circles: circles
                .iter()
                .map(|c| [round8(c.center.x), round8(c.center.y), round8(c.r)])
                .collect(),
            seed_circles: s.construction.seed_circles,
            text: format_circles(circles),
            hash: s.hash.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SearchJson {
    pub goal: String,
    pub seed: String,
    pub canonicalizer: &'static str,
    pub found_at: Option<usize>,
    pub solutions: Vec<SolutionRow>,
    pub depths: Vec<DepthRow>,
}

impl SearchJson {
    pub fn new(goal: &str, seed: &str, report: &SearchReport) -> Self {
        Self {
            goal: goal.to_string(),
            seed: seed.to_string(),
            canonicalizer: report.canonicalizer,
            found_at: report.found_at,
            solutions: report.solutions.iter().map(SolutionRow::from).collect(),
            depths: report.depth_stats.iter().map(DepthRow::from).collect(),
        }
    }
}
