//! Planar geometry kernel for compass constructions.
//!
//! Purpose
//! - Pure numeric functions on points and circles: distance, circle–circle
//!   intersection and ε-tolerant equality. No state.
//! - Keep tolerances explicit (`GeomCfg`) so that callers and tests agree on
//!   what "the same point" means.
//!
//! Conventions
//! - Coordinates are expected in a roughly unit-scaled range. The default
//!   `EPS = 5e-9` is not scale-agnostic; callers working at very different
//!   scales must adjust `GeomCfg::eps`.
//!
//! Code cross-refs: `Circle`, `Point`, `GeomCfg`, `intersect`, `Intersection`

mod kernel;
mod types;

pub use kernel::{circle_eq, distance, eq, intersect, point_eq, Intersection};
pub use types::{Circle, GeomCfg, Point, EPS, EPS_TANGENT};

#[cfg(test)]
mod tests;
