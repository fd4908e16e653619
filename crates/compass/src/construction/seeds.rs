//! Precomputed frontier tables.
//!
//! Every construction of three resp. four circles reachable from the unit pair
//! `{(0,0), (1,0)}`, one representative per congruence class, written with
//! exact literals.

use crate::geom::Circle;

use super::types::Seed;

const SQRT3: f64 = 1.7320508075688772;
const HALF_SQRT3: f64 = 0.8660254037844386;

const THREE_CIRCLES: [[[f64; 3]; 3]; 2] = [
    [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.5, HALF_SQRT3, 1.0]],
    [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.5, HALF_SQRT3, SQRT3]],
];

const FOUR_CIRCLES: [[[f64; 3]; 4]; 10] = [
    [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.5, HALF_SQRT3, 1.0], [0.5, HALF_SQRT3, SQRT3]],
    [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.5, HALF_SQRT3, 1.0], [0.5, -HALF_SQRT3, 1.0]],
    [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.5, HALF_SQRT3, 1.0], [0.5, -HALF_SQRT3, SQRT3]],
    [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.5, HALF_SQRT3, 1.0], [0.5, -HALF_SQRT3, 2.0]],
    [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.5, HALF_SQRT3, SQRT3], [0.0, 0.0, 2.0]],
    [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.5, HALF_SQRT3, SQRT3], [0.5, -HALF_SQRT3, SQRT3]],
    [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.5, HALF_SQRT3, SQRT3], [-1.0, 0.0, 1.0]],
    [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.5, HALF_SQRT3, SQRT3], [-1.0, 0.0, SQRT3]],
    [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.5, HALF_SQRT3, SQRT3], [-1.0, 0.0, 2.0]],
    [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.5, HALF_SQRT3, SQRT3], [-1.0, 0.0, 3.0]],
];

fn unit_pair_with(rows: &[[f64; 3]]) -> Seed {
    Seed::unit_pair().with_circles(rows.iter().map(|&[x, y, r]| Circle::from_xyr(x, y, r)))
}

/// The 2 three-circle constructions.
pub fn three_circle_frontier() -> Vec<Seed> {
    THREE_CIRCLES.iter().map(|rows| unit_pair_with(rows)).collect()
}

/// The 10 four-circle constructions.
pub fn four_circle_frontier() -> Vec<Seed> {
    FOUR_CIRCLES.iter().map(|rows| unit_pair_with(rows)).collect()
}
