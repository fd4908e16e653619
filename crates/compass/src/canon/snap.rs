//! Snapping of coordinates onto a finite table of known magnitudes.
//!
//! Purpose
//! - Aggressive variant for searches whose reachable coordinates are known to
//!   belong to a small family (the hexagonal lattice of the unit seed at
//!   shallow depth). Snapping removes accumulated floating-point noise so that
//!   deeper intersections stay exactly on the lattice values.
//!
//! Failure policy
//! - A value that matches no reference is an error, never approximated: it
//!   means either a precision bug or a construction outside the assumed family.

use thiserror::Error;

use crate::geom::Point;

/// Reference magnitudes reachable from the unit seed `{(0,0), (1,0)}` by the
/// first few hexagonal constructions.
const HEXAGONAL_MAGNITUDES: [f64; 29] = [
    0.0,
    0.18350341907227397, // 1 - √2/√3
    0.22871355387816905,
    0.25,
    0.27128644612183095,
    0.4574271077563381,
    0.5,
    0.5773502691896257, // 1/√3
    0.6848186302914435,
    0.728713553878169,
    0.75,
    0.816496580927726,
    0.8368632931834693,
    0.8660254037844386, // √3/2
    0.9682458365518543,
    0.9734937648862564,
    1.0,
    1.228713553878169,
    1.271286446121831,
    1.457427107756338,
    1.5,
    1.6583123951777, // √11/2
    1.7320508075688772, // √3
    1.816496580927726,  // 1 + √2/√3
    1.9915638315627209,
    2.0,
    2.228713553878169,
    2.598076211353316, // 3√3/2
    3.0,
];

#[derive(Clone, Debug, PartialEq, Error)]
pub enum SnapError {
    #[error("uncanonical magnitude {value}: no reference value within {tol:e}")]
    Uncanonical { value: f64, tol: f64 },
}

/// Sorted table of non-negative reference magnitudes plus a match tolerance.
#[derive(Clone, Debug, PartialEq)]
pub struct MagnitudeTable {
    values: Vec<f64>,
    tol: f64,
}

impl MagnitudeTable {
    pub const DEFAULT_TOL: f64 = 5e-13;

    pub fn new(values: impl IntoIterator<Item = f64>, tol: f64) -> Self {
        let mut values: Vec<f64> = values.into_iter().map(f64::abs).collect();
        values.sort_by(f64::total_cmp);
        values.dedup();
        Self { values, tol }
    }

    pub fn hexagonal() -> Self {
        Self::new(HEXAGONAL_MAGNITUDES, Self::DEFAULT_TOL)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replace `x` by the signed reference value it matches.
    pub fn snap(&self, x: f64) -> Result<f64, SnapError> {
        let a = x.abs();
        let k = self.values.partition_point(|&v| v < a);
        let nearest = [k.checked_sub(1), Some(k)]
            .into_iter()
            .flatten()
            .filter_map(|i| self.values.get(i).copied())
            .find(|v| (a - v).abs() < self.tol);
        match nearest {
            Some(v) => Ok(v.copysign(x)),
            None => Err(SnapError::Uncanonical {
                value: x,
                tol: self.tol,
            }),
        }
    }

    pub fn snap_point(&self, p: Point) -> Result<Point, SnapError> {
        Ok(Point::new(self.snap(p.x)?, self.snap(p.y)?))
    }
}
