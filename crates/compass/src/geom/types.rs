//! Basic planar types and tolerances.
//!
//! - `GeomCfg`: centralizes the equality and tangency tolerances.
//! - `Point`: plain `nalgebra` column vector.
//! - `Circle`: center plus strictly positive radius.

use nalgebra::Vector2;

/// Point equality tolerance (per coordinate) in unit-scaled coordinates.
pub const EPS: f64 = 5e-9;
/// Threshold on `h²` below which two circles are treated as tangent.
///
/// Rounding noise in `r1² - a²` is around 1e-15 at unit scale, which would
/// otherwise produce two "distinct" points a few 1e-8 apart.
pub const EPS_TANGENT: f64 = 1e-12;

/// A point of the plane.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps: f64,
    pub eps_tangent: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps: EPS,
            eps_tangent: EPS_TANGENT,
        }
    }
}

/// Circle drawn with the compass: `|p - center| = r`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub r: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Point, r: f64) -> Self {
        Self { center, r }
    }

    /// Circle from raw coordinates `(x, y, r)`, the layout used by the seed tables.
    #[inline]
    pub fn from_xyr(x: f64, y: f64, r: f64) -> Self {
        Self {
            center: Vector2::new(x, y),
            r,
        }
    }

    /// Circle centered at `center` passing through `through`.
    #[inline]
    pub fn through(center: Point, through: Point) -> Self {
        Self {
            center,
            r: (through - center).norm(),
        }
    }

    /// Signed offset of `p` from the circle line (`|p - c| - r`).
    #[inline]
    pub fn offset(&self, p: Point) -> f64 {
        (p - self.center).norm() - self.r
    }
}
