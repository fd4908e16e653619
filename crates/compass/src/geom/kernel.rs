use super::types::{Circle, GeomCfg, Point};

/// Euclidean distance between two points.
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    (q - p).norm()
}

#[inline]
pub fn eq(x: f64, y: f64, eps: f64) -> bool {
    (y - x).abs() < eps
}

#[inline]
pub fn point_eq(p: Point, q: Point, eps: f64) -> bool {
    eq(p.x, q.x, eps) && eq(p.y, q.y, eps)
}

#[inline]
pub fn circle_eq(a: &Circle, b: &Circle, eps: f64) -> bool {
    point_eq(a.center, b.center, eps) && eq(a.r, b.r, eps)
}

/// Result of intersecting two circles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    /// Disjoint, nested, or concentric.
    None,
    Tangent(Point),
    Crossing([Point; 2]),
}

impl Intersection {
    pub fn points(&self) -> &[Point] {
        match self {
            Intersection::None => &[],
            Intersection::Tangent(p) => std::slice::from_ref(p),
            Intersection::Crossing(ps) => &ps[..],
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Intersection::None)
    }
}

/// Intersection points of two circles.
///
/// With `d` the center distance, `a = (r1² - r2² + d²) / 2d` is the signed
/// distance from `c1`'s center to the radical line and `h² = r1² - a²` the
/// squared half-chord. `h²` is clamped at zero so that near-tangent pairs
/// (frequent in these symmetric constructions) never take a negative root.
///
/// References: P. Bourke, "Intersection of two circles".
pub fn intersect(c1: &Circle, c2: &Circle, cfg: GeomCfg) -> Intersection {
    let delta = c2.center - c1.center;
    let d = delta.norm();
    if d < cfg.eps {
        return Intersection::None;
    }
    if d > c1.r + c2.r + cfg.eps || d < (c1.r - c2.r).abs() - cfg.eps {
        return Intersection::None;
    }

    let a = (c1.r * c1.r - c2.r * c2.r + d * d) / (2.0 * d);
    let h_sq = (c1.r * c1.r - a * a).max(0.0);
    let u = delta / d;
    let mid = c1.center + u * a;
    if h_sq < cfg.eps_tangent {
        return Intersection::Tangent(mid);
    }

    let h = h_sq.sqrt();
    let perp = Point::new(-u.y, u.x);
    Intersection::Crossing([mid + perp * h, mid - perp * h])
}
