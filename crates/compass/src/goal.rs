//! Goal predicates evaluated at every search node.
//!
//! Purpose
//! - Decide whether a construction is a solution, looking only at its current
//!   point and circle sets.
//! - Declare which symmetries the predicate respects. The search may only merge
//!   states that the predicate cannot tell apart: congruence pruning is sound
//!   for `GoalSymmetry::Congruence` goals only.
//!
//! Strategies
//! - `ContainsPoints`: every target point is present (anchored).
//! - `CircleCount`: at least N distinct circles (congruence).
//! - `ContainsCircle`: a circle of given radius at given distance from an anchor
//!   point (anchored); `ContainsCircle::napoleon()` is the √2 circle around a
//!   point of the unit circle.
//! - `RegularPolygon`: the vertices of a square or regular pentagon (congruence).

use crate::geom::{distance, eq, point_eq, Circle, Point, EPS};

/// Symmetries a goal is invariant under.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GoalSymmetry {
    /// Invariant under rotations, reflections and translations.
    Congruence,
    /// Depends on absolute positions.
    #[default]
    Anchored,
}

/// Goal test shared read-only by all search workers.
pub trait GoalPredicate: Sync {
    fn is_satisfied(&self, points: &[Point], circles: &[Circle]) -> bool;

    fn symmetry(&self) -> GoalSymmetry {
        GoalSymmetry::Anchored
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContainsPoints {
    pub targets: Vec<Point>,
    pub eps: f64,
}

impl ContainsPoints {
    pub fn new(targets: Vec<Point>) -> Self {
        Self { targets, eps: EPS }
    }
}

impl GoalPredicate for ContainsPoints {
    fn is_satisfied(&self, points: &[Point], _circles: &[Circle]) -> bool {
        self.targets
            .iter()
            .all(|&t| points.iter().any(|&p| point_eq(p, t, self.eps)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircleCount {
    pub count: usize,
}

impl CircleCount {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl GoalPredicate for CircleCount {
    fn is_satisfied(&self, _points: &[Point], circles: &[Circle]) -> bool {
        circles.len() >= self.count
    }

    fn symmetry(&self) -> GoalSymmetry {
        GoalSymmetry::Congruence
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainsCircle {
    pub radius: f64,
    pub center_distance: f64,
    pub anchor: Point,
    pub eps: f64,
}

impl ContainsCircle {
    pub fn new(radius: f64, center_distance: f64, anchor: Point) -> Self {
        Self {
            radius,
            center_distance,
            anchor,
            eps: EPS,
        }
    }

    /// Radius √2, centered on the unit circle around the origin.
    pub fn napoleon() -> Self {
        Self::new(std::f64::consts::SQRT_2, 1.0, Point::zeros())
    }
}

impl GoalPredicate for ContainsCircle {
    fn is_satisfied(&self, _points: &[Point], circles: &[Circle]) -> bool {
        circles.iter().any(|c| {
            eq(c.r, self.radius, self.eps)
                && eq(distance(c.center, self.anchor), self.center_distance, self.eps)
        })
    }
}

/// Vertices of a regular `k`-gon with a single diagonal length.
///
/// A `k`-subset of points matches when exactly `k` of its pairwise squared
/// distances equal the minimum, the other `k(k-3)/2` equal the maximum, and
/// `max = ratio_sq · min`. Subsets are grown one point at a time and abandoned
/// as soon as the ratio check fails on three or more points, which every
/// vertex triple of a square or pentagon passes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegularPolygon {
    vertices: usize,
    ratio_sq: f64,
    pub eps: f64,
}

impl RegularPolygon {
    /// Diagonal² / side² = 2.
    pub fn square() -> Self {
        Self {
            vertices: 4,
            ratio_sq: 2.0,
            eps: EPS,
        }
    }

    /// Diagonal² / side² = φ² = φ + 1.
    pub fn pentagon() -> Self {
        Self {
            vertices: 5,
            ratio_sq: 2.618033988749895,
            eps: EPS,
        }
    }

    #[inline]
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    fn grow(&self, points: &[Point], chosen: &mut Vec<usize>, below: usize, lo: f64, hi: f64) -> bool {
        if chosen.len() == self.vertices {
            return self.is_regular(points, chosen, lo, hi);
        }
        let missing = self.vertices - chosen.len();
        for i in (missing - 1..below).rev() {
            let mut lo1 = lo;
            let mut hi1 = hi;
            for &j in chosen.iter() {
                let d = (points[i] - points[j]).norm_squared();
                lo1 = lo1.min(d);
                hi1 = hi1.max(d);
            }
            if chosen.len() >= 2 && !eq(lo1 * self.ratio_sq, hi1, self.eps) {
                continue;
            }
            chosen.push(i);
            let found = self.grow(points, chosen, i, lo1, hi1);
            chosen.pop();
            if found {
                return true;
            }
        }
        false
    }

    fn is_regular(&self, points: &[Point], chosen: &[usize], lo: f64, hi: f64) -> bool {
        let (mut sides, mut diagonals) = (0, 0);
        for (a, &i) in chosen.iter().enumerate() {
            for &j in &chosen[a + 1..] {
                let d = (points[i] - points[j]).norm_squared();
                if eq(d, lo, self.eps) {
                    sides += 1;
                } else if eq(d, hi, self.eps) {
                    diagonals += 1;
                }
            }
        }
        let k = self.vertices;
        sides == k && diagonals == k * (k - 3) / 2
    }
}

impl GoalPredicate for RegularPolygon {
    fn is_satisfied(&self, points: &[Point], _circles: &[Circle]) -> bool {
        if self.vertices < 3 || points.len() < self.vertices {
            return false;
        }
        let mut chosen = Vec::with_capacity(self.vertices);
        self.grow(points, &mut chosen, points.len(), f64::INFINITY, 0.0)
    }

    fn symmetry(&self) -> GoalSymmetry {
        GoalSymmetry::Congruence
    }
}

/// Tagged union of the built-in goals.
#[derive(Clone, Debug, PartialEq)]
pub enum Goal {
    ContainsPoints(ContainsPoints),
    CircleCount(CircleCount),
    ContainsCircle(ContainsCircle),
    RegularPolygon(RegularPolygon),
}

impl GoalPredicate for Goal {
    fn is_satisfied(&self, points: &[Point], circles: &[Circle]) -> bool {
        match self {
            Goal::ContainsPoints(g) => g.is_satisfied(points, circles),
            Goal::CircleCount(g) => g.is_satisfied(points, circles),
            Goal::ContainsCircle(g) => g.is_satisfied(points, circles),
            Goal::RegularPolygon(g) => g.is_satisfied(points, circles),
        }
    }

    fn symmetry(&self) -> GoalSymmetry {
        match self {
            Goal::ContainsPoints(g) => g.symmetry(),
            Goal::CircleCount(g) => g.symmetry(),
            Goal::ContainsCircle(g) => g.symmetry(),
            Goal::RegularPolygon(g) => g.symmetry(),
        }
    }
}

impl From<ContainsPoints> for Goal {
    fn from(g: ContainsPoints) -> Self {
        Goal::ContainsPoints(g)
    }
}

impl From<CircleCount> for Goal {
    fn from(g: CircleCount) -> Self {
        Goal::CircleCount(g)
    }
}

impl From<ContainsCircle> for Goal {
    fn from(g: ContainsCircle) -> Self {
        Goal::ContainsCircle(g)
    }
}

impl From<RegularPolygon> for Goal {
    fn from(g: RegularPolygon) -> Self {
        Goal::RegularPolygon(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(xy: &[(f64, f64)]) -> Vec<Point> {
        xy.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn regular(k: usize, radius: f64, phase: f64, center: Point) -> Vec<Point> {
        (0..k)
            .map(|i| {
                let t = phase + std::f64::consts::TAU * i as f64 / k as f64;
                center + Point::new(t.cos(), t.sin()) * radius
            })
            .collect()
    }

    #[test]
    fn contains_points_needs_every_target() {
        let goal = ContainsPoints::new(pts(&[(-1.0, 0.0), (0.0, 1.0)]));
        let mut points = pts(&[(0.0, 0.0), (-1.0, 1e-10), (2.0, 2.0)]);
        assert!(!goal.is_satisfied(&points, &[]));
        points.push(Point::new(0.0, 1.0));
        assert!(goal.is_satisfied(&points, &[]));
        assert_eq!(goal.symmetry(), GoalSymmetry::Anchored);
    }

    #[test]
    fn circle_count_is_a_lower_bound() {
        let c = Circle::from_xyr(0.0, 0.0, 1.0);
        let goal = CircleCount::new(2);
        assert!(!goal.is_satisfied(&[], &[c]));
        assert!(goal.is_satisfied(&[], &[c, c, c]));
        assert!(CircleCount::new(0).is_satisfied(&[], &[]));
        assert_eq!(goal.symmetry(), GoalSymmetry::Congruence);
    }

    #[test]
    fn napoleon_circle_is_anchored() {
        let goal = ContainsCircle::napoleon();
        let s2 = 2f64.sqrt();
        assert!(goal.is_satisfied(&[], &[Circle::from_xyr(0.0, 1.0, s2)]));
        assert!(goal.is_satisfied(&[], &[Circle::from_xyr(-0.6, 0.8, s2)]));
        assert!(!goal.is_satisfied(&[], &[Circle::from_xyr(1.0, 1.0, s2)]));
        assert!(!goal.is_satisfied(&[], &[Circle::from_xyr(0.0, 1.0, 1.4)]));
    }

    #[test]
    fn finds_square_among_distractors() {
        let goal = RegularPolygon::square();
        let mut points = pts(&[(0.3, 0.1), (2.0, -1.0), (5.0, 5.0)]);
        points.extend(regular(4, 0.7, 0.4, Point::new(1.0, 2.0)));
        points.push(Point::new(-1.0, -1.0));
        assert!(goal.is_satisfied(&points, &[]));
        assert_eq!(goal.symmetry(), GoalSymmetry::Congruence);
    }

    #[test]
    fn rejects_rhombus_and_rectangle() {
        let goal = RegularPolygon::square();
        let rhombus = pts(&[(0.0, 0.0), (1.0, 0.0), (1.5, 0.75f64.sqrt()), (0.5, 0.75f64.sqrt())]);
        let rectangle = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)]);
        assert!(!goal.is_satisfied(&rhombus, &[]));
        assert!(!goal.is_satisfied(&rectangle, &[]));
        // Three corners of a square are not enough.
        assert!(!goal.is_satisfied(&rectangle[..3], &[]));
    }

    #[test]
    fn finds_pentagon_but_not_hexagon_subsets() {
        let goal = RegularPolygon::pentagon();
        let mut points = regular(5, 1.3, 0.2, Point::new(-0.5, 0.25));
        points.insert(2, Point::new(0.0, 0.0));
        assert!(goal.is_satisfied(&points, &[]));
        assert_eq!(goal.vertices(), 5);

        let hexagon = regular(6, 1.0, 0.0, Point::zeros());
        assert!(!goal.is_satisfied(&hexagon, &[]));
        // A square never passes the pentagon ratio.
        assert!(!goal.is_satisfied(&regular(4, 1.0, 0.0, Point::zeros()), &[]));
    }

    #[test]
    fn goal_enum_dispatches() {
        let goals: Vec<Goal> = vec![
            CircleCount::new(1).into(),
            ContainsCircle::napoleon().into(),
            RegularPolygon::square().into(),
            ContainsPoints::new(vec![Point::zeros()]).into(),
        ];
        let symmetries: Vec<_> = goals.iter().map(|g| g.symmetry()).collect();
        assert_eq!(
            symmetries,
            [
                GoalSymmetry::Congruence,
                GoalSymmetry::Anchored,
                GoalSymmetry::Congruence,
                GoalSymmetry::Anchored,
            ]
        );
        let circle = [Circle::from_xyr(0.0, 0.0, 1.0)];
        let origin = [Point::zeros()];
        assert!(goals[0].is_satisfied(&origin, &circle));
        assert!(!goals[1].is_satisfied(&origin, &circle));
        assert!(!goals[2].is_satisfied(&origin, &circle));
        assert!(goals[3].is_satisfied(&origin, &circle));
    }
}
