//! Value types shared by the construction state and the search.

use crate::geom::{Circle, Point};

/// Hard upper bounds on the state size.
///
/// The default state is growable; a `Capacity` turns overflow into a fatal
/// configuration error instead. Depth is meant to be capped by the search
/// bound, so hitting a limit means the limits and the bound disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capacity {
    pub max_points: usize,
    pub max_circles: usize,
}

impl Default for Capacity {
    fn default() -> Self {
        Self {
            max_points: 128,
            max_circles: 16,
        }
    }
}

/// Initial points, plus circles that are considered already drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Seed {
    pub points: Vec<Point>,
    pub circles: Vec<Circle>,
}

impl Seed {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            circles: Vec::new(),
        }
    }

    pub fn with_circles(mut self, circles: impl IntoIterator<Item = Circle>) -> Self {
        self.circles.extend(circles);
        self
    }

    /// `{(0,0), (1,0)}`.
    pub fn unit_pair() -> Self {
        Self::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)])
    }

    /// `{(-1,0), (1,0)}`.
    pub fn symmetric_pair() -> Self {
        Self::new(vec![Point::new(-1.0, 0.0), Point::new(1.0, 0.0)])
    }

    /// Unit pair with the unit circle around the origin already drawn.
    pub fn unit_circle() -> Self {
        Self::unit_pair().with_circles([Circle::from_xyr(0.0, 0.0, 1.0)])
    }
}

/// Ordered circle list in drawing order; the first `seed_circles` came from the seed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Construction {
    pub circles: Vec<Circle>,
    pub seed_circles: usize,
}

impl Construction {
    #[inline]
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Circles drawn by the search, excluding seed circles.
    pub fn drawn(&self) -> &[Circle] {
        &self.circles[self.seed_circles.min(self.circles.len())..]
    }
}
