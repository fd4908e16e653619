use thiserror::Error;
use tracing::error;

use crate::canon::{MagnitudeTable, SnapError};
use crate::geom::{circle_eq, intersect, point_eq, Circle, GeomCfg, Point};

use super::types::{Capacity, Construction, Seed};

/// Fatal errors while growing a construction.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConstructionError {
    /// A hard `Capacity` was configured and the state outgrew it.
    #[error("capacity exceeded: more than {limit} {what}")]
    CapacityExceeded { what: &'static str, limit: usize },
    /// Snapping was enabled and an intersection coordinate matched no reference value.
    #[error(transparent)]
    Uncanonical(#[from] SnapError),
}

/// Saved container lengths; see [`ConstructionState::rollback`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark {
    pub circles: usize,
    pub points: usize,
}

/// Points and circles of one search node.
///
/// Invariants: no two points are `eps`-equal, no two circles are `eps`-equal,
/// every point after the seed points lies on at least two circles.
#[derive(Clone, Debug)]
pub struct ConstructionState {
    cfg: GeomCfg,
    points: Vec<Point>,
    circles: Vec<Circle>,
    seed_circles: usize,
    capacity: Option<Capacity>,
    snap: Option<MagnitudeTable>,
}

impl ConstructionState {
    pub fn new(cfg: GeomCfg) -> Self {
        Self {
            cfg,
            points: Vec::new(),
            circles: Vec::new(),
            seed_circles: 0,
            capacity: None,
            snap: None,
        }
    }

    /// Growable state holding `seed`: points first, then the seed circles.
    pub fn from_seed(seed: &Seed, cfg: GeomCfg) -> Result<Self, ConstructionError> {
        Self::new(cfg).seeded(seed)
    }

    /// Fold `seed` into the state and count its circles as seed circles.
    pub fn seeded(mut self, seed: &Seed) -> Result<Self, ConstructionError> {
        for &p in &seed.points {
            self.add_point(p)?;
        }
        for &c in &seed.circles {
            self.push_circle(c)?;
        }
        self.seed_circles = self.circles.len();
        Ok(self)
    }

    pub fn with_capacity_limit(mut self, capacity: Capacity) -> Self {
        self.points.reserve(capacity.max_points);
        self.circles.reserve(capacity.max_circles);
        self.capacity = Some(capacity);
        self
    }

    pub fn with_snapping(mut self, table: MagnitudeTable) -> Self {
        self.snap = Some(table);
        self
    }

    #[inline]
    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn circle_count(&self) -> usize {
        self.circles.len()
    }

    #[inline]
    pub fn seed_circle_count(&self) -> usize {
        self.seed_circles
    }

    pub fn has_point(&self, p: Point) -> bool {
        self.points.iter().any(|&q| point_eq(p, q, self.cfg.eps))
    }

    pub fn has_circle(&self, c: &Circle) -> bool {
        self.circles.iter().any(|d| circle_eq(c, d, self.cfg.eps))
    }

    /// Append `p` unless an equal point is present. Snaps first when a table is attached.
    pub fn add_point(&mut self, p: Point) -> Result<bool, ConstructionError> {
        let p = match &self.snap {
            Some(table) => table.snap_point(p).map_err(|e| {
                error!("uncanonical intersection ({}, {}): {e}", p.x, p.y);
                e
            })?,
            None => p,
        };
        if self.has_point(p) {
            return Ok(false);
        }
        if let Some(cap) = self.capacity {
            if self.points.len() >= cap.max_points {
                return Err(ConstructionError::CapacityExceeded {
                    what: "points",
                    limit: cap.max_points,
                });
            }
        }
        self.points.push(p);
        Ok(true)
    }

    /// Draw the circle centered at `center` through `through`.
    pub fn add_circle(&mut self, center: Point, through: Point) -> Result<bool, ConstructionError> {
        self.push_circle(Circle::through(center, through))
    }

    /// Append `c` and fold in its intersections with every earlier circle.
    ///
    /// Returns `Ok(false)` without touching the state for a near-zero radius or
    /// a circle equal to one already drawn. On `Err` the state may hold part of
    /// the new points; callers treat errors as fatal.
    pub fn push_circle(&mut self, c: Circle) -> Result<bool, ConstructionError> {
        if c.r < self.cfg.eps || self.has_circle(&c) {
            return Ok(false);
        }
        if let Some(cap) = self.capacity {
            if self.circles.len() >= cap.max_circles {
                return Err(ConstructionError::CapacityExceeded {
                    what: "circles",
                    limit: cap.max_circles,
                });
            }
        }
        let earlier = self.circles.len();
        self.circles.push(c);
        for k in 0..earlier {
            let hit = intersect(&self.circles[k], &c, self.cfg);
            for &p in hit.points() {
                self.add_point(p)?;
            }
        }
        Ok(true)
    }

    #[inline]
    pub fn mark(&self) -> Mark {
        Mark {
            circles: self.circles.len(),
            points: self.points.len(),
        }
    }

    /// Truncate both containers. Counts above the current lengths are ignored.
    #[inline]
    pub fn undo_to(&mut self, circle_count: usize, point_count: usize) {
        self.circles.truncate(circle_count);
        self.points.truncate(point_count);
    }

    #[inline]
    pub fn rollback(&mut self, mark: Mark) {
        self.undo_to(mark.circles, mark.points);
    }

    pub fn construction(&self) -> Construction {
        Construction {
            circles: self.circles.clone(),
            seed_circles: self.seed_circles,
        }
    }
}
