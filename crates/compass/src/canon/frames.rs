use nalgebra::Matrix2;

use crate::geom::{Circle, GeomCfg, Point};

use super::quantize::{CanonError, CanonicalHash, CircleToken};

/// Finite set of orthogonal matrices used by the fixed-table canonicalizer.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameTable {
    matrices: Vec<Matrix2<f64>>,
}

impl FrameTable {
    pub fn new(matrices: Vec<Matrix2<f64>>) -> Self {
        Self { matrices }
    }

    /// Dihedral group of order `2n`: `n` rotations by `2πk/n` followed by the
    /// `n` reflections across lines at angle `πk/n`.
    pub fn dihedral(n: usize) -> Self {
        let n = n.max(1);
        let mut matrices = Vec::with_capacity(2 * n);
        for k in 0..n {
            let (s, c) = (std::f64::consts::TAU * k as f64 / n as f64).sin_cos();
            matrices.push(Matrix2::new(c, -s, s, c));
        }
        for k in 0..n {
            let (s, c) = (std::f64::consts::TAU * k as f64 / n as f64).sin_cos();
            matrices.push(Matrix2::new(c, s, s, -c));
        }
        Self { matrices }
    }

    /// D6: the symmetry group of the hexagonal lattice spanned by the unit seed.
    pub fn hexagonal() -> Self {
        Self::dihedral(6)
    }

    #[inline]
    pub fn matrices(&self) -> &[Matrix2<f64>] {
        &self.matrices
    }
}

/// Strategy for choosing the candidate frames of a canonical hash.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Canonicalizer {
    /// Every ordered pair of distinct centers, both chiralities.
    #[default]
    Pairwise,
    /// Every center as origin, every matrix of the table as orientation.
    FixedTable(FrameTable),
    /// World coordinates; only the drawing order is forgotten.
    Anchored,
}

impl Canonicalizer {
    /// Short name used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Canonicalizer::Pairwise => "pairwise",
            Canonicalizer::FixedTable(_) => "fixed-table",
            Canonicalizer::Anchored => "anchored",
        }
    }

    /// Canonical hash of `circles`.
    ///
    /// Fails only when a transformed coordinate leaves the quantizer's range.
    pub fn hash(&self, circles: &[Circle], cfg: &GeomCfg) -> Result<CanonicalHash, CanonError> {
        let mut frames = MinFrame::with_capacity(circles.len());
        match self {
            Canonicalizer::Pairwise => {
                for a in circles {
                    for b in circles {
                        let axis = b.center - a.center;
                        let d = axis.norm();
                        if d < cfg.eps {
                            continue;
                        }
                        let (cos, sin) = (axis.x / d, axis.y / d);
                        frames.offer(circles, a.center, &Matrix2::new(cos, sin, -sin, cos))?;
                        frames.offer(circles, a.center, &Matrix2::new(cos, sin, sin, -cos))?;
                    }
                }
                if frames.is_empty() {
                    // 0 or 1 circles, or all of them share one center: the
                    // orientation is irrelevant.
                    if let Some(first) = circles.first() {
                        frames.offer(circles, first.center, &Matrix2::identity())?;
                    }
                }
            }
            Canonicalizer::FixedTable(table) => {
                for origin in circles {
                    for m in table.matrices() {
                        frames.offer(circles, origin.center, m)?;
                    }
                }
            }
            Canonicalizer::Anchored => {
                frames.offer(circles, Point::zeros(), &Matrix2::identity())?;
            }
        }
        Ok(frames.finish())
    }
}

/// Running minimum over candidate frames.
struct MinFrame {
    best: Option<Vec<CircleToken>>,
    scratch: Vec<CircleToken>,
}

impl MinFrame {
    fn with_capacity(n: usize) -> Self {
        Self {
            best: None,
            scratch: Vec::with_capacity(n),
        }
    }

    fn is_empty(&self) -> bool {
        self.best.is_none()
    }

    fn offer(&mut self, circles: &[Circle], origin: Point, m: &Matrix2<f64>) -> Result<(), CanonError> {
        self.scratch.clear();
        for c in circles {
            let v = m * (c.center - origin);
            self.scratch.push(CircleToken::quantize(v.x, v.y, c.r)?);
        }
        self.scratch.sort_unstable();
        let better = match &self.best {
            Some(best) => self.scratch < *best,
            None => true,
        };
        if better {
            // Keep the old allocation around as the next scratch buffer.
            if let Some(old) = self.best.replace(std::mem::take(&mut self.scratch)) {
                self.scratch = old;
            }
        }
        Ok(())
    }

    fn finish(self) -> CanonicalHash {
        CanonicalHash::from_sorted(self.best.unwrap_or_default())
    }
}
