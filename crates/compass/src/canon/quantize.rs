//! Fixed-point quantization of coordinates into hash tokens.
//!
//! Coordinates are rounded to `HASH_DECIMALS` fractional digits and stored as
//! `i32`, so set lookups compare integers instead of floats. With 8 digits the
//! representable magnitude is about ±21.47, ample for unit-scaled seeds.

use std::fmt;

use thiserror::Error;

/// Number of fractional decimal digits kept by the hash.
pub const HASH_DECIMALS: u32 = 8;
const HASH_SCALE: f64 = 10i64.pow(HASH_DECIMALS) as f64;

/// Errors surfaced while building a canonical hash.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CanonError {
    /// A coordinate or radius does not fit the fixed-width token.
    #[error("value {value} is outside the hashable range (|v| <= {limit})")]
    OutOfRange { value: f64, limit: f64 },
}

/// Round `v` to `HASH_DECIMALS` digits and encode as an `i32`.
pub fn quantize(v: f64) -> Result<i32, CanonError> {
    let scaled = (v * HASH_SCALE).round();
    // NaN fails both comparisons.
    if scaled >= i32::MIN as f64 && scaled <= i32::MAX as f64 {
        Ok(scaled as i32)
    } else {
        Err(CanonError::OutOfRange {
            value: v,
            limit: i32::MAX as f64 / HASH_SCALE,
        })
    }
}

/// One circle in some frame, quantized. Field order is the sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CircleToken {
    pub r: i32,
    pub x: i32,
    pub y: i32,
}

impl CircleToken {
    #[inline]
    pub fn quantize(x: f64, y: f64, r: f64) -> Result<Self, CanonError> {
        Ok(Self {
            r: quantize(r)?,
            x: quantize(x)?,
            y: quantize(y)?,
        })
    }
}

/// Sorted token list identifying a circle set up to the canonicalizer's symmetries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalHash(Box<[CircleToken]>);

impl CanonicalHash {
    pub(crate) fn from_sorted(tokens: Vec<CircleToken>) -> Self {
        debug_assert!(tokens.windows(2).all(|w| w[0] <= w[1]));
        Self(tokens.into_boxed_slice())
    }

    #[inline]
    pub fn tokens(&self) -> &[CircleToken] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, t) in self.0.iter().enumerate() {
            if k > 0 {
                f.write_str(";")?;
            }
            write!(f, "{:08x}{:08x}{:08x}", t.r as u32, t.x as u32, t.y as u32)?;
        }
        Ok(())
    }
}
