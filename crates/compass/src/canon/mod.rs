//! Canonical hashing of circle sets.
//!
//! Purpose
//! - Map a circle set to a key that is identical for congruent sets, so the
//!   search can discard states it already reached through a different drawing
//!   order or in a rotated/reflected position.
//!
//! Model
//! - A *frame* is an origin plus an orthogonal 2×2 matrix. Every circle is
//!   moved into the frame, quantized to fixed-width integer tokens (see
//!   `HASH_DECIMALS`), and the tokens are sorted. The hash is the
//!   lexicographically smallest token list over all candidate frames.
//! - `Canonicalizer::Pairwise` tries every ordered pair of circle centers as
//!   origin + x-axis, in both chiralities: O(n²) frames × O(n log n) per frame.
//!   This dominates the search cost.
//! - `Canonicalizer::FixedTable` tries each center with a finite matrix table.
//!   Cheaper, but only correct when the symmetry group of the construction is
//!   known in advance (the hexagonal lattice of the unit seed).
//! - `Canonicalizer::Anchored` keeps world coordinates and only forgets the
//!   drawing order; required for goals that look at absolute positions.
//!
//! Code cross-refs: `quantize`, `CanonicalHash`, `MagnitudeTable`

mod frames;
mod quantize;
mod snap;

pub use frames::{Canonicalizer, FrameTable};
pub use quantize::{quantize, CanonError, CanonicalHash, CircleToken, HASH_DECIMALS};
pub use snap::{MagnitudeTable, SnapError};

#[cfg(test)]
mod tests;
