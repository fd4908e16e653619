//! Construction state: the points and circles of one search node.
//!
//! Purpose
//! - Own the current point set and circle set, extend them by drawing a circle
//!   (which folds in every new intersection point) and roll back to an earlier
//!   node by truncation.
//!
//! Rollback safety
//! - Both sets only ever grow by appending, and growth is deterministic given
//!   the sequence of drawn circles. Truncating both vectors to the lengths
//!   recorded in a `Mark` therefore restores the earlier node exactly.
//!
//! Code cross-refs: `ConstructionState`, `Seed`, `Construction`, `seeds`

pub mod seeds;
mod state;
mod types;

pub use state::{ConstructionError, ConstructionState, Mark};
pub use types::{Capacity, Construction, Seed};
