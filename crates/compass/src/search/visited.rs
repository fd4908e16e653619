use std::collections::hash_map::RandomState;
use std::collections::HashSet;
use std::hash::BuildHasher;

use parking_lot::Mutex;

use crate::canon::CanonicalHash;

/// Seed group plus canonical hash of the circles.
pub(super) type VisitKey = (usize, CanonicalHash);

/// Keys seen during one depth iteration, split into independently locked
/// shards so that workers rarely contend.
#[derive(Debug)]
pub(super) struct VisitedSet {
    shards: Box<[Mutex<HashSet<VisitKey>>]>,
    router: RandomState,
}

impl VisitedSet {
    /// `shards` is rounded up to a power of two (at least 1).
    pub(super) fn new(shards: usize) -> Self {
        let n = shards.max(1).next_power_of_two();
        Self {
            shards: (0..n).map(|_| Mutex::new(HashSet::new())).collect(),
            router: RandomState::new(),
        }
    }

    /// Shard count suited to `workers` threads.
    pub(super) fn for_workers(workers: usize) -> Self {
        if workers <= 1 {
            Self::new(1)
        } else {
            Self::new(workers * 8)
        }
    }

    /// `true` if `key` was not present.
    pub(super) fn insert(&self, key: VisitKey) -> bool {
        let k = self.router.hash_one(&key) as usize & (self.shards.len() - 1);
        self.shards[k].lock().insert(key)
    }
}
