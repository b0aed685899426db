//! Global occupancy ledgers shared by every class in a run.
//!
//! A ledger maps a resource (teacher or room) to the set of `(day, period)`
//! positions it is committed to, each tagged with the class that holds it.
//! Because a resource can only be in one place at a time, a position appears
//! at most once per resource; the ledger is keyed on position to make that
//! structural.
//!
//! Ledgers only grow during a run.  They are owned by one
//! [`AllocationEngine`](crate::AllocationEngine) and reset when its run
//! starts.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use tt_core::{ClassId, RoomId, SlotPos, TeacherId, TypedId};

/// Occupancy ledger for one kind of resource.
#[derive(Clone, Debug)]
pub struct OccupancyLedger<K: TypedId> {
    entries: FxHashMap<K, BTreeMap<SlotPos, ClassId>>,
    /// Cached total entry count for O(1) `len()`.
    total:   usize,
}

/// Teacher occupancy across all classes.
pub type TeacherLedger = OccupancyLedger<TeacherId>;

/// Lab room occupancy across all classes.
pub type RoomLedger = OccupancyLedger<RoomId>;

impl<K: TypedId> OccupancyLedger<K> {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            total:   0,
        }
    }

    /// `true` if `key` already holds `pos` in any class.
    #[inline]
    pub fn is_busy(&self, key: K, pos: SlotPos) -> bool {
        self.entries
            .get(&key)
            .is_some_and(|slots| slots.contains_key(&pos))
    }

    /// The class holding `key` at `pos`, if any.
    pub fn holder(&self, key: K, pos: SlotPos) -> Option<ClassId> {
        self.entries.get(&key)?.get(&pos).copied()
    }

    /// Record that `key` is committed to `pos` for `class`.
    ///
    /// Returns `false` and leaves the ledger unchanged if `pos` is already
    /// taken; the engine checks availability first, so that is a logic error.
    pub fn record(&mut self, key: K, pos: SlotPos, class: ClassId) -> bool {
        let slots = self.entries.entry(key).or_default();
        if slots.contains_key(&pos) {
            return false;
        }
        slots.insert(pos, class);
        self.total += 1;
        true
    }

    /// Number of positions committed to `key`.
    pub fn load(&self, key: K) -> usize {
        self.entries.get(&key).map_or(0, BTreeMap::len)
    }

    /// `key`'s commitments in `(day, period)` order.
    pub fn markers(&self, key: K) -> impl Iterator<Item = (SlotPos, ClassId)> + '_ {
        self.entries
            .get(&key)
            .into_iter()
            .flat_map(|slots| slots.iter().map(|(&p, &c)| (p, c)))
    }

    /// Every resource with at least one commitment, ascending id order.
    pub fn keys(&self) -> Vec<K> {
        let mut keys: Vec<K> = self
            .entries
            .iter()
            .filter(|(_, slots)| !slots.is_empty())
            .map(|(&k, _)| k)
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Total commitments across all resources.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.total = 0;
    }
}

impl<K: TypedId> Default for OccupancyLedger<K> {
    fn default() -> Self {
        Self::new()
    }
}
