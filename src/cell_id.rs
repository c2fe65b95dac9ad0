//! A Module with some utilities for working with CellIds

use std::hash::{BuildHasherDefault, Hasher};

/// The opaque identity of a Cell on a [`Grid`](crate::Grid).
///
/// Ids are handed out when a Grid is built and travel with the Cell when the Grid is cloned,
/// so two copies of the same Grid agree on which Cell is which. They say nothing about the
/// Position of a Cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(u32);

impl CellId {
    pub(crate) fn new(raw: u32) -> CellId {
        CellId(raw)
    }
}

/// A specialized [`HashMap`](hashbrown::HashMap) for CellIds with a faster Hasher
pub type CellIdMap<V> = hashbrown::HashMap<CellId, V, BuildHasherDefault<CellIdHasher>>;
/// A specialized [`HashSet`](hashbrown::HashSet) for CellIds with a faster Hasher
pub type CellIdSet = hashbrown::HashSet<CellId, BuildHasherDefault<CellIdHasher>>;

/// A [`Hasher`](Hasher) specialized on CellIds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CellIdHasher(u64);

impl Hasher for CellIdHasher {
    /// panics, since only CellIds are supposed to be used
    fn write(&mut self, _: &[u8]) {
        unreachable!("This Hasher only works with CellIds")
    }
    /// Writes the raw value of a single CellId into this hasher.
    fn write_u32(&mut self, id: u32) {
        self.0 = id as u64
    }
    fn finish(&self) -> u64 {
        self.0
    }
}
