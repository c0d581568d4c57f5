//! Per-sweep side cache.
//!
//! During a boundary sweep each occupied cell records, for each of its
//! four sides, which edge (if any) covers that side. A neighbour visited
//! later in the sweep reads the slot to decide between extending that
//! edge and allocating a new one. Nothing in the cache survives a sweep:
//! [`SweepCache::reset`] clears every slot before the next one starts.

use sightline_core::{Direction, EdgeId};

/// Side slots for one cell. `None` means no edge covers that side.
type SideSlots = [Option<EdgeId>; 4];

/// Transient `[Option<EdgeId>; 4]` per cell, indexed like the grid.
///
/// Owned by the grid only so the allocation can be reused across
/// rebuilds.
#[derive(Clone, Debug, Default)]
pub(crate) struct SweepCache {
    slots: Vec<SideSlots>,
}

impl SweepCache {
    /// Clear every slot and size the cache for `cell_count` cells.
    pub(crate) fn reset(&mut self, cell_count: usize) {
        self.slots.clear();
        self.slots.resize(cell_count, [None; 4]);
    }

    /// Edge recorded on `side` of the cell at flat index `cell`.
    pub(crate) fn get(&self, cell: usize, side: Direction) -> Option<EdgeId> {
        self.slots[cell][side.index()]
    }

    /// Record that `edge` covers `side` of the cell at flat index `cell`.
    pub(crate) fn record(&mut self, cell: usize, side: Direction, edge: EdgeId) {
        self.slots[cell][side.index()] = Some(edge);
    }

    /// Number of cell slots.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}
