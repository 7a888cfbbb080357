//! Header counts derived from a painted grid
//!
//! Map code headers carry checkpoint, rock and teleporter counts. They are
//! always recomputed from the tiles, never stored.

use bitvec::prelude::*;

use crate::io::configuration::CHECKPOINT_GROUPS;
use crate::spatial::grid::MapGrid;

/// Counts written into the `c`, `r` and `t` header fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderCounts {
    /// Distinct checkpoint groups present
    pub checkpoints: usize,
    /// Cells holding either counted rock variant
    pub rocks: usize,
    /// Distinct teleporter groups whose input is present
    pub teleporters: usize,
}

impl MapGrid {
    /// Derive the header counts from the current tiles
    ///
    /// Checkpoints and teleporters count group indices, not tiles: two `a`
    /// cells still make one checkpoint. A teleporter output with no matching
    /// input is not counted.
    pub fn header_counts(&self) -> HeaderCounts {
        let mut checkpoints_seen = bitvec![0; CHECKPOINT_GROUPS];
        let mut teleporters_seen = bitvec![0; CHECKPOINT_GROUPS];
        let mut rocks = 0;

        for tile in self.tiles() {
            if tile.is_rock() {
                rocks += 1;
            } else if let Some(index) = tile.checkpoint_index() {
                checkpoints_seen.set(index, true);
            } else if let Some(index) = tile.teleport_in_index() {
                teleporters_seen.set(index, true);
            }
        }

        HeaderCounts {
            checkpoints: checkpoints_seen.count_ones(),
            rocks,
            teleporters: teleporters_seen.count_ones(),
        }
    }
}
