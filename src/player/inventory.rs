use serde::{Deserialize, Serialize};

use crate::core::block::TileType;

/// Placeable tiles in hotbar order.
pub const HOTBAR: [TileType; 7] = [
    TileType::Dirt,
    TileType::Grass,
    TileType::Stone,
    TileType::Coal,
    TileType::Iron,
    TileType::Gold,
    TileType::Diamond,
];

/// Item counts per tile kind plus the selected hotbar slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    counts: [u32; TileType::COUNT],
    selected: usize,
}

impl Inventory {
    pub fn new(starting: &[(TileType, u32)]) -> Self {
        let mut counts = [0u32; TileType::COUNT];
        for &(tile, count) in starting {
            counts[tile.index()] = counts[tile.index()].saturating_add(count);
        }
        Inventory {
            counts,
            selected: 0,
        }
    }

    /// Rebuilds an inventory from saved counts. `None` if the counts or the
    /// slot do not fit the current tile set.
    pub fn from_parts(counts: &[u32], selected: usize) -> Option<Self> {
        let counts: [u32; TileType::COUNT] = counts.try_into().ok()?;
        if selected >= HOTBAR.len() {
            return None;
        }
        Some(Inventory { counts, selected })
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn count(&self, tile: TileType) -> u32 {
        self.counts[tile.index()]
    }

    /// Non-empty stacks in tile order.
    pub fn items(&self) -> impl Iterator<Item = (TileType, u32)> + '_ {
        TileType::ALL
            .iter()
            .map(|&tile| (tile, self.count(tile)))
            .filter(|&(_, count)| count > 0)
    }

    pub fn add(&mut self, tile: TileType) {
        self.counts[tile.index()] = self.counts[tile.index()].saturating_add(1);
    }

    /// Removes one item; `false` if there was none.
    pub fn take(&mut self, tile: TileType) -> bool {
        let count = &mut self.counts[tile.index()];
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    pub fn select(&mut self, slot: usize) -> bool {
        if slot < HOTBAR.len() {
            self.selected = slot;
            true
        } else {
            false
        }
    }

    pub fn selected_slot(&self) -> usize {
        self.selected
    }

    pub fn selected_tile(&self) -> TileType {
        HOTBAR[self.selected]
    }
}
