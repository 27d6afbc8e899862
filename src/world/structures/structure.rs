use crate::core::block::TileType;
use crate::world::state::WorldState;

/// A fixed footprint stamped onto the surface. Offsets are `(column, row)`
/// from the footprint's top-left corner, row 0 being the roof.
#[derive(Debug, Clone)]
pub struct Structure {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub blocks: Vec<(i32, i32, TileType)>,
}

impl Structure {
    pub fn new(name: &str, width: i32, height: i32) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            blocks: Vec::new(),
        }
    }

    pub fn with_block(mut self, x: i32, y: i32, tile: TileType) -> Self {
        self.blocks.push((x, y, tile));
        self
    }

    /// Row the structure's bottom row lands on when its left column is `x`:
    /// one above the highest surface under the footprint.
    pub fn floor_row(&self, world: &WorldState, x: i32) -> Option<i32> {
        if x < 0 || x + self.width > world.width() {
            return None;
        }
        let start = x as usize;
        let end = start + self.width as usize;
        world.heights[start..end].iter().min().map(|ground| ground - 1)
    }

    /// Stamps the structure with its left column at `x`. Footprints that leave
    /// the world horizontally are skipped; rows outside the grid are dropped.
    pub fn place(&self, world: &mut WorldState, x: i32) -> bool {
        let Some(floor) = self.floor_row(world, x) else {
            return false;
        };
        let top = floor - self.height + 1;
        for &(dx, dy, tile) in &self.blocks {
            world.grid.set(x + dx, top + dy, tile);
        }
        true
    }
}
