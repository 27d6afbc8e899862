use super::Structure;
use crate::core::block::TileType;

pub const HOUSE_WIDTH: i32 = 5;
pub const HOUSE_HEIGHT: i32 = 4;

#[derive(Debug, Clone)]
pub struct House {
    pub structure: Structure,
}

impl House {
    pub fn new() -> Self {
        let mut structure = Structure::new("House", HOUSE_WIDTH, HOUSE_HEIGHT);

        // Stone shell, hollow inside to clear whatever terrain was there
        for x in 0..HOUSE_WIDTH {
            for y in 0..HOUSE_HEIGHT {
                let wall = x == 0 || x == HOUSE_WIDTH - 1 || y == 0 || y == HOUSE_HEIGHT - 1;
                let tile = if wall { TileType::Stone } else { TileType::Air };
                structure.blocks.push((x, y, tile));
            }
        }

        Self { structure }
    }
}

impl Default for House {
    fn default() -> Self {
        Self::new()
    }
}
