use super::Structure;
use crate::core::block::TileType;

pub const WELL_WIDTH: i32 = 3;
pub const WELL_HEIGHT: i32 = 3;

#[derive(Debug, Clone)]
pub struct Well {
    pub structure: Structure,
}

impl Well {
    pub fn new() -> Self {
        let mut structure = Structure::new("Well", WELL_WIDTH, WELL_HEIGHT);

        for x in 0..WELL_WIDTH {
            for y in 0..WELL_HEIGHT {
                let shaft = x == 1 && y == 1;
                let tile = if shaft { TileType::Air } else { TileType::Stone };
                structure.blocks.push((x, y, tile));
            }
        }

        Self { structure }
    }
}

impl Default for Well {
    fn default() -> Self {
        Self::new()
    }
}
