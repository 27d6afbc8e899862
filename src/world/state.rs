use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::block::TileType;
use crate::core::grid::TileGrid;

/// The generated world: tile grid, surface profile and the seed that built them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldState {
    pub grid: TileGrid,
    /// Surface row per column, recorded before decoration.
    pub heights: Vec<i32>,
    pub seed: u64,
}

/// Column-major flat layout shared with save files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatWorld {
    pub width: i32,
    pub height: i32,
    pub tiles: Vec<u8>,
    pub heights: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    TileCount { expected: usize, found: usize },
    HeightCount { expected: usize, found: usize },
    UnknownTile { index: usize, code: u8 },
    HeightOutOfRange { column: usize, height: i32 },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldError::TileCount { expected, found } => {
                write!(f, "expected {} tiles, found {}", expected, found)
            }
            WorldError::HeightCount { expected, found } => {
                write!(f, "expected {} column heights, found {}", expected, found)
            }
            WorldError::UnknownTile { index, code } => {
                write!(f, "unknown tile code {} at cell {}", code, index)
            }
            WorldError::HeightOutOfRange { column, height } => {
                write!(f, "column {} height {} is outside the world", column, height)
            }
        }
    }
}

impl std::error::Error for WorldError {}

impl WorldState {
    /// Pairs a grid with its height profile, checking they describe the same world.
    pub fn new(grid: TileGrid, heights: Vec<i32>, seed: u64) -> Result<Self, WorldError> {
        let expected = grid.width() as usize;
        if heights.len() != expected {
            return Err(WorldError::HeightCount {
                expected,
                found: heights.len(),
            });
        }
        if let Some((column, &height)) = heights
            .iter()
            .enumerate()
            .find(|(_, h)| **h < 0 || **h >= grid.height())
        {
            return Err(WorldError::HeightOutOfRange { column, height });
        }
        Ok(WorldState {
            grid,
            heights,
            seed,
        })
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Surface row for a column, `None` off the edges.
    pub fn surface(&self, x: i32) -> Option<i32> {
        usize::try_from(x)
            .ok()
            .and_then(|x| self.heights.get(x).copied())
    }

    pub fn ore_count(&self) -> usize {
        self.grid.tiles().iter().filter(|t| t.is_ore()).count()
    }

    pub fn to_flat(&self) -> FlatWorld {
        FlatWorld {
            width: self.grid.width(),
            height: self.grid.height(),
            tiles: self.grid.tiles().iter().map(|t| t.code()).collect(),
            heights: self.heights.clone(),
        }
    }

    pub fn from_flat(flat: FlatWorld, seed: u64) -> Result<Self, WorldError> {
        let expected = flat.width.max(0) as usize * flat.height.max(0) as usize;
        if flat.width < 0 || flat.height < 0 || flat.tiles.len() != expected {
            return Err(WorldError::TileCount {
                expected,
                found: flat.tiles.len(),
            });
        }
        let tiles = flat
            .tiles
            .iter()
            .enumerate()
            .map(|(index, &code)| {
                TileType::from_code(code).ok_or(WorldError::UnknownTile { index, code })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let grid = TileGrid::from_tiles(flat.width, flat.height, tiles).ok_or(
            WorldError::TileCount {
                expected,
                found: flat.tiles.len(),
            },
        )?;
        WorldState::new(grid, flat.heights, seed)
    }
}
