use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum TileType {
    #[default]
    Air,
    Grass,
    Dirt,
    Stone,
    Coal,
    Iron,
    Gold,
    Diamond,
    Wood,
    Leaves,
    Chest,
}

/// Sky colour for `Air`, material colours for everything else. Indexed by `TileType::index()`.
const COLORS: [[u8; 3]; TileType::COUNT] = [
    [135, 206, 235],
    [0, 155, 0],
    [120, 72, 0],
    [100, 100, 100],
    [20, 20, 20],
    [180, 180, 180],
    [255, 215, 0],
    [0, 255, 255],
    [110, 70, 30],
    [40, 120, 40],
    [160, 110, 40],
];

impl TileType {
    pub const COUNT: usize = 11;

    pub const ALL: [TileType; TileType::COUNT] = [
        TileType::Air,
        TileType::Grass,
        TileType::Dirt,
        TileType::Stone,
        TileType::Coal,
        TileType::Iron,
        TileType::Gold,
        TileType::Diamond,
        TileType::Wood,
        TileType::Leaves,
        TileType::Chest,
    ];

    /// Dense table slot for this tile kind.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable code used by the flat save layout.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<TileType> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn is_solid(&self) -> bool {
        !matches!(self, TileType::Air)
    }

    pub fn is_ore(&self) -> bool {
        matches!(
            self,
            TileType::Coal | TileType::Iron | TileType::Gold | TileType::Diamond
        )
    }

    pub fn color(&self) -> [u8; 3] {
        COLORS[self.index()]
    }
}
