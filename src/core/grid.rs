use crate::core::block::TileType;

/// Dense side-view tile grid. Column 0 is the left edge, row 0 is the sky.
///
/// Tiles are stored column-major (`x * height + y`), the same order the flat
/// save layout uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: i32,
    height: i32,
    tiles: Vec<TileType>,
}

impl TileGrid {
    /// An all-`Air` grid. Non-positive dimensions give an empty grid.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        TileGrid {
            width,
            height,
            tiles: vec![TileType::Air; (width * height) as usize],
        }
    }

    /// Wraps an existing column-major tile buffer. Returns `None` when the
    /// buffer length does not match the dimensions.
    pub fn from_tiles(width: i32, height: i32, tiles: Vec<TileType>) -> Option<Self> {
        if width < 0 || height < 0 || tiles.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(TileGrid {
            width,
            height,
            tiles,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn tiles(&self) -> &[TileType] {
        &self.tiles
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some((x * self.height + y) as usize)
        } else {
            None
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<TileType> {
        self.index(x, y).map(|i| self.tiles[i])
    }

    /// Writes a tile; out-of-range writes are dropped and report `false`.
    pub fn set(&mut self, x: i32, y: i32, tile: TileType) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Out-of-range cells are not solid.
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(|t| t.is_solid())
    }

    pub fn column(&self, x: i32) -> Option<&[TileType]> {
        if x < 0 || x >= self.width {
            return None;
        }
        let start = (x * self.height) as usize;
        Some(&self.tiles[start..start + self.height as usize])
    }

    pub fn count(&self, tile: TileType) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }
}
