use crate::core::block::TileType;
use crate::core::grid::TileGrid;

/// Grows a tree on the surface tile at `(x, surface)`.
///
/// The trunk climbs `trunk_height` rows from just above the surface. The 3x3
/// canopy is centred one row above the trunk top and only fills `Air`, so it
/// never eats terrain or a neighbouring tree.
pub fn grow_tree(grid: &mut TileGrid, x: i32, surface: i32, trunk_height: i32) {
    let mut top = surface;
    for dy in 1..=trunk_height {
        let y = surface - dy;
        if !grid.set(x, y, TileType::Wood) {
            break;
        }
        top = y;
    }

    let centre = top - 1;
    for cx in x - 1..=x + 1 {
        for cy in centre - 1..=centre + 1 {
            if grid.get(cx, cy) == Some(TileType::Air) {
                grid.set(cx, cy, TileType::Leaves);
            }
        }
    }
}
