//! One-pixel-per-tile overview image of a world.

use image::{Rgb, RgbImage};
use std::path::Path;

use crate::world::state::WorldState;

pub fn render_map(world: &WorldState) -> RgbImage {
    let mut img = RgbImage::new(world.width() as u32, world.height() as u32);
    for x in 0..world.width() {
        let Some(column) = world.grid.column(x) else {
            continue;
        };
        for (y, tile) in column.iter().enumerate() {
            img.put_pixel(x as u32, y as u32, Rgb(tile.color()));
        }
    }
    img
}

pub fn save_map<P: AsRef<Path>>(path: P, world: &WorldState) -> Result<(), image::ImageError> {
    render_map(world).save(path.as_ref())?;
    tracing::info!("World map written to {}", path.as_ref().display());
    Ok(())
}
