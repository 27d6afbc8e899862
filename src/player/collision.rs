//! Axis-separated swept collision between an actor box and the tile grid.
//!
//! Each pass tests the area swept between the start and end of the move, so
//! a single large step cannot tunnel through a one-tile floor. Whatever the
//! policy, a pass never returns a box that overlaps a solid tile: if the
//! resolved position is still blocked the move is dropped.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::constants::{COLLISION_EPSILON, TILE_SIZE};
use crate::core::grid::TileGrid;

/// Axis-aligned box in pixels, `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Aabb { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn with_x(self, x: f32) -> Self {
        Aabb { x, ..self }
    }

    pub fn with_y(self, y: f32) -> Self {
        Aabb { y, ..self }
    }

    /// Strict overlap: boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Area covered while sliding horizontally to `x`.
    fn swept_x(&self, x: f32) -> Aabb {
        let left = self.x.min(x);
        Aabb::new(left, self.y, (self.x.max(x) - left) + self.w, self.h)
    }

    /// Area covered while sliding vertically to `y`.
    fn swept_y(&self, y: f32) -> Aabb {
        let top = self.y.min(y);
        Aabb::new(self.x, top, self.w, (self.y.max(y) - top) + self.h)
    }
}

/// What to do when a move runs into a solid tile.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Move flush against the nearest obstruction. Obstructions are visited
    /// column by column, row by row; each one that still blocks the shrinking
    /// move overrides the previous snap.
    #[default]
    SnapToBoundary,
    /// Reject the whole move. Falling still snaps onto the floor so landings
    /// register, but only if the snapped box is clear.
    CancelOnContact,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionConfig {
    pub tile_size: f32,
    /// Gap left between a snapped actor and the tile it hit.
    pub epsilon: f32,
    pub policy: CollisionPolicy,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        CollisionConfig {
            tile_size: TILE_SIZE,
            epsilon: COLLISION_EPSILON,
            policy: CollisionPolicy::default(),
        }
    }
}

impl CollisionConfig {
    fn tile_rect(&self, bx: i32, by: i32) -> Aabb {
        let size = self.tile_size;
        Aabb::new(bx as f32 * size, by as f32 * size, size, size)
    }
}

/// Tile indices touched by the span `[min, max]`, clipped to `0..limit`.
fn tile_range(min: f32, max: f32, tile_size: f32, limit: i32) -> Range<i32> {
    let start = ((min / tile_size).floor() as i32).max(0);
    let end = ((max / tile_size).floor() as i32)
        .saturating_add(1)
        .min(limit);
    start..end.max(start)
}

/// Solid cells in the tile span of `area`, column-major.
fn solid_cells<'a>(
    grid: &'a TileGrid,
    config: &CollisionConfig,
    area: Aabb,
) -> impl Iterator<Item = (i32, i32)> + 'a {
    let columns = tile_range(area.x, area.right(), config.tile_size, grid.width());
    let rows = tile_range(area.y, area.bottom(), config.tile_size, grid.height());
    columns
        .flat_map(move |bx| rows.clone().map(move |by| (bx, by)))
        .filter(move |&(bx, by)| grid.is_solid(bx, by))
}

/// Whether `area` overlaps any solid tile.
pub fn overlaps_solid(grid: &TileGrid, config: &CollisionConfig, area: Aabb) -> bool {
    solid_cells(grid, config, area).any(|(bx, by)| config.tile_rect(bx, by).intersects(&area))
}

/// Moves `body` horizontally by `dx` and returns the resolved `x`.
pub fn resolve_horizontal(grid: &TileGrid, config: &CollisionConfig, body: Aabb, dx: f32) -> f32 {
    let target = body.x + dx;
    let resolved = match config.policy {
        CollisionPolicy::SnapToBoundary => {
            let mut x = target;
            for (bx, by) in solid_cells(grid, config, body.swept_x(target)) {
                if !config.tile_rect(bx, by).intersects(&body.swept_x(x)) {
                    continue;
                }
                if dx > 0.0 {
                    x = bx as f32 * config.tile_size - body.w - config.epsilon;
                } else if dx < 0.0 {
                    x = (bx + 1) as f32 * config.tile_size + config.epsilon;
                }
            }
            x
        }
        CollisionPolicy::CancelOnContact => {
            if overlaps_solid(grid, config, body.swept_x(target)) {
                body.x
            } else {
                target
            }
        }
    };

    if overlaps_solid(grid, config, body.with_x(resolved)) {
        body.x
    } else {
        resolved
    }
}

/// Moves `body` vertically by `dy` (positive is down) and returns the
/// resolved `y` and whether the move landed on a tile.
pub fn resolve_vertical(
    grid: &TileGrid,
    config: &CollisionConfig,
    body: Aabb,
    dy: f32,
) -> (f32, bool) {
    let target = body.y + dy;
    let falling = dy > 0.0;
    let floor_snap = |by: i32| by as f32 * config.tile_size - body.h - config.epsilon;

    let (resolved, landed) = match config.policy {
        CollisionPolicy::SnapToBoundary => {
            let mut y = target;
            let mut landed = false;
            for (bx, by) in solid_cells(grid, config, body.swept_y(target)) {
                if !config.tile_rect(bx, by).intersects(&body.swept_y(y)) {
                    continue;
                }
                if falling {
                    y = floor_snap(by);
                    landed = true;
                } else if dy < 0.0 {
                    y = (by + 1) as f32 * config.tile_size + config.epsilon;
                }
            }
            (y, landed)
        }
        CollisionPolicy::CancelOnContact => {
            let swept = body.swept_y(target);
            let floor = solid_cells(grid, config, swept)
                .filter(|&(bx, by)| config.tile_rect(bx, by).intersects(&swept))
                .map(|(_, by)| by)
                .min();
            match floor {
                None => (target, false),
                Some(by) if falling => (floor_snap(by), true),
                Some(_) => (body.y, false),
            }
        }
    };

    if overlaps_solid(grid, config, body.with_y(resolved)) {
        (body.y, false)
    } else {
        (resolved, landed)
    }
}
