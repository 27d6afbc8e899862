use glam::Vec2;

use crate::core::block::TileType;
use crate::player::actor::{ActorState, TickOutcome};
use crate::player::collision::Aabb;
use crate::player::input::InputState;
use crate::player::inventory::Inventory;
use crate::save::{SaveError, SavedWorld};
use crate::utils::settings::{GameSettings, SettingsError};
use crate::world::generator::WorldGenerator;
use crate::world::state::WorldState;

/// One playing session: the world, the player and what they carry.
pub struct Game {
    pub settings: GameSettings,
    pub world: WorldState,
    pub player: ActorState,
    pub inventory: Inventory,
    pub deaths: u32,
}

impl Game {
    pub fn new(seed: Option<&str>, settings: GameSettings) -> Result<Self, SettingsError> {
        let world = WorldGenerator::new(seed, &settings)?.generate();
        let player = ActorState::spawn(&world, &settings);
        let inventory = Inventory::new(&settings.player.starting_inventory);
        tracing::info!(
            "New game on seed {}, spawn at ({:.1}, {:.1})",
            world.seed,
            player.position.x,
            player.position.y
        );
        Ok(Game {
            settings,
            world,
            player,
            inventory,
            deaths: 0,
        })
    }

    /// Restores a saved session. The save's world size replaces the one in
    /// `settings` so later resets keep the same dimensions.
    pub fn from_saved(saved: SavedWorld, mut settings: GameSettings) -> Result<Self, SaveError> {
        let world = WorldState::from_flat(saved.world, saved.seed)?;
        settings.world.width = world.width();
        settings.world.height = world.height();
        settings.validate()?;
        let inventory = Inventory::from_parts(&saved.inventory, saved.selected_slot)
            .ok_or(SaveError::Inventory)?;
        let mut player = ActorState::new(Vec2::new(saved.player_x, saved.player_y), &settings);
        player.health = saved.health.clamp(1, settings.player.max_health);
        Ok(Game {
            settings,
            world,
            player,
            inventory,
            deaths: 0,
        })
    }

    pub fn to_saved(&self) -> SavedWorld {
        SavedWorld {
            seed: self.world.seed,
            world: self.world.to_flat(),
            player_x: self.player.position.x,
            player_y: self.player.position.y,
            health: self.player.health,
            inventory: self.inventory.counts().to_vec(),
            selected_slot: self.inventory.selected_slot(),
        }
    }

    /// Throws the world away and starts over on a fresh random seed.
    pub fn reset(&mut self) -> Result<(), SettingsError> {
        self.world = WorldGenerator::new(None, &self.settings)?.generate();
        self.player = ActorState::spawn(&self.world, &self.settings);
        self.inventory = Inventory::new(&self.settings.player.starting_inventory);
        tracing::info!("World reset, new seed {}", self.world.seed);
        Ok(())
    }

    /// Applies hotbar, mining and placing intents, then moves the player.
    /// A death resets the world.
    pub fn tick(&mut self, input: &InputState, dt: f32) -> Result<TickOutcome, SettingsError> {
        if let Some(slot) = input.select_slot {
            self.inventory.select(slot);
        }
        if let Some((x, y)) = input.mine {
            self.mine(x, y);
        }
        if let Some((x, y)) = input.place {
            self.place(x, y);
        }

        let outcome = self.player.tick(&self.world, input, dt, &self.settings);
        if outcome.died {
            self.deaths += 1;
            tracing::info!("Player died (death #{})", self.deaths);
            self.reset()?;
        }
        Ok(outcome)
    }

    /// Whether the tile's centre is within reach of the player's centre.
    pub fn within_reach(&self, x: i32, y: i32) -> bool {
        let tile = self.settings.world.tile_size;
        let centre = Vec2::new((x as f32 + 0.5) * tile, (y as f32 + 0.5) * tile);
        self.player.center().distance(centre) <= self.settings.player.reach_tiles * tile
    }

    /// Breaks a solid tile into the inventory. Returns what was mined.
    pub fn mine(&mut self, x: i32, y: i32) -> Option<TileType> {
        if !self.within_reach(x, y) {
            return None;
        }
        let tile = self.world.grid.get(x, y).filter(|t| t.is_solid())?;
        self.world.grid.set(x, y, TileType::Air);
        self.inventory.add(tile);
        Some(tile)
    }

    /// Places the selected item into an empty tile that the player is not
    /// standing in.
    pub fn place(&mut self, x: i32, y: i32) -> bool {
        if !self.within_reach(x, y) || self.world.grid.get(x, y) != Some(TileType::Air) {
            return false;
        }
        let size = self.settings.world.tile_size;
        let cell = Aabb::new(x as f32 * size, y as f32 * size, size, size);
        if cell.intersects(&self.player.body()) {
            return false;
        }
        let tile = self.inventory.selected_tile();
        if !self.inventory.take(tile) {
            return false;
        }
        self.world.grid.set(x, y, tile)
    }
}
