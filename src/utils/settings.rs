use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::constants::*;
use crate::core::block::TileType;
use crate::player::collision::{CollisionConfig, CollisionPolicy};
use crate::world::generator::DecorationPolicy;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GameSettings {
    pub world: WorldSettings,
    pub generation: GenerationSettings,
    pub physics: PhysicsSettings,
    pub player: PlayerSettings,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            world: WorldSettings::default(),
            generation: GenerationSettings::default(),
            physics: PhysicsSettings::default(),
            player: PlayerSettings::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WorldSettings {
    pub width: i32,
    pub height: i32,
    pub tile_size: f32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            tile_size: TILE_SIZE,
        }
    }
}

impl WorldSettings {
    /// Lowest row index the surface may reach.
    pub fn surface_min(&self) -> i32 {
        self.height / 4
    }

    /// Deepest row index the surface may reach.
    pub fn surface_max(&self) -> i32 {
        self.height - SURFACE_FLOOR_MARGIN
    }
}

/// Widths of the ore probability bands, in draw order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct OreBands {
    pub coal: f64,
    pub iron: f64,
    pub gold: f64,
    pub diamond: f64,
}

impl Default for OreBands {
    fn default() -> Self {
        Self {
            coal: ORE_WIDTH_COAL,
            iron: ORE_WIDTH_IRON,
            gold: ORE_WIDTH_GOLD,
            diamond: ORE_WIDTH_DIAMOND,
        }
    }
}

impl OreBands {
    /// Cumulative upper bounds for coal, iron, gold and diamond.
    pub fn thresholds(&self) -> [f64; 4] {
        let coal = self.coal;
        let iron = coal + self.iron;
        let gold = iron + self.gold;
        let diamond = gold + self.diamond;
        [coal, iron, gold, diamond]
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenerationSettings {
    pub cave_chance: f64,
    pub ore_bands: OreBands,
    pub structure_spawn_chance: f64,
    pub house_probability: f64,
    pub tree_chance: f64,
    pub tree_trunk_min: i32,
    pub tree_trunk_max: i32,
    pub decoration: DecorationPolicy,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            cave_chance: CAVE_CHANCE,
            ore_bands: OreBands::default(),
            structure_spawn_chance: STRUCTURE_SPAWN_CHANCE,
            house_probability: HOUSE_PROBABILITY,
            tree_chance: TREE_CHANCE,
            tree_trunk_min: TREE_TRUNK_MIN,
            tree_trunk_max: TREE_TRUNK_MAX,
            decoration: DecorationPolicy::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PhysicsSettings {
    pub move_speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub collision_epsilon: f32,
    pub collision_policy: CollisionPolicy,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            jump_velocity: JUMP_VELOCITY,
            gravity: GRAVITY,
            collision_epsilon: COLLISION_EPSILON,
            collision_policy: CollisionPolicy::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerSettings {
    pub width: f32,
    pub height: f32,
    pub max_health: i32,
    pub regen_time: f32,
    pub fall_safe_height: f32,
    pub fall_damage_per_block: f32,
    pub reach_tiles: f32,
    pub starting_inventory: Vec<(TileType, u32)>,
}

fn default_starting_inventory() -> Vec<(TileType, u32)> {
    vec![(TileType::Dirt, 10)]
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            max_health: MAX_HEALTH,
            regen_time: REGEN_TIME,
            fall_safe_height: FALL_SAFE_HEIGHT,
            fall_damage_per_block: FALL_DAMAGE_PER_BLOCK,
            reach_tiles: REACH_TILES,
            starting_inventory: default_starting_inventory(),
        }
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Encoding(bincode::Error),
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings file error: {}", e),
            SettingsError::Encoding(e) => write!(f, "settings encoding error: {}", e),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Encoding(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<bincode::Error> for SettingsError {
    fn from(e: bincode::Error) -> Self {
        SettingsError::Encoding(e)
    }
}

fn probability(name: &str, value: f64) -> Result<(), SettingsError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SettingsError::Invalid(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )))
    }
}

impl GameSettings {
    pub fn collision(&self) -> CollisionConfig {
        CollisionConfig {
            tile_size: self.world.tile_size,
            epsilon: self.physics.collision_epsilon,
            policy: self.physics.collision_policy,
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let world = &self.world;
        if world.width < 1 {
            return Err(SettingsError::Invalid(format!(
                "world width must be positive, got {}",
                world.width
            )));
        }
        if world.surface_min() > world.surface_max() {
            return Err(SettingsError::Invalid(format!(
                "world height {} leaves no room for the surface band",
                world.height
            )));
        }
        if !(world.tile_size > 0.0) {
            return Err(SettingsError::Invalid("tile size must be positive".into()));
        }

        let generation = &self.generation;
        probability("cave chance", generation.cave_chance)?;
        probability("structure spawn chance", generation.structure_spawn_chance)?;
        probability("house probability", generation.house_probability)?;
        probability("tree chance", generation.tree_chance)?;
        let bands = generation.ore_bands;
        if [bands.coal, bands.iron, bands.gold, bands.diamond]
            .iter()
            .any(|w| !(*w > 0.0))
        {
            return Err(SettingsError::Invalid("ore band widths must be positive".into()));
        }
        probability("total ore chance", bands.thresholds()[3])?;
        if generation.tree_trunk_min < 1 || generation.tree_trunk_min > generation.tree_trunk_max {
            return Err(SettingsError::Invalid(format!(
                "tree trunk range {}..={} is empty",
                generation.tree_trunk_min, generation.tree_trunk_max
            )));
        }

        let epsilon = self.physics.collision_epsilon;
        if !(0.0..world.tile_size).contains(&epsilon) {
            return Err(SettingsError::Invalid(format!(
                "collision epsilon {} must be within [0, tile size)",
                epsilon
            )));
        }
        let player = &self.player;
        if !(player.width > 0.0 && player.height > 0.0) {
            return Err(SettingsError::Invalid("player size must be positive".into()));
        }
        if player.max_health < 1 {
            return Err(SettingsError::Invalid("max health must be positive".into()));
        }
        Ok(())
    }
}

pub fn save_settings(path: &Path, settings: &GameSettings) -> Result<(), SettingsError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, settings)?;
    Ok(())
}

pub fn load_settings(path: &Path) -> Result<GameSettings, SettingsError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let settings: GameSettings = bincode::deserialize_from(&mut reader)?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        GameSettings::default().validate().expect("defaults must validate");
    }

    #[test]
    fn ore_thresholds_are_cumulative_and_increasing() {
        let t = OreBands::default().thresholds();
        assert!((t[0] - 0.010).abs() < 1e-12);
        assert!((t[3] - 0.019).abs() < 1e-12);
        assert!(t.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn surface_band_for_default_world() {
        let world = WorldSettings::default();
        assert_eq!(world.surface_min(), 25);
        assert_eq!(world.surface_max(), 90);
    }

    #[test]
    fn rejects_bad_values() {
        let mut settings = GameSettings::default();
        settings.world.height = 12;
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));

        let mut settings = GameSettings::default();
        settings.generation.ore_bands.gold = 0.0;
        assert!(settings.validate().is_err());

        let mut settings = GameSettings::default();
        settings.generation.cave_chance = 1.5;
        assert!(settings.validate().is_err());

        let mut settings = GameSettings::default();
        settings.generation.tree_trunk_min = 6;
        assert!(settings.validate().is_err());

        let mut settings = GameSettings::default();
        settings.physics.collision_epsilon = TILE_SIZE;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "sidecraft-settings-{}.bin",
            std::process::id()
        ));
        let mut settings = GameSettings::default();
        settings.generation.decoration = DecorationPolicy::Trees;
        settings.physics.collision_policy = CollisionPolicy::CancelOnContact;
        save_settings(&path, &settings).expect("save settings");
        let loaded = load_settings(&path).expect("load settings");
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn files_missing_trailing_fields_are_rejected() {
        let path = std::env::temp_dir().join(format!(
            "sidecraft-settings-short-{}.bin",
            std::process::id()
        ));
        let mut bytes = bincode::serialize(&GameSettings::default()).expect("encode");
        bytes.truncate(bytes.len() - 8);
        std::fs::write(&path, &bytes).expect("write settings");
        let loaded = load_settings(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(loaded, Err(SettingsError::Encoding(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("sidecraft-settings-does-not-exist.bin");
        assert!(matches!(load_settings(&path), Err(SettingsError::Io(_))));
    }
}
