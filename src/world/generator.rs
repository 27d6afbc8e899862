//! Seeded side-view world generation.
//!
//! A single `ChaCha8Rng` drives every draw in a fixed order: the surface
//! random walk and per-cell material rolls, then the decoration passes. The
//! same seed therefore always yields the same grid and height profile.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::constants::SOIL_DEPTH;
use crate::core::block::TileType;
use crate::core::grid::TileGrid;
use crate::utils::settings::{GameSettings, GenerationSettings, SettingsError, WorldSettings};
use crate::world::state::WorldState;
use crate::world::structures::{House, Structure, Well, grow_tree};

const ORES: [TileType; 4] = [
    TileType::Coal,
    TileType::Iron,
    TileType::Gold,
    TileType::Diamond,
];

/// Which decoration passes run after the base terrain.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecorationPolicy {
    /// Houses and wells
    #[default]
    Structures,
    Trees,
    Both,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureKind {
    House,
    Well,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub kind: StructureKind,
    pub column: i32,
    pub width: i32,
}

/// Maps a user seed to the generator's `u64` seed. Blank or absent seeds
/// fall back to a random one.
pub fn resolve_seed(seed: Option<&str>) -> u64 {
    match seed.map(str::trim).filter(|s| !s.is_empty()) {
        Some(text) => xxh3_64(text.as_bytes()),
        None => rand::random(),
    }
}

pub struct WorldGenerator {
    rng: ChaCha8Rng,
    world: WorldSettings,
    generation: GenerationSettings,
    house: Structure,
    well: Structure,
    pub seed: u64,
}

impl WorldGenerator {
    /// Create a generator from a user seed string.
    pub fn new(seed: Option<&str>, settings: &GameSettings) -> Result<Self, SettingsError> {
        Self::with_seed(resolve_seed(seed), settings)
    }

    /// Create a generator from an already resolved seed, e.g. one read back
    /// from a save file.
    pub fn with_seed(seed: u64, settings: &GameSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(WorldGenerator {
            rng: ChaCha8Rng::seed_from_u64(seed),
            world: settings.world.clone(),
            generation: settings.generation.clone(),
            house: House::new().structure,
            well: Well::new().structure,
            seed,
        })
    }

    /// Base terrain: surface walk, grass, soil band, then caves and ores.
    pub fn generate_world(&mut self) -> WorldState {
        let width = self.world.width;
        let height = self.world.height;
        let (low, high) = (self.world.surface_min(), self.world.surface_max());
        let thresholds = self.generation.ore_bands.thresholds();

        let mut grid = TileGrid::new(width, height);
        let mut heights = Vec::with_capacity(width as usize);
        let mut surface = height / 2;

        for x in 0..width {
            surface = (surface + self.rng.gen_range(-1..=1)).clamp(low, high);
            heights.push(surface);

            grid.set(x, surface, TileType::Grass);
            for y in surface + 1..=(surface + SOIL_DEPTH).min(height - 1) {
                grid.set(x, y, TileType::Dirt);
            }
            for y in surface + SOIL_DEPTH + 1..height {
                let tile = self.deep_tile(&thresholds);
                grid.set(x, y, tile);
            }
        }

        WorldState {
            grid,
            heights,
            seed: self.seed,
        }
    }

    /// One roll for cave versus rock, and for rock exactly one more roll
    /// for the material band.
    fn deep_tile(&mut self, thresholds: &[f64; 4]) -> TileType {
        if self.rng.r#gen::<f64>() < self.generation.cave_chance {
            return TileType::Air;
        }
        let roll: f64 = self.rng.r#gen();
        ORES.iter()
            .zip(thresholds)
            .find(|(_, limit)| roll < **limit)
            .map(|(ore, _)| *ore)
            .unwrap_or(TileType::Stone)
    }

    /// Scans the surface left to right, dropping houses and wells.
    /// Returns the placements in column order.
    pub fn generate_structures(&mut self, world: &mut WorldState) -> Vec<Placement> {
        let widest = self.house.width.max(self.well.width);
        let mut placements = Vec::new();
        let mut x = 0;

        while world.width() - x >= widest {
            if self.rng.r#gen::<f64>() >= self.generation.structure_spawn_chance {
                x += 1;
                continue;
            }
            let (kind, structure) = if self.rng.r#gen::<f64>() < self.generation.house_probability {
                (StructureKind::House, &self.house)
            } else {
                (StructureKind::Well, &self.well)
            };
            if structure.place(world, x) {
                tracing::debug!("Placed {} at column {}", structure.name, x);
                placements.push(Placement {
                    kind,
                    column: x,
                    width: structure.width,
                });
            }
            x += structure.width;
        }

        placements
    }

    /// Plants trees on grass columns away from the world edges. Returns the
    /// columns that got a tree.
    pub fn generate_trees(&mut self, world: &mut WorldState) -> Vec<i32> {
        let mut planted = Vec::new();
        for x in 1..world.width() - 1 {
            let surface = world.heights[x as usize];
            if world.grid.get(x, surface) != Some(TileType::Grass) {
                continue;
            }
            if self.rng.r#gen::<f64>() >= self.generation.tree_chance {
                continue;
            }
            let trunk = self
                .rng
                .gen_range(self.generation.tree_trunk_min..=self.generation.tree_trunk_max);
            grow_tree(&mut world.grid, x, surface, trunk);
            planted.push(x);
        }
        planted
    }

    /// Full pipeline: base terrain followed by the configured decoration.
    pub fn generate(&mut self) -> WorldState {
        let mut world = self.generate_world();
        let (structures, trees) = match self.generation.decoration {
            DecorationPolicy::Structures => (self.generate_structures(&mut world).len(), 0),
            DecorationPolicy::Trees => (0, self.generate_trees(&mut world).len()),
            DecorationPolicy::Both => {
                let trees = self.generate_trees(&mut world).len();
                (self.generate_structures(&mut world).len(), trees)
            }
            DecorationPolicy::None => (0, 0),
        };
        tracing::info!(
            "Generated {}x{} world (seed {}): {} ore tiles, {} structures, {} trees",
            world.width(),
            world.height(),
            self.seed,
            world.ore_count(),
            structures,
            trees
        );
        world
    }
}

/// Generates a complete world for `seed` with the given settings.
pub fn generate_world(
    seed: Option<&str>,
    settings: &GameSettings,
) -> Result<WorldState, SettingsError> {
    Ok(WorldGenerator::new(seed, settings)?.generate())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(width: i32, height: i32, decoration: DecorationPolicy) -> GameSettings {
        let mut settings = GameSettings::default();
        settings.world.width = width;
        settings.world.height = height;
        settings.generation.decoration = decoration;
        settings
    }

    fn terrain(seed: &str, width: i32, height: i32) -> WorldState {
        WorldGenerator::new(Some(seed), &settings(width, height, DecorationPolicy::None))
            .expect("valid settings")
            .generate_world()
    }

    #[test]
    fn same_seed_same_world() {
        let settings = GameSettings::default();
        let a = generate_world(Some("bedrock"), &settings).expect("generate");
        let b = generate_world(Some("bedrock"), &settings).expect("generate");
        assert_eq!(a, b);

        let c = generate_world(Some("bedrock2"), &settings).expect("generate");
        assert_ne!(a.grid, c.grid);
    }

    #[test]
    fn seed_text_is_trimmed() {
        assert_eq!(resolve_seed(Some("  hills ")), resolve_seed(Some("hills")));
        assert_eq!(resolve_seed(Some("hills")), xxh3_64(b"hills"));
    }

    #[test]
    fn blank_seed_is_random_but_recorded() {
        let settings = settings(40, 30, DecorationPolicy::None);
        let a = generate_world(None, &settings).expect("generate");
        let b = generate_world(Some("   "), &settings).expect("generate");
        assert_ne!(a.seed, b.seed);

        let replay = WorldGenerator::with_seed(a.seed, &settings)
            .expect("valid settings")
            .generate();
        assert_eq!(replay, a);
    }

    #[test]
    fn invalid_settings_are_rejected_up_front() {
        let settings = settings(40, 8, DecorationPolicy::None);
        assert!(WorldGenerator::new(Some("x"), &settings).is_err());
    }

    #[test]
    fn heights_stay_in_band_and_walk_smoothly() {
        for seed in ["a", "b", "c", "d"] {
            let world = terrain(seed, 400, 100);
            assert_eq!(world.heights.len(), 400);
            assert!(world.heights.iter().all(|h| (25..=90).contains(h)));
            assert!((world.heights[0] - 50).abs() <= 1);
            assert!(world.heights.windows(2).all(|w| (w[1] - w[0]).abs() <= 1));
        }
    }

    #[test]
    fn walk_pins_at_the_band_edge() {
        // Height 14 gives the band 3..=4, so the walk must spend runs of
        // columns clamped at the edges.
        let world = terrain("narrow", 200, 14);
        assert!(world.heights.iter().all(|h| (3..=4).contains(h)));
        assert!(world.heights.windows(2).any(|w| w[0] == 4 && w[1] == 4));
    }

    #[test]
    fn columns_are_layered() {
        let world = terrain("layers", 120, 60);
        for x in 0..world.width() {
            let surface = world.heights[x as usize];
            for y in 0..surface {
                assert_eq!(world.grid.get(x, y), Some(TileType::Air));
            }
            assert_eq!(world.grid.get(x, surface), Some(TileType::Grass));
            for y in surface + 1..=surface + SOIL_DEPTH {
                assert_eq!(world.grid.get(x, y), Some(TileType::Dirt));
            }
        }
    }

    #[test]
    fn deep_cells_follow_the_ore_bands() {
        let world = terrain("ores", 1000, 200);
        let mut counts = [0usize; TileType::COUNT];
        for x in 0..world.width() {
            let surface = world.heights[x as usize];
            for y in surface + SOIL_DEPTH + 1..world.height() {
                let tile = world.grid.get(x, y).expect("in bounds");
                counts[tile.index()] += 1;
            }
        }

        let deep: usize = counts.iter().sum();
        let allowed = [
            TileType::Air,
            TileType::Stone,
            TileType::Coal,
            TileType::Iron,
            TileType::Gold,
            TileType::Diamond,
        ];
        let accounted: usize = allowed.iter().map(|t| counts[t.index()]).sum();
        assert_eq!(accounted, deep);

        let coal = counts[TileType::Coal.index()];
        let iron = counts[TileType::Iron.index()];
        let gold = counts[TileType::Gold.index()];
        let diamond = counts[TileType::Diamond.index()];
        assert!(coal > iron && iron > gold && gold > diamond && diamond > 0);
        assert_eq!(world.ore_count(), coal + iron + gold + diamond);

        let caves = counts[TileType::Air.index()] as f64 / deep as f64;
        assert!((0.04..0.06).contains(&caves), "cave ratio {}", caves);
    }

    #[test]
    fn structures_never_share_columns() {
        let mut settings = settings(400, 100, DecorationPolicy::None);
        settings.generation.structure_spawn_chance = 0.3;
        let mut generator = WorldGenerator::new(Some("village"), &settings).expect("settings");
        let mut world = generator.generate_world();
        let placements = generator.generate_structures(&mut world);

        assert!(placements.iter().any(|p| p.kind == StructureKind::House));
        assert!(placements.iter().any(|p| p.kind == StructureKind::Well));
        for pair in placements.windows(2) {
            assert!(pair[0].column + pair[0].width <= pair[1].column);
        }
        for p in &placements {
            assert!(p.column >= 0 && p.column + p.width <= world.width());
        }
    }

    #[test]
    fn structures_do_not_move_the_height_profile() {
        let mut settings = settings(200, 60, DecorationPolicy::None);
        settings.generation.structure_spawn_chance = 0.5;
        let mut generator = WorldGenerator::new(Some("profile"), &settings).expect("settings");
        let mut world = generator.generate_world();
        let heights = world.heights.clone();
        let placements = generator.generate_structures(&mut world);
        assert!(!placements.is_empty());
        assert_eq!(world.heights, heights);

        // every footprint's floor row is solid stone above the ground
        for p in placements {
            let ground = heights[p.column as usize..(p.column + p.width) as usize]
                .iter()
                .min()
                .copied()
                .expect("non-empty footprint");
            for x in p.column..p.column + p.width {
                assert_eq!(world.grid.get(x, ground - 1), Some(TileType::Stone));
            }
        }
    }

    #[test]
    fn trees_grow_on_interior_grass() {
        let mut settings = settings(120, 60, DecorationPolicy::None);
        settings.generation.tree_chance = 0.5;
        let mut generator = WorldGenerator::new(Some("forest"), &settings).expect("settings");
        let mut world = generator.generate_world();
        let planted = generator.generate_trees(&mut world);

        assert!(!planted.is_empty());
        for &x in &planted {
            assert!(x > 0 && x < world.width() - 1);
            let surface = world.heights[x as usize];
            assert_eq!(world.grid.get(x, surface), Some(TileType::Grass));
            assert_eq!(world.grid.get(x, surface - 1), Some(TileType::Wood));
        }
        // soil and rock never turn into leaves
        for x in 0..world.width() {
            let surface = world.heights[x as usize];
            for y in surface..world.height() {
                assert_ne!(world.grid.get(x, y), Some(TileType::Leaves));
            }
        }
    }

    #[test]
    fn decoration_policy_selects_passes() {
        let trees = generate_world(Some("mixed"), &settings(200, 60, DecorationPolicy::Trees))
            .expect("generate");
        assert!(trees.grid.count(TileType::Wood) > 0);

        let bare = generate_world(Some("mixed"), &settings(200, 60, DecorationPolicy::None))
            .expect("generate");
        assert_eq!(bare.grid.count(TileType::Wood), 0);
        assert_eq!(bare.grid.count(TileType::Leaves), 0);
    }
}
