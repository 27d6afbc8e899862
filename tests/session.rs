//! End-to-end sessions: generate a world, play it headless, save and resume.
//!
//! Run: cargo test --test session

use sidecraft::app::{Autopilot, Game, run_session};
use sidecraft::player::collision::overlaps_solid;
use sidecraft::world::DecorationPolicy;
use sidecraft::{CollisionPolicy, GameSettings, TileType, load_world, save_world};

const DT: f32 = 1.0 / 60.0;

fn small_settings(policy: CollisionPolicy) -> GameSettings {
    let mut settings = GameSettings::default();
    settings.world.width = 120;
    settings.world.height = 50;
    settings.generation.decoration = DecorationPolicy::Both;
    settings.physics.collision_policy = policy;
    settings
}

// ---------------------------------------------------------------------------
// The player never ends a tick inside a solid tile
// ---------------------------------------------------------------------------

#[test]
fn test_player_never_enters_solid_tiles() {
    for policy in [CollisionPolicy::SnapToBoundary, CollisionPolicy::CancelOnContact] {
        for seed in ["dunes", "quarry", "orchard"] {
            let mut game = Game::new(Some(seed), small_settings(policy)).expect("new game");
            let mut autopilot = Autopilot::default();
            for tick in 0..900 {
                let input = autopilot.next_input(&game);
                game.tick(&input, DT).expect("tick");
                let collision = game.settings.collision();
                assert!(
                    !overlaps_solid(&game.world.grid, &collision, game.player.body()),
                    "{:?} seed {} tick {}: player inside terrain at {:?}",
                    policy,
                    seed,
                    tick,
                    game.player.position
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Saved sessions resume with the same world and inventory
// ---------------------------------------------------------------------------

#[test]
fn test_save_and_resume_session() {
    let settings = small_settings(CollisionPolicy::SnapToBoundary);
    let mut game = Game::new(Some("homestead"), settings.clone()).expect("new game");
    run_session(&mut game, 240, DT).expect("session");

    let path = std::env::temp_dir().join(format!(
        "sidecraft_session_{}.scw",
        std::process::id()
    ));
    save_world(&path, &game.to_saved()).expect("save");
    let saved = load_world(&path).expect("load");
    let _ = std::fs::remove_file(&path);

    let mut resumed = Game::from_saved(saved, GameSettings::default()).expect("resume");
    assert_eq!(resumed.world, game.world);
    assert_eq!(resumed.inventory, game.inventory);
    assert_eq!(resumed.player.position, game.player.position);
    assert_eq!(resumed.settings.world.width, 120);
    assert_eq!(resumed.settings.world.height, 50);

    let summary = run_session(&mut resumed, 120, DT).expect("resumed session");
    assert_eq!(summary.ticks, 120);
}

// ---------------------------------------------------------------------------
// Mining and placing edit the generated world
// ---------------------------------------------------------------------------

#[test]
fn test_dig_down_and_build_back_up() {
    let mut settings = small_settings(CollisionPolicy::SnapToBoundary);
    settings.generation.decoration = DecorationPolicy::None;
    let mut game = Game::new(Some("builder"), settings).expect("new game");
    for _ in 0..60 {
        game.tick(&Default::default(), DT).expect("tick");
    }
    assert!(game.player.grounded);

    let tile = game.settings.world.tile_size;
    let column = (game.player.center().x / tile).floor() as i32;
    let surface = game.world.surface(column).expect("column in world");
    assert_eq!(game.mine(column, surface), Some(TileType::Grass));
    assert_eq!(game.mine(column, surface + 1), Some(TileType::Dirt));

    // the player drops into the hole and lands on the next dirt tile
    let mut landed = false;
    for _ in 0..120 {
        landed |= game.tick(&Default::default(), DT).expect("tick").landed;
    }
    assert!(landed);
    let feet_row = (game.player.body().bottom() / tile).floor() as i32 + 1;
    assert_eq!(feet_row, surface + 2);

    // the row the player's head reaches into is refused, the one above is open
    assert!(!game.place(column, surface));
    assert!(game.place(column, surface - 1));
    assert_eq!(game.world.grid.get(column, surface - 1), Some(TileType::Dirt));
    assert_eq!(game.inventory.count(TileType::Dirt), 10);
}
