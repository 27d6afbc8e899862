//! Scripted headless play used by the command line runner.

use crate::app::game::Game;
use crate::player::input::InputState;
use crate::utils::settings::SettingsError;

/// Ticks of walking into a wall before the autopilot digs through it.
const DIG_AFTER: u32 = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub ticks: u32,
    pub landings: u32,
    pub damage: i32,
    pub deaths: u32,
    pub mined: u32,
}

/// Walks right, jumps when blocked and mines through walls it cannot jump.
#[derive(Debug, Default)]
pub struct Autopilot {
    last_x: Option<f32>,
    blocked: u32,
}

impl Autopilot {
    pub fn next_input(&mut self, game: &Game) -> InputState {
        let player = &game.player;
        let stalled = self.last_x.is_some_and(|x| player.position.x <= x);
        self.last_x = Some(player.position.x);
        self.blocked = if stalled { self.blocked + 1 } else { 0 };

        let mut input = InputState {
            right: true,
            jump: stalled && player.grounded,
            ..InputState::default()
        };

        if self.blocked >= DIG_AFTER {
            let tile = game.settings.world.tile_size;
            let body = player.body();
            let column = ((body.right() + 1.0) / tile).floor() as i32;
            let top = (body.y / tile).floor() as i32;
            let bottom = ((body.bottom() - 1.0) / tile).floor() as i32;
            input.mine = (top..=bottom)
                .find(|&row| game.world.grid.is_solid(column, row))
                .map(|row| (column, row));
        }
        input
    }
}

/// Runs `ticks` autopilot ticks of `dt` seconds each.
pub fn run_session(game: &mut Game, ticks: u32, dt: f32) -> Result<SessionSummary, SettingsError> {
    let mut autopilot = Autopilot::default();
    let mut summary = SessionSummary::default();
    let start_deaths = game.deaths;

    for _ in 0..ticks {
        let input = autopilot.next_input(game);
        let before = game.inventory.counts().iter().sum::<u32>();
        let outcome = game.tick(&input, dt)?;
        if outcome.died {
            autopilot = Autopilot::default();
        } else if game.inventory.counts().iter().sum::<u32>() > before {
            summary.mined += 1;
        }
        summary.ticks += 1;
        summary.landings += u32::from(outcome.landed);
        summary.damage += outcome.damage;
    }

    summary.deaths = game.deaths - start_deaths;
    Ok(summary)
}
