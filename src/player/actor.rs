use glam::Vec2;

use crate::player::collision::{Aabb, overlaps_solid, resolve_horizontal, resolve_vertical};
use crate::player::input::InputState;
use crate::utils::settings::GameSettings;
use crate::world::state::WorldState;

/// What happened to the actor during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub landed: bool,
    pub damage: i32,
    pub died: bool,
}

/// The player's body and vitals. Positions are pixels, top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorState {
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub grounded: bool,
    /// `y` at which the current fall started
    pub fall_start: Option<f32>,
    pub health: i32,
    regen_timer: f32,
}

impl ActorState {
    pub fn new(position: Vec2, settings: &GameSettings) -> Self {
        ActorState {
            position,
            size: Vec2::new(settings.player.width, settings.player.height),
            velocity: Vec2::ZERO,
            grounded: false,
            fall_start: None,
            health: settings.player.max_health,
            regen_timer: 0.0,
        }
    }

    /// Stands the actor on the surface of the middle column, lifted clear of
    /// anything a structure put there.
    pub fn spawn(world: &WorldState, settings: &GameSettings) -> Self {
        let tile = settings.world.tile_size;
        let column = world.width() / 2;
        let mut row = world.surface(column).unwrap_or(0) - 1;
        let position = Vec2::new(column as f32 * tile, row as f32 * tile);
        let mut actor = ActorState::new(position, settings);

        let collision = settings.collision();
        while row > -world.height() && overlaps_solid(&world.grid, &collision, actor.body()) {
            row -= 1;
            actor.position.y = row as f32 * tile;
        }
        actor
    }

    pub fn body(&self) -> Aabb {
        Aabb::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Advances movement, gravity, fall damage and regeneration by `dt` seconds.
    pub fn tick(
        &mut self,
        world: &WorldState,
        input: &InputState,
        dt: f32,
        settings: &GameSettings,
    ) -> TickOutcome {
        let physics = &settings.physics;
        let player = &settings.player;
        let tile = settings.world.tile_size;
        let collision = settings.collision();
        let mut outcome = TickOutcome::default();

        self.velocity.x = 0.0;
        if input.left {
            self.velocity.x = -physics.move_speed;
        }
        if input.right {
            self.velocity.x = physics.move_speed;
        }
        self.position.x =
            resolve_horizontal(&world.grid, &collision, self.body(), self.velocity.x * dt);

        if input.jump && self.grounded {
            self.velocity.y = physics.jump_velocity;
            self.grounded = false;
            self.fall_start = None;
        }

        self.velocity.y += physics.gravity * dt;
        if !self.grounded && self.velocity.y > 0.0 && self.fall_start.is_none() {
            self.fall_start = Some(self.position.y);
        }

        let dy = self.velocity.y * dt;
        let (y, landed) = resolve_vertical(&world.grid, &collision, self.body(), dy);
        if landed {
            if let Some(start) = self.fall_start.take() {
                let fallen = (y - start) / tile;
                if fallen > player.fall_safe_height {
                    outcome.damage =
                        ((fallen - player.fall_safe_height) * player.fall_damage_per_block) as i32;
                    self.health -= outcome.damage;
                    tracing::debug!("Fell {:.1} tiles, took {} damage", fallen, outcome.damage);
                }
            }
            self.velocity.y = 0.0;
            self.grounded = true;
        } else {
            if dy < 0.0 && y != self.position.y + dy {
                // head bump
                self.velocity.y = 0.0;
            }
            self.grounded = false;
        }
        self.position.y = y;
        outcome.landed = landed;

        if self.position.y > world.height() as f32 * tile {
            self.health = 0;
        }

        if self.health < player.max_health {
            self.regen_timer += dt;
            if self.regen_timer >= player.regen_time {
                self.health = (self.health + 1).min(player.max_health);
                self.regen_timer = 0.0;
            }
        }

        outcome.died = self.is_dead();
        outcome
    }
}
