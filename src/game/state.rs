//! Per-stage runtime state and the frame update
//!
//! One `StageState` per stage attempt. The update consumes a `FrameInput`
//! and a delta time and reports what the frame meant for the run: nothing,
//! a death (with its cause), or a cleared stage. Session bookkeeping
//! (death counter, stage advancement, sounds) stays in the caller.

use std::path::PathBuf;

use macroquad::prelude::Vec2;

use crate::input::FrameInput;
use crate::world::{Stage, StageError};

use super::collision;
use super::entities::{chase_velocity, flee_velocity, Coin, Enemy, Portal};
use super::player::Player;
use super::specials::{self, StageOverrides};

/// Why the player died this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    TimerExpired,
    Hazard,
    Enemy,
    OutOfBounds,
    /// Manual restart (Esc) - produced by the app, not the update
    Restart,
}

impl std::fmt::Display for DeathCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DeathCause::TimerExpired => "timer expired",
            DeathCause::Hazard => "touched a hazard",
            DeathCause::Enemy => "touched an enemy",
            DeathCause::OutOfBounds => "fell out of the stage",
            DeathCause::Restart => "manual restart",
        };
        f.write_str(s)
    }
}

/// What one frame of simulation meant for the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageEvent {
    None,
    Died(DeathCause),
    Cleared,
}

/// Everything that lives for one stage attempt
pub struct StageState {
    pub stage: Stage,
    pub level: u32,
    pub player: Player,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub portal: Portal,
    pub coins_to_collect: usize,
    pub coins_collected: usize,
    /// Seconds left on the stage timer
    pub time_left: f32,
    /// Shared one-second animation clock
    pub animation_clock: f32,
    pub overrides: StageOverrides,
}

/// Path of the RON file for a stage number
pub fn stage_path(level: u32) -> PathBuf {
    PathBuf::from(format!("assets/stages/stage_{:02}.ron", level))
}

impl StageState {
    /// Load a stage file from disk and set up a fresh attempt
    pub fn load(level: u32, time_limit: f32) -> Result<Self, StageError> {
        let stage = Stage::load(stage_path(level))?;
        Ok(Self::from_stage(stage, level, time_limit))
    }

    /// Set up a fresh attempt from already-loaded stage data
    pub fn from_stage(stage: Stage, level: u32, time_limit: f32) -> Self {
        let player = Player::new(stage.spawn);
        let coins: Vec<Coin> = stage.coins.iter().map(|&p| Coin::new(p)).collect();
        let enemies: Vec<Enemy> = stage.enemies.iter().map(|&p| Enemy::new(p)).collect();
        let portal = Portal::new(stage.portal_tiles.clone());
        let coins_to_collect = coins.len();
        Self {
            stage,
            level,
            player,
            coins,
            enemies,
            portal,
            coins_to_collect,
            coins_collected: 0,
            time_left: time_limit,
            animation_clock: 0.0,
            overrides: specials::overrides_for(level),
        }
    }

    pub fn coins_left(&self) -> usize {
        self.coins_to_collect - self.coins_collected
    }

    /// Advance the stage by one frame
    pub fn update(&mut self, input: &FrameInput, dt: f32) -> StageEvent {
        // Stage timer
        self.time_left -= dt;
        if self.time_left < 0.0 {
            return StageEvent::Died(DeathCause::TimerExpired);
        }

        // Shared animation clock (coins, idle squash)
        self.animation_clock += dt;
        if self.animation_clock > 1.0 {
            self.animation_clock -= 1.0;
        }

        // Player movement, jump, collision
        self.player.apply_movement(input, dt);
        if input.jump_pressed {
            self.player.try_jump();
        }
        let result = collision::move_and_slide(
            &self.stage,
            self.player.pos,
            self.player.vel,
            Vec2::new(self.player.width, self.player.height),
            dt,
        );
        self.player.pos = result.pos;
        self.player.vel = result.vel;
        self.player.grounded = result.grounded;
        if result.grounded {
            self.player.rearm_jumps();
        } else {
            self.player.mark_airborne();
        }
        self.player.apply_idle_squash(self.animation_clock);

        // Keep the player inside the stage horizontally; falling out the
        // bottom is fatal.
        let half_w = self.player.width / 2.0;
        self.player.pos.x = self
            .player
            .pos
            .x
            .clamp(half_w, self.stage.pixel_width() - half_w);
        if self.player.pos.y > self.stage.pixel_height() + 5.0 * self.player.height {
            return StageEvent::Died(DeathCause::OutOfBounds);
        }

        let player_rect = self.player.rect();

        // Coins
        let before = self.coins.len();
        let player_pos = self.player.pos;
        let player_vx = self.player.vel.x;
        self.coins.retain(|c| !c.rect().overlaps(&player_rect));
        self.coins_collected += before - self.coins.len();

        if self.overrides.coins_flee {
            for coin in &mut self.coins {
                coin.vel = flee_velocity(coin.pos, player_pos);
                coin.pos += coin.vel * dt;
            }
        }

        // Enemies
        if let Some(speed) = self.overrides.chase_speed {
            for enemy in &mut self.enemies {
                enemy.vel = chase_velocity(enemy.pos, player_pos, player_vx, speed);
                enemy.pos += enemy.vel * dt;
            }
        }

        // Fatal contacts
        if self.stage.hazard_overlap(player_rect) {
            return StageEvent::Died(DeathCause::Hazard);
        }
        if self.enemies.iter().any(|e| e.rect().overlaps(&player_rect)) {
            return StageEvent::Died(DeathCause::Enemy);
        }

        // Portal: reveal once every coin is collected, then exit on touch
        if !self.portal.active && self.coins_collected == self.coins_to_collect {
            self.portal.active = true;
        }
        if self.portal.active && self.overrides.portal_drifts {
            self.portal.drift(dt);
        }
        if self.portal.contact(player_rect) {
            return StageEvent::Cleared;
        }

        StageEvent::None
    }
}
