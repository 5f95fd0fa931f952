//! Coins, enemies, and the portal
//!
//! Plain data structs plus the steering helpers used by the per-stage
//! overrides (floating enemies that chase, coins that flee, the drifting
//! portal on the runaway stage).

use macroquad::prelude::{Rect, Vec2};

use crate::world::TILE_SIZE;

pub const COIN_RADIUS: f32 = 10.0;
pub const ENEMY_SIZE: f32 = 24.0;

/// Chasing enemies freeze while the player is slower than this
pub const CHASE_MIN_PLAYER_SPEED: f32 = 60.0;

/// Coins flee when the player gets within this distance
pub const FLEE_RADIUS: f32 = 100.0;
pub const FLEE_SPEED: f32 = 600.0;

/// Upward drift of the active portal on the runaway stage
pub const PORTAL_DRIFT_SPEED: f32 = 300.0;

/// Coin animation: four quarter-second frames on a one-second clock
pub const COIN_FRAMES: usize = 4;

#[derive(Debug, Clone)]
pub struct Coin {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Coin {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            self.pos.x - COIN_RADIUS,
            self.pos.y - COIN_RADIUS,
            COIN_RADIUS * 2.0,
            COIN_RADIUS * 2.0,
        )
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Enemy {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            self.pos.x - ENEMY_SIZE / 2.0,
            self.pos.y - ENEMY_SIZE / 2.0,
            ENEMY_SIZE,
            ENEMY_SIZE,
        )
    }
}

/// The level-exit trigger zone. Inert until every coin is collected.
#[derive(Debug, Clone)]
pub struct Portal {
    pub tiles: Vec<Vec2>,
    pub active: bool,
}

impl Portal {
    pub fn new(tiles: Vec<Vec2>) -> Self {
        Self {
            tiles,
            active: false,
        }
    }

    /// Does the rect touch any portal tile? Always false while inert.
    pub fn contact(&self, rect: Rect) -> bool {
        if !self.active {
            return false;
        }
        self.tiles.iter().any(|t| {
            Rect::new(
                t.x - TILE_SIZE / 2.0,
                t.y - TILE_SIZE / 2.0,
                TILE_SIZE,
                TILE_SIZE,
            )
            .overlaps(&rect)
        })
    }

    /// Drift the whole portal upward (runaway stage)
    pub fn drift(&mut self, dt: f32) {
        for t in &mut self.tiles {
            t.y -= PORTAL_DRIFT_SPEED * dt;
        }
    }
}

/// Which coin frame to show for the shared animation clock (0.0..1.0)
pub fn coin_frame(animation_clock: f32) -> usize {
    ((animation_clock * COIN_FRAMES as f32) as usize).min(COIN_FRAMES - 1)
}

/// Steering for floating enemies: head straight at the player while the
/// player is moving, freeze while they hold still.
pub fn chase_velocity(enemy: Vec2, player: Vec2, player_vx: f32, speed: f32) -> Vec2 {
    if player_vx.abs() <= CHASE_MIN_PLAYER_SPEED {
        return Vec2::ZERO;
    }
    (player - enemy).normalize_or_zero() * speed
}

/// Steering for runaway coins: bolt directly away inside the flee radius,
/// stop dead outside it.
pub fn flee_velocity(coin: Vec2, player: Vec2) -> Vec2 {
    if coin.distance(player) >= FLEE_RADIUS {
        return Vec2::ZERO;
    }
    (coin - player).normalize_or_zero() * FLEE_SPEED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_frame_quarters() {
        assert_eq!(coin_frame(0.0), 0);
        assert_eq!(coin_frame(0.24), 0);
        assert_eq!(coin_frame(0.26), 1);
        assert_eq!(coin_frame(0.51), 2);
        assert_eq!(coin_frame(0.76), 3);
        assert_eq!(coin_frame(0.999), 3);
    }

    #[test]
    fn test_chase_needs_moving_player() {
        let enemy = Vec2::new(0.0, 0.0);
        let player = Vec2::new(100.0, 0.0);
        assert_eq!(chase_velocity(enemy, player, 0.0, 480.0), Vec2::ZERO);
        let v = chase_velocity(enemy, player, 240.0, 480.0);
        assert!((v.length() - 480.0).abs() < 0.01);
        assert!(v.x > 0.0 && v.y.abs() < 0.01);
    }

    #[test]
    fn test_flee_radius() {
        let player = Vec2::new(0.0, 0.0);
        let near = Vec2::new(50.0, 0.0);
        let far = Vec2::new(200.0, 0.0);
        let v = flee_velocity(near, player);
        assert!((v.length() - FLEE_SPEED).abs() < 0.01);
        assert!(v.x > 0.0);
        assert_eq!(flee_velocity(far, player), Vec2::ZERO);
    }

    #[test]
    fn test_portal_inert_until_active() {
        let mut portal = Portal::new(vec![Vec2::new(16.0, 16.0)]);
        let on_top = Rect::new(8.0, 8.0, 16.0, 16.0);
        assert!(!portal.contact(on_top));
        portal.active = true;
        assert!(portal.contact(on_top));
        assert!(!portal.contact(Rect::new(200.0, 200.0, 16.0, 16.0)));
    }

    #[test]
    fn test_portal_drift_moves_up() {
        let mut portal = Portal::new(vec![Vec2::new(16.0, 100.0)]);
        portal.drift(0.1);
        assert!((portal.tiles[0].y - 70.0).abs() < 0.01);
    }
}
