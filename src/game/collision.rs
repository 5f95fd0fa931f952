//! Tile collision
//!
//! Axis-separated AABB move-and-slide against the stage's solid tiles:
//! horizontal step first (walls), then gravity and the vertical step
//! (floors/ceilings). Positions are AABB centers in map pixels, y grows
//! downward.

use macroquad::prelude::{Rect, Vec2};

use crate::world::{Stage, TILE_SIZE};

/// Downward acceleration in map pixels per second squared
pub const GRAVITY: f32 = 2160.0;

/// Keeps resolved positions just clear of the tile faces
const SKIN: f32 = 0.01;

/// Result of a move-and-slide step
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Corrected position after collision
    pub pos: Vec2,
    /// Velocity after collision (vertical zeroed on floor/ceiling contact)
    pub vel: Vec2,
    /// Is the entity standing on a solid tile?
    pub grounded: bool,
    /// Did the horizontal step hit a wall?
    pub hit_wall: bool,
    /// Did the vertical step hit a ceiling?
    pub hit_ceiling: bool,
}

fn rect_at(center: Vec2, size: Vec2) -> Rect {
    Rect::new(
        center.x - size.x / 2.0,
        center.y - size.y / 2.0,
        size.x,
        size.y,
    )
}

/// Move an AABB through the stage for one frame
///
/// Gravity accumulates into the vertical velocity here, matching the rest
/// of the per-frame units.
pub fn move_and_slide(
    stage: &Stage,
    pos: Vec2,
    vel: Vec2,
    size: Vec2,
    dt: f32,
) -> CollisionResult {
    let mut p = pos;
    let mut v = vel;
    let mut hit_wall = false;
    let mut hit_ceiling = false;
    let mut grounded = false;

    // Horizontal step
    p.x += v.x * dt;
    let r = rect_at(p, size);
    if stage.solid_overlap(r) {
        if v.x > 0.0 {
            let col = ((r.x + r.w) / TILE_SIZE).floor();
            p.x = col * TILE_SIZE - size.x / 2.0 - SKIN;
        } else if v.x < 0.0 {
            let col = (r.x / TILE_SIZE).floor();
            p.x = (col + 1.0) * TILE_SIZE + size.x / 2.0 + SKIN;
        }
        hit_wall = true;
    }

    // Vertical step
    v.y += GRAVITY * dt;
    p.y += v.y * dt;
    let r = rect_at(p, size);
    if stage.solid_overlap(r) {
        if v.y > 0.0 {
            let row = ((r.y + r.h) / TILE_SIZE).floor();
            p.y = row * TILE_SIZE - size.y / 2.0 - SKIN;
            grounded = true;
        } else if v.y < 0.0 {
            let row = (r.y / TILE_SIZE).floor();
            p.y = (row + 1.0) * TILE_SIZE + size.y / 2.0 + SKIN;
            hit_ceiling = true;
        }
        v.y = 0.0;
    }

    CollisionResult {
        pos: p,
        vel: v,
        grounded,
        hit_wall,
        hit_ceiling,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const SIZE: Vec2 = Vec2::new(22.0, 28.0);

    fn stage(rows: &[&str]) -> Stage {
        Stage::from_rows("test", rows).expect("valid stage")
    }

    #[test]
    fn test_free_fall_accumulates_gravity() {
        let s = stage(&[
            "S..P",
            "....",
            "....",
            "....",
        ]);
        let r1 = move_and_slide(&s, Vec2::new(64.0, 20.0), Vec2::ZERO, SIZE, DT);
        assert!((r1.vel.y - GRAVITY * DT).abs() < 0.01);
        assert!(!r1.grounded);
        let r2 = move_and_slide(&s, r1.pos, r1.vel, SIZE, DT);
        assert!((r2.vel.y - 2.0 * GRAVITY * DT).abs() < 0.01);
        assert!(r2.pos.y > r1.pos.y);
    }

    #[test]
    fn test_landing_zeroes_vertical_velocity() {
        let s = stage(&[
            "S..P",
            "....",
            "####",
        ]);
        // Drop onto the floor row (top edge at y = 64)
        let mut pos = Vec2::new(48.0, 40.0);
        let mut vel = Vec2::ZERO;
        let mut grounded = false;
        for _ in 0..30 {
            let r = move_and_slide(&s, pos, vel, SIZE, DT);
            pos = r.pos;
            vel = r.vel;
            grounded = r.grounded;
            if grounded {
                break;
            }
        }
        assert!(grounded);
        assert_eq!(vel.y, 0.0);
        // Resting with feet on the floor
        assert!((pos.y - (64.0 - SIZE.y / 2.0)).abs() < 0.1);
    }

    #[test]
    fn test_wall_stops_horizontal_motion() {
        let s = stage(&[
            "S.#P",
            "..#.",
            "####",
        ]);
        // Wall column occupies x = 64..96
        let r = move_and_slide(&s, Vec2::new(55.0, 48.0), Vec2::new(300.0, 0.0), SIZE, DT);
        assert!(r.hit_wall);
        assert!((r.pos.x - (64.0 - SIZE.x / 2.0)).abs() < 0.1);
    }

    #[test]
    fn test_ceiling_bonk() {
        let s = stage(&[
            "####",
            "S..P",
            "####",
        ]);
        let r = move_and_slide(&s, Vec2::new(48.0, 48.0), Vec2::new(0.0, -600.0), SIZE, DT);
        assert!(r.hit_ceiling);
        assert_eq!(r.vel.y, 0.0);
        // Head pushed back below the ceiling row (bottom edge at y = 32)
        assert!(r.pos.y - SIZE.y / 2.0 >= 32.0);
    }

    #[test]
    fn test_grounded_stays_put() {
        let s = stage(&[
            "S..P",
            "....",
            "####",
        ]);
        let rest = Vec2::new(48.0, 64.0 - SIZE.y / 2.0 - 0.01);
        let r = move_and_slide(&s, rest, Vec2::ZERO, SIZE, DT);
        assert!(r.grounded);
        assert!((r.pos.y - rest.y).abs() < 0.5);
    }
}
