//! Player movement and animation state
//!
//! The player is a single AABB driven by per-frame velocity changes. Speeds
//! are in map pixels per second; the stage grid uses 32px tiles.

use macroquad::prelude::Vec2;

use crate::input::FrameInput;

pub const WALK_SPEED: f32 = 240.0;
pub const SPRINT_SPEED: f32 = 300.0;
pub const CRAWL_SPEED: f32 = 60.0;

/// Upward velocity applied by a jump (y grows downward)
pub const JUMP_VELOCITY: f32 = 600.0;
/// Max jumps per airtime (2 = a ground jump plus one air jump)
pub const MAX_JUMPS: u32 = 2;

pub const PLAYER_WIDTH: f32 = 22.0;
pub const PLAYER_HEIGHT: f32 = 28.0;

/// Per-60Hz-frame horizontal decay when no direction is held
const FRICTION_PER_FRAME: f32 = 0.9;

/// Below this horizontal speed the idle squash animation kicks in
const IDLE_SPEED: f32 = 6.0;

/// Movement stance, selected by the sprint/crawl modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stance {
    #[default]
    Walk,
    Sprint,
    Crawl,
}

impl Stance {
    pub fn from_input(input: &FrameInput) -> Self {
        if input.sprint {
            Stance::Sprint
        } else if input.crawl {
            Stance::Crawl
        } else {
            Stance::Walk
        }
    }

    pub fn speed(self) -> f32 {
        match self {
            Stance::Walk => WALK_SPEED,
            Stance::Sprint => SPRINT_SPEED,
            Stance::Crawl => CRAWL_SPEED,
        }
    }

    /// Sprinting ducks the sprite; crawling stretches it
    pub fn height_scale(self) -> f32 {
        match self {
            Stance::Walk => 1.0,
            Stance::Sprint => 0.8,
            Stance::Crawl => 1.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Which sprite pose to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    Stand,
    Rise,
    Fall,
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Center of the AABB, in map pixels
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    /// Current height (stance scale and idle squash applied each frame)
    pub height: f32,
    pub facing: Facing,
    pub grounded: bool,
    jumps_taken: u32,
}

impl Player {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            facing: Facing::default(),
            grounded: false,
            // Spawns count as airborne until the first landing
            jumps_taken: 1,
        }
    }

    /// Apply this frame's horizontal movement and stance
    pub fn apply_movement(&mut self, input: &FrameInput, dt: f32) {
        let stance = Stance::from_input(input);
        self.height = PLAYER_HEIGHT * stance.height_scale();

        if input.axis < 0.0 {
            self.vel.x = -stance.speed();
            self.facing = Facing::Left;
        } else if input.axis > 0.0 {
            self.vel.x = stance.speed();
            self.facing = Facing::Right;
        } else {
            // No direction held: bleed off speed like the ground is grippy
            self.vel.x *= FRICTION_PER_FRAME.powf(dt * 60.0);
        }
    }

    /// Try to jump. Fails once the double jump is spent.
    pub fn try_jump(&mut self) -> bool {
        if self.jumps_taken >= MAX_JUMPS {
            return false;
        }
        self.vel.y = -JUMP_VELOCITY;
        self.jumps_taken += 1;
        true
    }

    /// Ground contact re-arms the full double jump
    pub fn rearm_jumps(&mut self) {
        self.jumps_taken = 0;
    }

    /// Leaving the ground without jumping (walking off a ledge) spends the
    /// ground jump, leaving just the air jump. A jump taken from the ground
    /// already counted itself, so this only tops up from zero.
    pub fn mark_airborne(&mut self) {
        if self.jumps_taken == 0 {
            self.jumps_taken = 1;
        }
    }

    /// Idle squash: when barely moving, pulse between full and 90% height
    /// on the shared one-second animation clock.
    pub fn apply_idle_squash(&mut self, animation_clock: f32) {
        if self.vel.x.abs() < IDLE_SPEED && animation_clock >= 0.5 {
            self.height *= 0.9;
        }
    }

    pub fn pose(&self) -> Pose {
        if self.grounded {
            Pose::Stand
        } else if self.vel.y < 0.0 {
            Pose::Rise
        } else {
            Pose::Fall
        }
    }

    pub fn rect(&self) -> macroquad::prelude::Rect {
        macroquad::prelude::Rect::new(
            self.pos.x - self.width / 2.0,
            self.pos.y - self.height / 2.0,
            self.width,
            self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(axis: f32, sprint: bool, crawl: bool) -> FrameInput {
        FrameInput {
            axis,
            sprint,
            crawl,
            jump_pressed: false,
        }
    }

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_stance_speeds() {
        let mut p = Player::new(Vec2::ZERO);
        p.apply_movement(&held(1.0, false, false), DT);
        assert_eq!(p.vel.x, WALK_SPEED);
        assert_eq!(p.height, PLAYER_HEIGHT);

        p.apply_movement(&held(1.0, true, false), DT);
        assert_eq!(p.vel.x, SPRINT_SPEED);
        assert_eq!(p.height, PLAYER_HEIGHT * 0.8);

        p.apply_movement(&held(-1.0, false, true), DT);
        assert_eq!(p.vel.x, -CRAWL_SPEED);
        assert_eq!(p.height, PLAYER_HEIGHT * 1.2);
        assert_eq!(p.facing, Facing::Left);
    }

    #[test]
    fn test_friction_decay() {
        let mut p = Player::new(Vec2::ZERO);
        p.apply_movement(&held(1.0, false, false), DT);
        let v0 = p.vel.x;
        p.apply_movement(&held(0.0, false, false), DT);
        assert!(p.vel.x < v0);
        assert!((p.vel.x - v0 * 0.9).abs() < 0.5);
    }

    #[test]
    fn test_double_jump_limit() {
        let mut p = Player::new(Vec2::ZERO);
        // Standing on the ground: a ground jump and then an air jump
        p.rearm_jumps();
        assert!(p.try_jump());
        assert_eq!(p.vel.y, -JUMP_VELOCITY);
        p.mark_airborne();
        assert!(p.try_jump());
        assert!(!p.try_jump());

        // Touching ground re-arms both again
        p.rearm_jumps();
        assert!(p.try_jump());
        assert!(p.try_jump());
        assert!(!p.try_jump());
    }

    #[test]
    fn test_walking_off_a_ledge_spends_the_ground_jump() {
        let mut p = Player::new(Vec2::ZERO);
        p.rearm_jumps();
        // No jump pressed; the floor just disappears
        p.mark_airborne();
        assert!(p.try_jump());
        assert!(!p.try_jump());
    }

    #[test]
    fn test_idle_squash_pulses() {
        let mut p = Player::new(Vec2::ZERO);
        p.apply_movement(&held(0.0, false, false), DT);
        let full = p.height;
        p.apply_idle_squash(0.25);
        assert_eq!(p.height, full);
        p.apply_idle_squash(0.75);
        assert!((p.height - full * 0.9).abs() < f32::EPSILON * 100.0);

        // No squash while moving
        let mut q = Player::new(Vec2::ZERO);
        q.apply_movement(&held(1.0, false, false), DT);
        q.apply_idle_squash(0.75);
        assert_eq!(q.height, PLAYER_HEIGHT);
    }

    #[test]
    fn test_pose_selection() {
        let mut p = Player::new(Vec2::ZERO);
        p.grounded = true;
        assert_eq!(p.pose(), Pose::Stand);
        p.grounded = false;
        p.vel.y = -100.0;
        assert_eq!(p.pose(), Pose::Rise);
        p.vel.y = 100.0;
        assert_eq!(p.pose(), Pose::Fall);
    }
}
