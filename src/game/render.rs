//! Stage drawing
//!
//! Everything is drawn in map coordinates scaled so the stage always spans
//! the window width. Sprites are shape primitives: squashy rectangle player,
//! spinning gold coins, red blob enemies, purple portal.

use macroquad::prelude::*;

use crate::world::TILE_SIZE;

use super::entities::{coin_frame, COIN_RADIUS, ENEMY_SIZE};
use super::player::{Facing, Player, Pose};
use super::StageState;

const TERRAIN_COLOR: Color = Color::new(0.36, 0.22, 0.11, 1.00);
const TERRAIN_TOP_COLOR: Color = Color::new(0.26, 0.55, 0.24, 1.00);
const PLAYER_COLOR: Color = Color::new(0.25, 0.55, 0.95, 1.00);
const PORTAL_COLOR: Color = Color::new(0.60, 0.25, 0.85, 1.00);

/// Scale factor mapping map pixels to screen pixels
pub fn stage_scale(state: &StageState) -> f32 {
    screen_width() / state.stage.pixel_width()
}

/// Draw one frame of the stage
pub fn draw_stage(state: &StageState) {
    let k = stage_scale(state);

    draw_terrain(state, k);
    draw_coins(state, k);
    draw_enemies(state, k);
    draw_portal(state, k);
    draw_player(&state.player, k);
}

fn draw_terrain(state: &StageState, k: f32) {
    let tile = TILE_SIZE * k;
    for ty in 0..state.stage.height_tiles() {
        for tx in 0..state.stage.width_tiles() {
            let x = tx as f32 * tile;
            let y = ty as f32 * tile;
            if state.stage.is_solid(tx as i32, ty as i32) {
                draw_rectangle(x, y, tile, tile, TERRAIN_COLOR);
                // Grass lip on exposed tops
                if !state.stage.is_solid(tx as i32, ty as i32 - 1) {
                    draw_rectangle(x, y, tile, tile * 0.2, TERRAIN_TOP_COLOR);
                }
            } else if state.stage.is_hazard(tx as i32, ty as i32) {
                draw_spikes(x, y, tile);
            }
        }
    }
}

fn draw_spikes(x: f32, y: f32, tile: f32) {
    // Two spikes per tile, points up
    for i in 0..2 {
        let base = x + i as f32 * tile / 2.0;
        draw_triangle(
            Vec2::new(base, y + tile),
            Vec2::new(base + tile / 2.0, y + tile),
            Vec2::new(base + tile / 4.0, y + tile * 0.25),
            RED,
        );
    }
}

/// A coin at `pos` showing the given spin frame
fn draw_coin_at(pos: Vec2, frame: usize, k: f32) {
    // Horizontal radius shrinks through the spin cycle to fake rotation
    let squeeze = match frame {
        0 => 1.0,
        1 => 0.6,
        2 => 0.2,
        _ => 0.6,
    };
    draw_ellipse(
        pos.x * k,
        pos.y * k,
        COIN_RADIUS * squeeze * k,
        COIN_RADIUS * k,
        0.0,
        GOLD,
    );
}

fn draw_coins(state: &StageState, k: f32) {
    let frame = coin_frame(state.animation_clock);
    for coin in &state.coins {
        draw_coin_at(coin.pos, frame, k);
    }
}

fn draw_enemies(state: &StageState, k: f32) {
    let frame = coin_frame(state.animation_clock);
    for enemy in &state.enemies {
        if state.overrides.enemies_as_coins {
            // Disguised hazards look exactly like coins
            draw_coin_at(enemy.pos, frame, k);
        } else {
            let r = ENEMY_SIZE / 2.0 * k;
            let (x, y) = (enemy.pos.x * k, enemy.pos.y * k);
            draw_circle(x, y, r, MAROON);
            draw_circle(x - r * 0.35, y - r * 0.25, r * 0.18, WHITE);
            draw_circle(x + r * 0.35, y - r * 0.25, r * 0.18, WHITE);
        }
    }
}

fn draw_portal(state: &StageState, k: f32) {
    if !state.portal.active {
        return;
    }
    let tile = TILE_SIZE * k;
    for t in &state.portal.tiles {
        draw_ellipse(t.x * k, t.y * k, tile * 0.4, tile * 0.55, 0.0, PORTAL_COLOR);
        draw_ellipse(t.x * k, t.y * k, tile * 0.25, tile * 0.4, 0.0, BLACK);
    }
}

fn draw_player(player: &Player, k: f32) {
    let w = player.width * k;
    let h = player.height * k;
    let x = player.pos.x * k - w / 2.0;
    let y = player.pos.y * k - h / 2.0;
    draw_rectangle(x, y, w, h, PLAYER_COLOR);

    // Eye marks the facing; it rides up when rising, down when falling
    let eye_x = match player.facing {
        Facing::Right => x + w * 0.72,
        Facing::Left => x + w * 0.28,
    };
    let eye_y = match player.pose() {
        Pose::Stand => y + h * 0.3,
        Pose::Rise => y + h * 0.2,
        Pose::Fall => y + h * 0.42,
    };
    draw_circle(eye_x, eye_y, w * 0.12, WHITE);
    draw_circle(eye_x, eye_y, w * 0.06, BLACK);
}
