//! HUD and the non-gameplay screens (title, controls, results)

use macroquad::prelude::*;

use crate::app::App;

use super::specials::palette;
use super::StageState;

const HUD_SIZE: f32 = 30.0;
const HUD_X: f32 = 25.0;

/// In-game HUD: timer, deaths, coins left, level, total time
pub fn draw_hud(app: &App, stage: &StageState) {
    let c = palette::CELADON_GREEN;
    draw_text(&format!("Time: {}", stage.time_left.round()), HUD_X, 50.0, HUD_SIZE, c);
    draw_text(&format!("Deaths: {}", app.deaths), HUD_X, 90.0, HUD_SIZE, c);
    draw_text(
        &format!("Coins Left: {}", stage.coins_left()),
        HUD_X,
        130.0,
        HUD_SIZE,
        c,
    );
    draw_text(
        &format!("Level {} - {}", stage.level, stage.stage.name),
        HUD_X,
        170.0,
        HUD_SIZE,
        c,
    );
    draw_text(
        &format!("Total Time: {:.2}", app.total_time),
        HUD_X,
        210.0,
        24.0,
        c,
    );
    if app.dev_mode {
        draw_text("DEV MODE", HUD_X, 250.0, 24.0, ORANGE);
    }
}

pub fn draw_title(app: &App) {
    let cx = screen_width() / 2.0;
    draw_centered("TIME ATTACK", cx, screen_height() * 0.35, 64.0, GOLD);
    draw_centered(
        "Reach the portal before the clock runs out",
        cx,
        screen_height() * 0.45,
        26.0,
        BEIGE,
    );
    draw_centered(
        "Press 'B' to begin, 'C' for controls",
        cx,
        screen_height() * 0.65,
        30.0,
        WHITE,
    );
    draw_centered(
        &format!("Difficulty: {} (press 'M' to switch)", app.difficulty.label()),
        cx,
        screen_height() * 0.72,
        24.0,
        BEIGE,
    );
}

pub fn draw_controls() {
    let lines = [
        "A/D or arrows to move, Space to jump (double jump!)",
        "Hold LShift to sprint, LCtrl to crawl",
        "Press Esc to restart a level. Adds 1 to death count.",
        "Press F12 to restart the whole game from the title screen.",
        "Press F11 to toggle fullscreen.",
        "Press F10 to raise volume, F9 to lower it.",
        "Press M on the title screen to switch Normal/Hard mode.",
        "Press \\ to enter DEV mode, then Up/Down to cycle stages.",
        "",
        "Click to return to the title screen.",
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 78.0, 120.0 + i as f32 * 60.0, 26.0, BEIGE);
    }
}

pub fn draw_results(app: &App) {
    let cx = screen_width() / 2.0;
    if app.dev_mode {
        draw_centered(
            "Sorry, DEV mode runs do not get a final time or death count. :(",
            cx,
            screen_height() * 0.4,
            28.0,
            BEIGE,
        );
    } else {
        draw_centered(
            &format!("Your final time was {:.2}", app.total_time),
            cx,
            screen_height() * 0.4,
            34.0,
            BEIGE,
        );
        draw_centered(
            &format!("Your final deaths: {}", app.deaths),
            cx,
            screen_height() * 0.48,
            34.0,
            BEIGE,
        );
    }
    draw_centered(
        "Thank you for playing! Click to play again!",
        cx,
        screen_height() * 0.65,
        30.0,
        WHITE,
    );
}

fn draw_centered(text: &str, cx: f32, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, cx - dims.width / 2.0, y, size, color);
}
