//! TIME ATTACK: a short time-attack 2D platformer
//!
//! Get to the portal in as few deaths as possible. Collect every coin in a
//! stage to open the portal, and do it before the stage timer runs out.
//! Twenty stages, a handful of which play dirty.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod audio;
mod game;
mod input;
mod world;

use macroquad::prelude::*;

use app::{App, Screen};
use audio::Sounds;
use game::{hud, render, DeathCause, StageEvent};
use input::{action_pressed, Action, FrameInput};
use world::StageTimes;

const TIMES_PATH: &str = "assets/config/stage_times.txt";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Time Attack v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        fullscreen: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging first (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let times = match StageTimes::load(TIMES_PATH) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to load stage timer table {}: {}", TIMES_PATH, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = times.check_coverage(app::FIRST_STAGE..=app::LAST_STAGE) {
        eprintln!("Stage timer table {} is incomplete: {}", TIMES_PATH, e);
        std::process::exit(1);
    }

    let sounds = Sounds::load().await;
    let mut app = App::new(times);
    sounds.start_music(app.music_volume);
    set_fullscreen(app.fullscreen);

    println!("=== TIME ATTACK v{} ===", VERSION);

    loop {
        let dt = get_frame_time();
        handle_global_keys(&mut app, &sounds);

        match app.screen {
            Screen::Title => update_title(&mut app),
            Screen::Playing => update_playing(&mut app, &sounds, dt),
            Screen::Results | Screen::Controls => {
                if !handle_dev_keys(&mut app) && is_mouse_button_pressed(MouseButton::Left) {
                    app.reset_session();
                }
            }
        }

        clear_background(app.background());
        match app.screen {
            Screen::Title => hud::draw_title(&app),
            Screen::Controls => hud::draw_controls(),
            Screen::Results => hud::draw_results(&app),
            Screen::Playing => {
                if let Some(stage) = &app.stage {
                    render::draw_stage(stage);
                    hud::draw_hud(&app, stage);
                }
            }
        }

        next_frame().await;
    }
}

/// Keys that work on every screen
fn handle_global_keys(app: &mut App, sounds: &Sounds) {
    if action_pressed(Action::ToggleFullscreen) {
        app.fullscreen = !app.fullscreen;
        set_fullscreen(app.fullscreen);
    }
    if action_pressed(Action::VolumeUp) {
        app.music_volume = (app.music_volume + 0.1).clamp(0.0, 1.0);
        sounds.set_music_volume(app.music_volume);
    }
    if action_pressed(Action::VolumeDown) {
        app.music_volume = (app.music_volume - 0.1).clamp(0.0, 1.0);
        sounds.set_music_volume(app.music_volume);
    }
    if action_pressed(Action::FullReset) {
        app.reset_session();
    }
    if action_pressed(Action::DevMode) && !app.dev_mode {
        app.dev_mode = true;
        println!("DEV mode enabled: Up/Down to cycle stages");
    }
}

/// Dev-mode Up/Down stage stepping; works from any screen. Returns true
/// when a step happened this frame.
fn handle_dev_keys(app: &mut App) -> bool {
    if !app.dev_mode {
        return false;
    }
    let delta = if action_pressed(Action::DevNextStage) {
        1
    } else if action_pressed(Action::DevPrevStage) {
        -1
    } else {
        return false;
    };
    app.dev_stage_jump(delta);
    if app.screen == Screen::Playing {
        load_or_die(app);
    }
    true
}

fn update_title(app: &mut App) {
    if handle_dev_keys(app) {
        return;
    }
    if action_pressed(Action::Begin) {
        app.begin_run();
        load_or_die(app);
    } else if action_pressed(Action::ShowControls) {
        app.screen = Screen::Controls;
    } else if action_pressed(Action::ToggleDifficulty) && !app.dev_mode {
        app.difficulty = app.difficulty.toggled();
        println!("{} Mode Enabled", app.difficulty.label());
    }
}

fn update_playing(app: &mut App, sounds: &Sounds, dt: f32) {
    if handle_dev_keys(app) {
        return;
    }

    if action_pressed(Action::RestartStage) {
        app.record_death(DeathCause::Restart);
        sounds.play_death();
        load_or_die(app);
        return;
    }

    let frame = FrameInput::poll();
    let Some(stage) = app.stage.as_mut() else {
        return;
    };
    let coins_before = stage.coins_collected;
    let event = stage.update(&frame, dt);
    let collected = stage.coins_collected - coins_before;
    if collected > 0 {
        sounds.play_coins(collected);
    }
    app.total_time += dt as f64;

    match event {
        StageEvent::None => {}
        StageEvent::Died(cause) => {
            app.record_death(cause);
            sounds.play_death();
            load_or_die(app);
        }
        StageEvent::Cleared => {
            app.advance_stage();
            if app.screen == Screen::Playing {
                load_or_die(app);
            }
        }
    }
}

/// Stage files are required assets; a broken one is fatal.
fn load_or_die(app: &mut App) {
    if let Err(e) = app.load_stage() {
        eprintln!("Failed to load stage {}: {}", app.level, e);
        std::process::exit(1);
    }
}
