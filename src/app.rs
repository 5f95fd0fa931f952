//! Application state
//!
//! Session-level bookkeeping that outlives any single stage attempt: which
//! screen is showing, the run counters (deaths, total time), difficulty,
//! dev mode, and audio/window toggles. Per-stage state lives in
//! `game::StageState` and is rebuilt on every death or stage change.

use macroquad::prelude::Color;

use crate::game::specials::palette;
use crate::game::{DeathCause, StageState};
use crate::world::{Difficulty, StageError, StageTimes};

pub const FIRST_STAGE: u32 = 1;
pub const LAST_STAGE: u32 = 20;

/// Used only if the timer table misses a stage despite the startup check
const FALLBACK_TIME: f32 = 30.0;

pub const DEFAULT_MUSIC_VOLUME: f32 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Playing,
    Results,
    Controls,
}

pub struct App {
    pub screen: Screen,
    /// Current stage number while playing (1..=20)
    pub level: u32,
    pub deaths: u32,
    /// Whole-run clock in seconds
    pub total_time: f64,
    pub difficulty: Difficulty,
    pub dev_mode: bool,
    pub music_volume: f32,
    pub fullscreen: bool,
    pub times: StageTimes,
    /// Current stage attempt; None outside of Playing
    pub stage: Option<StageState>,
}

impl App {
    pub fn new(times: StageTimes) -> Self {
        Self {
            screen: Screen::Title,
            level: FIRST_STAGE,
            deaths: 0,
            total_time: 0.0,
            difficulty: Difficulty::default(),
            dev_mode: false,
            music_volume: DEFAULT_MUSIC_VOLUME,
            fullscreen: true,
            times,
            stage: None,
        }
    }

    /// Timer allowance for the current stage at the current difficulty
    pub fn time_limit(&self) -> f32 {
        self.times
            .time_for(self.level, self.difficulty)
            .unwrap_or(FALLBACK_TIME)
    }

    /// (Re)load the current stage from disk
    pub fn load_stage(&mut self) -> Result<(), StageError> {
        self.stage = Some(StageState::load(self.level, self.time_limit())?);
        Ok(())
    }

    /// Start a fresh run from stage 1
    pub fn begin_run(&mut self) {
        self.level = FIRST_STAGE;
        self.deaths = 0;
        self.total_time = 0.0;
        self.screen = Screen::Playing;
    }

    pub fn record_death(&mut self, cause: DeathCause) {
        self.deaths += 1;
        println!("Player died ({}). Resetting stage {}...", cause, self.level);
    }

    /// Move to the next stage; past the last one the run is over
    pub fn advance_stage(&mut self) {
        self.level += 1;
        if self.level > LAST_STAGE {
            self.screen = Screen::Results;
            self.stage = None;
        }
    }

    /// Full reset back to the title screen (F12 / leaving results)
    pub fn reset_session(&mut self) {
        self.screen = Screen::Title;
        self.level = FIRST_STAGE;
        self.deaths = 0;
        self.total_time = 0.0;
        self.dev_mode = false;
        self.stage = None;
    }

    /// Dev-mode stage navigation, usable from any screen: stepping forward
    /// on the title or controls screen drops into the first stage, stepping
    /// back from the results re-enters the last, and stepping past the end
    /// shows the results.
    pub fn dev_stage_jump(&mut self, delta: i32) {
        let next = match self.screen {
            Screen::Playing => self.level as i32 + delta,
            Screen::Title | Screen::Controls => {
                if delta <= 0 {
                    return;
                }
                FIRST_STAGE as i32
            }
            Screen::Results => {
                if delta >= 0 {
                    return;
                }
                LAST_STAGE as i32
            }
        };
        if next > LAST_STAGE as i32 {
            self.screen = Screen::Results;
            self.stage = None;
            return;
        }
        self.level = next.max(FIRST_STAGE as i32) as u32;
        self.screen = Screen::Playing;
    }

    /// Background color for the current screen
    pub fn background(&self) -> Color {
        match self.screen {
            Screen::Playing => self
                .stage
                .as_ref()
                .and_then(|s| s.overrides.background)
                .unwrap_or(palette::DARK_BROWN),
            Screen::Results if self.dev_mode => palette::DARK_RED,
            _ => palette::DARK_BROWN,
        }
    }
}
