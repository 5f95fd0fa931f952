//! Sound effects and background music
//!
//! Thin wrapper over macroquad's audio. Missing files degrade to silence
//! with a logged warning so a stripped-down checkout still runs.

use macroquad::audio::{
    load_sound, play_sound, play_sound_once, set_sound_volume, PlaySoundParams, Sound,
};

pub const COIN_SOUND: &str = "assets/sounds/coin.wav";
pub const DEATH_SOUND: &str = "assets/sounds/death.wav";
pub const MUSIC: &str = "assets/sounds/music.wav";

pub struct Sounds {
    coin: Option<Sound>,
    death: Option<Sound>,
    music: Option<Sound>,
}

impl Sounds {
    pub async fn load() -> Self {
        Self {
            coin: load_optional(COIN_SOUND).await,
            death: load_optional(DEATH_SOUND).await,
            music: load_optional(MUSIC).await,
        }
    }

    /// One chime per coin, so grabbing several in a frame sounds like it
    pub fn play_coins(&self, count: usize) {
        if let Some(s) = &self.coin {
            for _ in 0..count {
                play_sound_once(s);
            }
        }
    }

    pub fn play_death(&self) {
        if let Some(s) = &self.death {
            play_sound_once(s);
        }
    }

    /// Start the looping background track
    pub fn start_music(&self, volume: f32) {
        if let Some(s) = &self.music {
            play_sound(
                s,
                PlaySoundParams {
                    looped: true,
                    volume,
                },
            );
        }
    }

    pub fn set_music_volume(&self, volume: f32) {
        if let Some(s) = &self.music {
            set_sound_volume(s, volume);
        }
    }
}

async fn load_optional(path: &str) -> Option<Sound> {
    match load_sound(path).await {
        Ok(sound) => Some(sound),
        Err(e) => {
            eprintln!("Failed to load {}: {} (continuing without it)", path, e);
            None
        }
    }
}
