//! Per-stage special cases
//!
//! A handful of stages tweak the rules or the mood: floating enemies that
//! chase, hazards disguised as coins, a stage where the coins run away and
//! the portal will not sit still, plus one-off background colors. All of it
//! hangs off one lookup keyed by stage number so the update loop stays
//! uniform.

use macroquad::prelude::Color;

/// Colors not in macroquad's stock palette
pub mod palette {
    use macroquad::prelude::Color;

    pub const DARK_BROWN: Color = Color::new(0.40, 0.26, 0.13, 1.00);
    pub const DARK_OLIVE_GREEN: Color = Color::new(0.33, 0.42, 0.18, 1.00);
    pub const DESERT_SAND: Color = Color::new(0.93, 0.79, 0.69, 1.00);
    pub const BABY_PINK: Color = Color::new(0.96, 0.76, 0.76, 1.00);
    pub const YELLOW_ORANGE: Color = Color::new(1.00, 0.68, 0.26, 1.00);
    pub const BLUEBERRY: Color = Color::new(0.31, 0.53, 0.97, 1.00);
    pub const DARK_RED: Color = Color::new(0.55, 0.00, 0.00, 1.00);
    pub const CELADON_GREEN: Color = Color::new(0.18, 0.52, 0.49, 1.00);
}

/// Behavior and mood overrides for one stage
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StageOverrides {
    /// Background color; None keeps the default dark brown
    pub background: Option<Color>,
    /// Floating enemies chase the player at this speed (map px/s)
    pub chase_speed: Option<f32>,
    /// Draw enemies with the coin animation (disguised hazards)
    pub enemies_as_coins: bool,
    /// Coins flee from the player
    pub coins_flee: bool,
    /// The active portal drifts upward
    pub portal_drifts: bool,
}

/// Look up the overrides for a stage. Most stages get the defaults.
pub fn overrides_for(stage: u32) -> StageOverrides {
    match stage {
        4 => StageOverrides {
            chase_speed: Some(660.0),
            background: Some(palette::DARK_OLIVE_GREEN),
            ..Default::default()
        },
        8 => StageOverrides {
            background: Some(macroquad::prelude::GRAY),
            ..Default::default()
        },
        10 => StageOverrides {
            chase_speed: Some(180.0),
            ..Default::default()
        },
        11 => StageOverrides {
            background: Some(macroquad::prelude::SKYBLUE),
            ..Default::default()
        },
        14 => StageOverrides {
            chase_speed: Some(480.0),
            background: Some(palette::DESERT_SAND),
            ..Default::default()
        },
        15 => StageOverrides {
            enemies_as_coins: true,
            ..Default::default()
        },
        16 => StageOverrides {
            background: Some(palette::BABY_PINK),
            ..Default::default()
        },
        18 => StageOverrides {
            coins_flee: true,
            portal_drifts: true,
            background: Some(palette::YELLOW_ORANGE),
            ..Default::default()
        },
        20 => StageOverrides {
            background: Some(palette::BLUEBERRY),
            ..Default::default()
        },
        _ => StageOverrides::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_stages_get_defaults() {
        for stage in [1, 2, 3, 5, 9, 13, 17, 19] {
            assert_eq!(overrides_for(stage), StageOverrides::default());
        }
    }

    #[test]
    fn test_chase_stages() {
        assert_eq!(overrides_for(4).chase_speed, Some(660.0));
        assert_eq!(overrides_for(10).chase_speed, Some(180.0));
        assert_eq!(overrides_for(14).chase_speed, Some(480.0));
        assert!(overrides_for(10).background.is_none());
    }

    #[test]
    fn test_runaway_stage() {
        let o = overrides_for(18);
        assert!(o.coins_flee);
        assert!(o.portal_drifts);
        assert_eq!(o.background, Some(palette::YELLOW_ORANGE));
    }

    #[test]
    fn test_disguised_hazards() {
        assert!(overrides_for(15).enemies_as_coins);
        assert!(!overrides_for(15).coins_flee);
    }
}
