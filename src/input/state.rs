//! Keyboard mapping and per-frame input snapshot

use macroquad::prelude::*;

use super::Action;

/// Check if an action's key is currently held down
pub fn action_down(action: Action) -> bool {
    match action {
        Action::MoveLeft => is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
        Action::MoveRight => is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
        Action::Jump => is_key_down(KeyCode::Space),
        Action::Sprint => is_key_down(KeyCode::LeftShift),
        Action::Crawl => is_key_down(KeyCode::LeftControl),
        _ => is_key_down(key_for(action)),
    }
}

/// Check if an action's key was pressed this frame
pub fn action_pressed(action: Action) -> bool {
    match action {
        Action::MoveLeft => is_key_pressed(KeyCode::A) || is_key_pressed(KeyCode::Left),
        Action::MoveRight => is_key_pressed(KeyCode::D) || is_key_pressed(KeyCode::Right),
        _ => is_key_pressed(key_for(action)),
    }
}

fn key_for(action: Action) -> KeyCode {
    match action {
        Action::MoveLeft => KeyCode::A,
        Action::MoveRight => KeyCode::D,
        Action::Jump => KeyCode::Space,
        Action::Sprint => KeyCode::LeftShift,
        Action::Crawl => KeyCode::LeftControl,
        Action::RestartStage => KeyCode::Escape,
        Action::FullReset => KeyCode::F12,
        Action::ToggleFullscreen => KeyCode::F11,
        Action::VolumeUp => KeyCode::F10,
        Action::VolumeDown => KeyCode::F9,
        Action::Begin => KeyCode::B,
        Action::ShowControls => KeyCode::C,
        Action::ToggleDifficulty => KeyCode::M,
        Action::DevMode => KeyCode::Backslash,
        Action::DevNextStage => KeyCode::Up,
        Action::DevPrevStage => KeyCode::Down,
    }
}

/// Snapshot of the movement inputs for one frame
///
/// Gameplay code takes this instead of polling macroquad directly, so the
/// update logic stays testable with hand-built values.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// -1.0 (left), 0.0, or 1.0 (right)
    pub axis: f32,
    pub sprint: bool,
    pub crawl: bool,
    /// Jump key went down this frame
    pub jump_pressed: bool,
}

impl FrameInput {
    /// Poll the keyboard for this frame's movement inputs
    pub fn poll() -> Self {
        let mut axis = 0.0;
        if action_down(Action::MoveLeft) {
            axis -= 1.0;
        }
        if action_down(Action::MoveRight) {
            axis += 1.0;
        }
        Self {
            axis,
            sprint: action_down(Action::Sprint),
            crawl: action_down(Action::Crawl),
            jump_pressed: action_pressed(Action::Jump),
        }
    }
}
