//! Game action definitions

/// All actions that can be triggered by input
///
/// Key mappings:
/// - A/D or Left/Right = Move
/// - Space = Jump
/// - LShift = Sprint, LCtrl = Crawl
/// - Esc = Restart stage (counts a death)
/// - F12 = Full reset to title, F11 = Fullscreen
/// - F10/F9 = Music volume up/down
/// - B = Begin, C = Controls, M = Difficulty (title screen only)
/// - Backslash = Dev mode, Up/Down = dev stage navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (held)
    MoveLeft,
    MoveRight,
    Jump,
    Sprint,
    Crawl,

    // Stage / session control
    RestartStage,
    FullReset,

    // Window / audio
    ToggleFullscreen,
    VolumeUp,
    VolumeDown,

    // Title screen
    Begin,
    ShowControls,
    ToggleDifficulty,

    // Developer stage navigation
    DevMode,
    DevNextStage,
    DevPrevStage,
}
