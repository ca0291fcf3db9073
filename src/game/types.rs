// Shared enums used by the game controller and the main loop

/// What the main loop should do after an action was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Result of one ship hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// A ship was lost and the round restarts after a pause
    RoundReset,
    /// That was the last ship
    GameOver,
}
