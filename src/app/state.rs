use bevy::prelude::*;

/// High-level session lifecycle. Gameplay systems run only in `Playing`;
/// the session reset path is the sole route back out of `GameOver`.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    #[default]
    Playing,
    /// The cannon got buried; simulation continues but nothing scores.
    GameOver,
}
