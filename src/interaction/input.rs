use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::gameplay::cannon::CannonCommand;
use crate::interaction::session::reset::SessionCommand;

/// Maps raw keyboard state to gameplay commands. Aiming is rate-based, so
/// held arrows rotate smoothly; fire and reset are edge-triggered.
pub fn keyboard_input(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut cannon_ev: EventWriter<CannonCommand>,
    mut session_ev: EventWriter<SessionCommand>,
) {
    let step = cfg.cannon.rotate_speed * time.delta_secs();
    if keys.pressed(KeyCode::ArrowLeft) {
        cannon_ev.write(CannonCommand::Rotate(-step));
    }
    if keys.pressed(KeyCode::ArrowRight) {
        cannon_ev.write(CannonCommand::Rotate(step));
    }
    if keys.just_pressed(KeyCode::Space) {
        cannon_ev.write(CannonCommand::StartFiring);
    }
    if keys.just_released(KeyCode::Space) {
        cannon_ev.write(CannonCommand::StopFiring);
    }
    if keys.just_pressed(KeyCode::KeyR) {
        session_ev.write(SessionCommand::Reset);
    }
}
