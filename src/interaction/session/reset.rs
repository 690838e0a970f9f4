use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::config::GameConfig;
use crate::core::rng::SessionRng;
use crate::gameplay::cannon::{FireControl, Projectile};
use crate::gameplay::scoring::SessionState;
use crate::gameplay::spawner::{spawn_target, RespawnTimer};
use crate::gameplay::target::{Particle, Target};

/// Session-level requests, decoupled from the key that raised them.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum SessionCommand {
    Reset,
}

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SessionCommand>()
            .add_systems(Update, handle_session_commands);
    }
}

/// Tears the session down to its initial shape: every transient body goes,
/// score and prize queue clear, the cannon stops firing, and a fresh target
/// drops. Deliberately not gated on state so it also works from GameOver.
pub fn handle_session_commands(
    mut ev: EventReader<SessionCommand>,
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut rng: ResMut<SessionRng>,
    mut session: ResMut<SessionState>,
    mut fire: ResMut<FireControl>,
    mut respawn: ResMut<RespawnTimer>,
    q_transient: Query<Entity, Or<(With<Target>, With<Projectile>, With<Particle>)>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if !ev.read().any(|c| *c == SessionCommand::Reset) {
        return;
    }
    for entity in q_transient.iter() {
        commands.entity(entity).try_despawn();
    }
    session.reset();
    fire.stop();
    respawn.0 = None;
    next_state.set(AppState::Playing);
    spawn_target(&mut commands, &cfg, &mut rng);
    info!("session reset");
}
