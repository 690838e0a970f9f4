use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::components::SimBody;
use crate::core::config::GameConfig;
use crate::gameplay::cannon::Cannon;
use crate::gameplay::scoring::SessionState;

/// Cadence for the pile-up census near the cannon.
#[derive(Resource, Deref, DerefMut)]
pub struct LossCheckTimer(pub Timer);

pub struct LossDetectorPlugin;

impl Plugin for LossDetectorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_loss_timer);
    }
}

fn setup_loss_timer(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.insert_resource(LossCheckTimer(Timer::from_seconds(
        cfg.loss.check_interval,
        TimerMode::Repeating,
    )));
}

/// Counts every labeled body inside the near-floor zone around the cannon;
/// strictly more than the limit ends the session for good. The census does
/// not distinguish debris from anything else, so the cannon and the floor
/// themselves are part of the count, as is the player's own projectile
/// backlog.
pub fn check_cannon_pileup(
    time: Res<Time>,
    mut timer: ResMut<LossCheckTimer>,
    cfg: Res<GameConfig>,
    mut session: ResMut<SessionState>,
    q_cannon: Query<&Transform, With<Cannon>>,
    q_bodies: Query<&Transform, With<SimBody>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if session.game_over {
        return;
    }
    timer.tick(time.delta());
    if !timer.just_finished() {
        return;
    }
    let Ok(cannon_tf) = q_cannon.single() else {
        return;
    };
    let zone_top = cfg.loss_zone_top_y();
    let cannon_x = cannon_tf.translation.x;
    let blocking = q_bodies
        .iter()
        .filter(|tf| {
            tf.translation.y < zone_top && (tf.translation.x - cannon_x).abs() < cfg.loss.radius
        })
        .count();
    if blocking > cfg.loss.max_bodies {
        session.game_over = true;
        next_state.set(AppState::GameOver);
        warn!(blocking, "cannon buried; session over");
    }
}
