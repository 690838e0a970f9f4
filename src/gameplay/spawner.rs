use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::core::components::{Prize, SimBody};
use crate::core::config::GameConfig;
use crate::core::rng::SessionRng;
use crate::gameplay::target::{Target, TargetResolved};

/// Pending respawn, armed whenever a target resolves.
#[derive(Resource, Default)]
pub struct RespawnTimer(pub Option<Timer>);

pub struct SpawnControllerPlugin;

impl Plugin for SpawnControllerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RespawnTimer>()
            .add_systems(Startup, spawn_initial_target);
    }
}

/// The first target spawns immediately at session start.
pub fn spawn_initial_target(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut rng: ResMut<SessionRng>,
) {
    spawn_target(&mut commands, &cfg, &mut rng);
}

/// Creates the next falling target at a random x inside the spawn band,
/// above the visible area, with a freshly drawn prize. Callers own the
/// at-most-one-alive guard.
pub fn spawn_target(commands: &mut Commands, cfg: &GameConfig, rng: &mut SessionRng) {
    let t = &cfg.target;
    // An oversized margin only warns at load; an empty range would panic
    // here, so degenerate margins collapse the band to the center.
    let band = (cfg.arena.half_width() - t.spawn_margin).max(1.0);
    let x = rng.gen_range(-band..band);
    let y = cfg.arena.half_height() + t.spawn_height;
    let prize = Prize::random(&mut rng.0);

    commands.spawn((
        Target { prize, alive: true },
        SimBody,
        RigidBody::Dynamic,
        Collider::ball(t.radius),
        Friction::coefficient(t.friction),
        Restitution::coefficient(t.restitution),
        Damping {
            linear_damping: t.linear_damping,
            angular_damping: 0.0,
        },
        Velocity::zero(),
        ActiveEvents::COLLISION_EVENTS,
        Sprite {
            color: prize.color,
            custom_size: Some(Vec2::splat(t.radius * 2.0)),
            ..default()
        },
        Transform::from_xyz(x, y, 0.0),
    ));
}

/// Every resolution (hit, explode, or miss) arms the respawn delay.
pub fn schedule_respawn(
    mut ev: EventReader<TargetResolved>,
    mut respawn: ResMut<RespawnTimer>,
    cfg: Res<GameConfig>,
) {
    if ev.read().next().is_some() {
        ev.clear();
        respawn.0 = Some(Timer::from_seconds(
            cfg.target.respawn_delay,
            TimerMode::Once,
        ));
    }
}

/// Spawns the next target once the delay elapses, unless one is somehow
/// still alive (overlapping resolutions must not double-spawn).
pub fn tick_respawn(
    time: Res<Time>,
    mut respawn: ResMut<RespawnTimer>,
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut rng: ResMut<SessionRng>,
    q_alive: Query<(), With<Target>>,
) {
    let Some(timer) = respawn.0.as_mut() else {
        return;
    };
    timer.tick(time.delta());
    if !timer.finished() {
        return;
    }
    respawn.0 = None;
    if q_alive.is_empty() {
        spawn_target(&mut commands, &cfg, &mut rng);
    }
}
