use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::core::components::{Prize, SimBody};
use crate::core::config::GameConfig;
use crate::core::rng::SessionRng;
use crate::gameplay::lifetime::Lifetime;

/// How a target left the `Falling` state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetOutcome {
    /// Collision resolved in the player's favor; carries the prize.
    Hit(Prize),
    /// Collision resolved destructively; particles were spawned.
    Explode,
    /// The target reached the floor untouched.
    Miss,
}

/// Emitted exactly once per target when it resolves.
#[derive(Event, Debug, Clone, Copy)]
pub struct TargetResolved {
    pub outcome: TargetOutcome,
}

/// A falling prize target. `alive` flips to false on the first resolution
/// path and guards the body against a second path racing it in the same
/// frame; it must be cleared before the despawn command is queued.
#[derive(Component, Debug)]
pub struct Target {
    pub prize: Prize,
    pub alive: bool,
}

/// Explosion debris body.
#[derive(Component)]
pub struct Particle;

pub struct TargetPlugin;

impl Plugin for TargetPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TargetResolved>();
    }
}

/// Resolves target contacts into Hit or Explode. Contacts between two
/// targets settle nothing; any other body (projectile, wall, cannon,
/// debris) triggers the draw.
pub fn resolve_target_collisions(
    mut commands: Commands,
    mut collisions: EventReader<CollisionEvent>,
    mut rng: ResMut<SessionRng>,
    cfg: Res<GameConfig>,
    mut q_targets: Query<(&Transform, &mut Target)>,
    mut ew: EventWriter<TargetResolved>,
) {
    for ev in collisions.read() {
        let CollisionEvent::Started(e1, e2, _flags) = ev else {
            continue;
        };
        let (target_entity, other) = if q_targets.contains(*e1) {
            (*e1, *e2)
        } else if q_targets.contains(*e2) {
            (*e2, *e1)
        } else {
            continue;
        };
        if q_targets.contains(other) {
            continue;
        }
        let Ok((tf, mut target)) = q_targets.get_mut(target_entity) else {
            continue;
        };
        if !target.alive {
            continue;
        }
        // Resolution order matters: drop the guard first, then remove the
        // body, so no later system this frame sees a live target.
        target.alive = false;
        let prize = target.prize;
        let last_pos = tf.translation.truncate();
        commands.entity(target_entity).despawn();

        // gen_bool rejects probabilities outside [0,1]; out-of-range config
        // values only warn at load, so clamp here.
        let hit_chance = f64::from(cfg.target.hit_chance.clamp(0.0, 1.0));
        if rng.gen_bool(hit_chance) {
            ew.write(TargetResolved {
                outcome: TargetOutcome::Hit(prize),
            });
        } else {
            spawn_explosion(&mut commands, &cfg, last_pos, prize.color);
            ew.write(TargetResolved {
                outcome: TargetOutcome::Explode,
            });
        }
    }
}

/// A still-falling target below the floor line counts as missed. Runs after
/// collision resolution so a contact in the same physics step wins.
pub fn check_ground_miss(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut q_targets: Query<(Entity, &Transform, &mut Target)>,
    mut ew: EventWriter<TargetResolved>,
) {
    let floor = cfg.miss_line_y();
    for (entity, tf, mut target) in q_targets.iter_mut() {
        if target.alive && tf.translation.y < floor {
            target.alive = false;
            commands.entity(entity).despawn();
            ew.write(TargetResolved {
                outcome: TargetOutcome::Miss,
            });
        }
    }
}

/// Radial velocity of particle `i` in a ring of `count`.
pub fn particle_velocity(i: usize, count: usize, speed: f32) -> Vec2 {
    let angle = std::f32::consts::TAU * i as f32 / count as f32;
    Vec2::new(angle.cos(), angle.sin()) * speed
}

fn spawn_explosion(commands: &mut Commands, cfg: &GameConfig, origin: Vec2, color: Color) {
    let ex = &cfg.explosion;
    for i in 0..ex.particle_count {
        commands.spawn((
            Particle,
            SimBody,
            RigidBody::Dynamic,
            Collider::ball(ex.particle_radius),
            Velocity::linear(particle_velocity(i, ex.particle_count, ex.particle_speed)),
            Damping {
                linear_damping: ex.particle_damping,
                angular_damping: 0.0,
            },
            Lifetime::new(ex.particle_lifetime),
            Sprite {
                color,
                custom_size: Some(Vec2::splat(ex.particle_radius * 2.0)),
                ..default()
            },
            Transform::from_translation(origin.extend(0.0)),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn particle_ring_has_equal_spacing_and_speed() {
        let count = 8;
        let speed = 300.0;
        let velocities: Vec<Vec2> = (0..count)
            .map(|i| particle_velocity(i, count, speed))
            .collect();
        for v in &velocities {
            assert!((v.length() - speed).abs() < 1e-3);
        }
        for pair in velocities.windows(2) {
            let spacing = pair[0].angle_to(pair[1]);
            assert!((spacing - TAU / count as f32).abs() < 1e-4);
        }
    }
}
