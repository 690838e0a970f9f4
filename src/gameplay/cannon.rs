use std::time::Duration;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::AppState;
use crate::core::components::SimBody;
use crate::core::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;
use crate::gameplay::lifetime::Lifetime;

const CANNON_COLOR: Color = Color::srgb(0.31, 0.27, 0.90);
/// Upper bound on catch-up shots after a long frame (or a zero interval,
/// where the repeating timer reports u32::MAX elapsed cycles).
const MAX_SHOTS_PER_FRAME: u32 = 8;
const PROJECTILE_COLOR: Color = Color::srgb(0.38, 0.65, 0.98);

/// Aim state of the single cannon body. Angle 0 points straight up;
/// positive angles lean toward +x.
#[derive(Component, Debug)]
pub struct Cannon {
    pub angle: f32,
}

impl Cannon {
    /// Applies a rotation delta, clamped to the configured arc.
    pub fn rotate(&mut self, delta: f32, max_angle: f32) {
        self.angle = (self.angle + delta).clamp(-max_angle, max_angle);
    }

    /// Unit aim direction in world space.
    pub fn aim_dir(&self) -> Vec2 {
        Vec2::new(self.angle.sin(), self.angle.cos())
    }
}

/// Marker for projectiles fired by the cannon.
#[derive(Component)]
pub struct Projectile;

/// Commands accepted from the input / session layer.
#[derive(Event, Debug, Clone, Copy)]
pub enum CannonCommand {
    /// Rotate the aim by this delta (radians), clamped to the arc.
    Rotate(f32),
    StartFiring,
    StopFiring,
}

/// Fire-rate state. Starting while already firing is a no-op so the
/// interval timer never restarts mid-cycle.
#[derive(Resource, Debug)]
pub struct FireControl {
    firing: bool,
    timer: Timer,
}

impl FireControl {
    pub fn new(interval: f32) -> Self {
        Self {
            firing: false,
            timer: Timer::from_seconds(interval, TimerMode::Repeating),
        }
    }

    pub fn start(&mut self) {
        if !self.firing {
            self.firing = true;
            self.timer.reset();
        }
    }

    pub fn stop(&mut self) {
        self.firing = false;
    }

    pub fn firing(&self) -> bool {
        self.firing
    }

    /// Advances the interval timer; returns how many shots are due. A frame
    /// spanning several intervals owes one shot per elapsed interval, capped
    /// so a stalled frame cannot flood the world.
    pub fn tick(&mut self, delta: Duration) -> u32 {
        if !self.firing {
            return 0;
        }
        self.timer.tick(delta);
        self.timer
            .times_finished_this_tick()
            .min(MAX_SHOTS_PER_FRAME)
    }
}

pub struct CannonPlugin;

impl Plugin for CannonPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CannonCommand>()
            .add_systems(Startup, (setup_fire_control, spawn_cannon))
            .add_systems(
                Update,
                (apply_cannon_commands, fire_projectiles)
                    .chain()
                    .in_set(PrePhysicsSet)
                    .run_if(in_state(AppState::Playing)),
            );
    }
}

fn setup_fire_control(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.insert_resource(FireControl::new(cfg.cannon.fire_interval));
}

pub fn spawn_cannon(mut commands: Commands, cfg: Res<GameConfig>) {
    let size = Vec2::new(cfg.cannon.width, cfg.cannon.height);
    commands.spawn((
        Cannon { angle: 0.0 },
        SimBody,
        RigidBody::Fixed,
        Collider::cuboid(size.x / 2.0, size.y / 2.0),
        Sprite {
            color: CANNON_COLOR,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(cfg.cannon_position().extend(0.0)),
    ));
}

pub fn apply_cannon_commands(
    mut ev: EventReader<CannonCommand>,
    mut fire: ResMut<FireControl>,
    cfg: Res<GameConfig>,
    mut q_cannon: Query<(&mut Cannon, &mut Transform)>,
) {
    let Ok((mut cannon, mut tf)) = q_cannon.single_mut() else {
        return;
    };
    for cmd in ev.read() {
        match *cmd {
            CannonCommand::Rotate(delta) => {
                cannon.rotate(delta, cfg.cannon.max_angle);
                tf.rotation = Quat::from_rotation_z(-cannon.angle);
            }
            CannonCommand::StartFiring => fire.start(),
            CannonCommand::StopFiring => fire.stop(),
        }
    }
}

/// Spawns one projectile per elapsed fire interval at the muzzle point,
/// kicked along the aim direction. Each projectile carries its own expiry.
pub fn fire_projectiles(
    mut commands: Commands,
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut fire: ResMut<FireControl>,
    q_cannon: Query<(&Transform, &Cannon)>,
) {
    let shots = fire.tick(time.delta());
    if shots == 0 {
        return;
    }
    let Ok((tf, cannon)) = q_cannon.single() else {
        return;
    };
    let p = &cfg.cannon.projectile;
    let dir = cannon.aim_dir();
    let muzzle = tf.translation.truncate() + dir * cfg.cannon.barrel_length;
    for _ in 0..shots {
        commands.spawn((
            Projectile,
            SimBody,
            RigidBody::Dynamic,
            Collider::ball(p.radius),
            Restitution::coefficient(p.restitution),
            Velocity::zero(),
            ExternalImpulse {
                impulse: dir * p.impulse,
                torque_impulse: 0.0,
            },
            ActiveEvents::COLLISION_EVENTS,
            Lifetime::new(p.lifetime),
            Sprite {
                color: PROJECTILE_COLOR,
                custom_size: Some(Vec2::splat(p.radius * 2.0)),
                ..default()
            },
            Transform::from_translation(muzzle.extend(0.0)),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_3;

    #[test]
    fn rotate_clamps_to_arc() {
        let mut cannon = Cannon { angle: 0.0 };
        // Repeated small negative deltas converge to exactly the clamp value.
        for _ in 0..50 {
            cannon.rotate(-0.1, FRAC_PI_3);
        }
        assert_eq!(cannon.angle, -FRAC_PI_3);
        for _ in 0..200 {
            cannon.rotate(0.3, FRAC_PI_3);
        }
        assert_eq!(cannon.angle, FRAC_PI_3);
    }

    #[test]
    fn aim_dir_is_unit_length() {
        for angle in [-FRAC_PI_3, -0.5, 0.0, 0.7, FRAC_PI_3] {
            let cannon = Cannon { angle };
            assert!((cannon.aim_dir().length() - 1.0).abs() < 1e-5);
        }
        assert!(Cannon { angle: 0.0 }.aim_dir().abs_diff_eq(Vec2::Y, 1e-6));
    }

    #[test]
    fn fire_control_cadence() {
        let mut fire = FireControl::new(0.2);
        assert_eq!(fire.tick(Duration::from_millis(500)), 0, "not firing yet");

        fire.start();
        assert_eq!(fire.tick(Duration::from_millis(100)), 0);
        assert_eq!(fire.tick(Duration::from_millis(100)), 1);
        assert_eq!(fire.tick(Duration::from_millis(50)), 0);
        assert_eq!(fire.tick(Duration::from_millis(150)), 1);
    }

    #[test]
    fn long_frame_owes_one_shot_per_interval() {
        let mut fire = FireControl::new(0.2);
        fire.start();
        // 650ms spans three full 200ms intervals, remainder 50ms.
        assert_eq!(fire.tick(Duration::from_millis(650)), 3);
        assert_eq!(fire.tick(Duration::from_millis(150)), 1);
    }

    #[test]
    fn catch_up_is_capped() {
        let mut fire = FireControl::new(0.2);
        fire.start();
        assert_eq!(fire.tick(Duration::from_secs(3600)), MAX_SHOTS_PER_FRAME);
    }

    #[test]
    fn start_while_firing_keeps_the_timer() {
        let mut fire = FireControl::new(0.2);
        fire.start();
        assert_eq!(fire.tick(Duration::from_millis(150)), 0);
        // A second start must not reset the 150ms already elapsed.
        fire.start();
        assert_eq!(fire.tick(Duration::from_millis(50)), 1);
    }

    #[test]
    fn stop_cancels_emission() {
        let mut fire = FireControl::new(0.2);
        fire.start();
        fire.stop();
        assert!(!fire.firing());
        assert_eq!(fire.tick(Duration::from_secs(5)), 0);
        // Stop when not firing is harmless.
        fire.stop();
    }
}
